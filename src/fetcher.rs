//! Scheme-dispatched retrieval of upstream content
//!
//! HTTP(S) URLs go through a shared reqwest client; `ftp` and `ftps` URLs
//! use a blocking suppaftp session on the tokio blocking pool. Every HTTP
//! request carries a `User-Agent` identifying the service and a `From`
//! header with the operator contact; FTP sessions identify themselves the
//! FTP way, with an anonymous login using the contact address as password.

use std::net::{SocketAddr, ToSocketAddrs};

use reqwest::Url;
use suppaftp::native_tls::TlsConnector;
use suppaftp::{FtpError, NativeTlsConnector, NativeTlsFtpStream};
use tracing::debug;

use crate::config::{FTP_TIMEOUT, FetcherConfig, HTTP_TIMEOUT};
use crate::error::FetchError;

const DEFAULT_FTP_PORT: u16 = 21;

/// Content retrieved from an upstream URL.
///
/// FTP retrievals return the raw file bytes; HTTP retrievals are decoded to
/// text using the response's declared encoding. [`Content::into_text`] gives
/// a uniform text view either way, so consumers never have to inspect which
/// strategy produced the content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Bytes(Vec<u8>),
    Text(String),
}

impl Content {
    /// Decoded text view of the content. Raw bytes decode as UTF-8 with
    /// invalid sequences replaced.
    pub fn into_text(self) -> String {
        match self {
            Content::Bytes(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Content::Text(text) => text,
        }
    }

    /// Raw bytes of the content.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Content::Bytes(bytes) => bytes,
            Content::Text(text) => text.into_bytes(),
        }
    }
}

/// Upstream content fetcher.
///
/// Holds no per-call state; a single instance can serve any number of
/// concurrent checks.
pub struct Fetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Retrieves the content behind `url`, dispatching on its scheme.
    ///
    /// `ftp` and `ftps` URLs are fetched over a dedicated FTP session with a
    /// fixed 30 second connect/read timeout; every other scheme is handed to
    /// the HTTP client as a GET.
    pub async fn fetch(&self, url: &str) -> Result<Content, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        match parsed.scheme() {
            "ftp" | "ftps" => self.fetch_ftp(&parsed).await,
            _ => self.fetch_http(url).await,
        }
    }

    async fn fetch_http(&self, url: &str) -> Result<Content, FetchError> {
        debug!(url, "fetching over http");

        let response = self
            .client
            .get(url)
            .header("From", &self.config.admin_email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(Content::Text(response.text().await?))
    }

    async fn fetch_ftp(&self, url: &Url) -> Result<Content, FetchError> {
        let host = url
            .host_str()
            .ok_or_else(|| FetchError::InvalidUrl(format!("missing host: {url}")))?
            .to_string();
        let port = url.port().unwrap_or(DEFAULT_FTP_PORT);
        let path = url.path().to_string();
        let secure = url.scheme() == "ftps";
        let password = self.config.admin_email.clone();

        debug!(%url, "fetching over ftp");

        // suppaftp is blocking; keep it off the async executor.
        tokio::task::spawn_blocking(move || {
            fetch_ftp_blocking(&host, port, &path, secure, &password)
        })
        .await?
    }
}

fn fetch_ftp_blocking(
    host: &str,
    port: u16,
    path: &str,
    secure: bool,
    password: &str,
) -> Result<Content, FetchError> {
    let addr = resolve(host, port)?;

    let mut stream = NativeTlsFtpStream::connect_timeout(addr, FTP_TIMEOUT)?;
    stream
        .get_ref()
        .set_read_timeout(Some(FTP_TIMEOUT))
        .map_err(FtpError::ConnectionError)?;

    if secure {
        let connector = TlsConnector::new().map_err(|e| FetchError::Tls(e.to_string()))?;
        stream = stream.into_secure(NativeTlsConnector::from(connector), host)?;
    }

    stream.login("anonymous", password)?;
    let buffer = stream.retr_as_buffer(path)?;
    let _ = stream.quit();

    Ok(Content::Bytes(buffer.into_inner()))
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr, FetchError> {
    (host, port)
        .to_socket_addrs()
        .map_err(|e| FetchError::UnresolvedHost(format!("{host}: {e}")))?
        .next()
        .ok_or_else(|| FetchError::UnresolvedHost(host.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn test_config() -> FetcherConfig {
        FetcherConfig {
            app_name: "relmon".to_string(),
            app_version: "0.1.0".to_string(),
            service_host: "release-monitoring.example.org".to_string(),
            admin_email: "admin@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_sends_identifying_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/releases")
            .match_header(
                "user-agent",
                "relmon 0.1.0 at release-monitoring.example.org",
            )
            .match_header("from", "admin@example.org")
            .with_status(200)
            .with_body("guake-1.0.tar.gz")
            .create_async()
            .await;

        let fetcher = Fetcher::new(test_config()).unwrap();
        let content = fetcher
            .fetch(&format!("{}/releases", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(content.into_text(), "guake-1.0.tar.gz");
    }

    #[tokio::test]
    async fn fetch_returns_status_error_for_non_success_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/releases")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = Fetcher::new(test_config()).unwrap();
        let result = fetcher.fetch(&format!("{}/releases", server.url())).await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Status(status)) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn fetch_rejects_unparseable_url() {
        let fetcher = Fetcher::new(test_config()).unwrap();
        let result = fetcher.fetch("not a url").await;

        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn fetch_returns_network_error_for_unreachable_host() {
        let fetcher = Fetcher::new(test_config()).unwrap();
        let result = fetcher.fetch("http://invalid.localhost.test:1/").await;

        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[test]
    fn content_into_text_decodes_bytes_lossily() {
        let content = Content::Bytes(vec![0x66, 0x6f, 0x6f, 0xff]);
        assert_eq!(content.into_text(), "foo\u{fffd}");
    }

    #[test]
    fn content_into_bytes_round_trips_text() {
        let content = Content::Text("1.0".to_string());
        assert_eq!(content.into_bytes(), b"1.0");
    }
}
