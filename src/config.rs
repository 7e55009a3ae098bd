use serde::Deserialize;
use std::time::Duration;

// =============================================================================
// Time-related constants
// =============================================================================

/// Connect and read timeout for FTP retrievals (30 seconds)
pub const FTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout for HTTP retrievals (120 seconds)
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// Identity attached to every outbound request.
///
/// Owned by the calling layer and handed to [`crate::fetcher::Fetcher`] at
/// construction; nothing here is read from global state.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FetcherConfig {
    /// Application display name advertised in the user agent
    pub app_name: String,
    /// Application version advertised in the user agent
    pub app_version: String,
    /// Host the service runs at, completing the user agent string
    pub service_host: String,
    /// Operator contact sent in the `From` header and used as the anonymous
    /// FTP password
    pub admin_email: String,
}

impl FetcherConfig {
    /// Returns the `User-Agent` value, `"<name> <version> at <host>"`, so
    /// upstreams can tell who is querying them.
    pub fn user_agent(&self) -> String {
        format!(
            "{} {} at {}",
            self.app_name, self.app_version, self.service_host
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fetcher_config_parses_all_fields() {
        let config = serde_json::from_value::<FetcherConfig>(json!({
            "app_name": "relmon",
            "app_version": "0.1.0",
            "service_host": "release-monitoring.example.org",
            "admin_email": "admin@example.org"
        }))
        .unwrap();

        assert_eq!(
            config,
            FetcherConfig {
                app_name: "relmon".to_string(),
                app_version: "0.1.0".to_string(),
                service_host: "release-monitoring.example.org".to_string(),
                admin_email: "admin@example.org".to_string(),
            }
        );
    }

    #[test]
    fn user_agent_combines_name_version_and_host() {
        let config = FetcherConfig {
            app_name: "relmon".to_string(),
            app_version: "0.1.0".to_string(),
            service_host: "release-monitoring.example.org".to_string(),
            admin_email: "admin@example.org".to_string(),
        };

        assert_eq!(
            config.user_agent(),
            "relmon 0.1.0 at release-monitoring.example.org"
        );
    }
}
