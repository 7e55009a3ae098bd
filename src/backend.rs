//! Backend trait implemented by upstream source integrations

use async_trait::async_trait;

use crate::error::Error;
use crate::ordering::order_versions;
use crate::types::Project;

/// Trait each upstream source integration implements.
///
/// A backend knows how to build the URL and extraction pattern for the kind
/// of hosting it covers (source forge, tarball directory listing, ...) and
/// uses the fetcher and extractor to pull versions out of it.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Unique display name of this backend
    fn name(&self) -> &'static str;

    /// Usage examples shown to people configuring a project against this
    /// backend. Informational only.
    fn examples(&self) -> &'static [&'static str] {
        &[]
    }

    /// Retrieves the latest version of `project` found upstream.
    async fn get_version(&self, project: &Project) -> Result<String, Error>;

    /// Retrieves all versions of `project` found upstream, order
    /// unspecified.
    async fn get_versions(&self, project: &Project) -> Result<Vec<String>, Error>;

    /// Retrieves all versions of `project`, ordered oldest to newest.
    ///
    /// The default implementation sorts the result of `get_versions` with
    /// [`order_versions`]; backends whose source is already ordered may
    /// override it.
    async fn get_ordered_versions(&self, project: &Project) -> Result<Vec<String>, Error> {
        let versions = self.get_versions(project).await?;
        Ok(order_versions(versions))
    }
}
