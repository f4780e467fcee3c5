use async_trait::async_trait;
use launchdeck_core::Result;

use crate::upstream::UpstreamLaunch;

/// Source of the upstream launch catalog
#[async_trait]
pub trait LaunchFeed: Send + Sync {
    /// Fetch every launch document, following pagination to the end
    ///
    /// # Errors
    /// * `Timeout` - a request exceeded its deadline
    /// * `ExternalService` - the upstream was unreachable or answered with an error
    /// * `Serialization` - a response body did not decode
    async fn fetch_all(&self) -> Result<Vec<UpstreamLaunch>>;
}
