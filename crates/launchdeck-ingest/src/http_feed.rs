//! HTTP implementation of `LaunchFeed` against the SpaceX v4 API

use std::time::Duration;

use async_trait::async_trait;
use launchdeck_core::Result;

use crate::errors::from_reqwest;
use crate::feed::LaunchFeed;
use crate::upstream::{QueryRequest, QueryResponse, UpstreamLaunch};

pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Connection settings for the upstream feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// API root without the `/launches/query` suffix
    pub base_url: String,
    /// Per-request deadline
    pub timeout: Duration,
    /// Documents requested per page
    pub page_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            page_size: 100,
        }
    }
}

/// Upstream launch catalog over HTTP
#[derive(Debug)]
pub struct SpaceXFeed {
    client: reqwest::Client,
    query_url: String,
    page_size: u32,
}

impl SpaceXFeed {
    /// Build a client with the configured request timeout
    ///
    /// # Errors
    /// `ExternalService` if the HTTP client cannot be constructed
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| from_reqwest("build_client", e))?;
        Ok(Self {
            client,
            query_url: format!("{}/launches/query", config.base_url.trim_end_matches('/')),
            page_size: config.page_size.max(1),
        })
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    async fn fetch_page(&self, page: u32) -> Result<QueryResponse> {
        let response = self
            .client
            .post(&self.query_url)
            .json(&QueryRequest::all_launches(page, self.page_size))
            .send()
            .await
            .map_err(|e| from_reqwest("fetch_launches", e))?
            .error_for_status()
            .map_err(|e| from_reqwest("fetch_launches", e))?;

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| from_reqwest("fetch_launches", e))
    }
}

#[async_trait]
impl LaunchFeed for SpaceXFeed {
    async fn fetch_all(&self) -> Result<Vec<UpstreamLaunch>> {
        let mut launches = Vec::new();
        let mut page = 1;

        loop {
            let response = self.fetch_page(page).await?;
            tracing::debug!(
                page,
                record_count = response.docs.len(),
                "fetched upstream page"
            );
            launches.extend(response.docs);

            match response.next_page {
                Some(next) if response.has_next_page && next > page => page = next,
                _ => break,
            }
        }

        Ok(launches)
    }
}
