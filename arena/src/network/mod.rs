//! HTTP capability consumed by the fetchers.

mod client;
#[cfg(test)]
pub(crate) mod fake;

pub use client::ReqwestClient;

use async_trait::async_trait;

use crate::error::Result;

/// Something that can GET a URL and hand back its JSON body.
///
/// Implementations must be shareable across concurrently polled requests;
/// each call owns its own request and response.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value>;
}
