//! reqwest-backed HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::HttpClient;
use crate::error::{ArenaError, Result};

/// Production HTTP client
#[derive(Clone)]
pub struct ReqwestClient {
    http_client: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArenaError::transport("<client>", e))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ArenaError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArenaError::protocol(url, format!("unexpected status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ArenaError::transport(url, e))?;

        serde_json::from_str(&body)
            .map_err(|e| ArenaError::protocol(url, format!("malformed body: {}", e)))
    }
}
