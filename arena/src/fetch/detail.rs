//! Detail fetcher and detail aggregator.

use futures::future::try_join_all;
use log::info;

use arena_shared::{DetailRecord, IndexEntry};

use super::PokeApi;
use crate::error::Result;
use crate::network::HttpClient;

impl<C: HttpClient> PokeApi<C> {
    /// Fetch one full record from its per-entity URL
    pub async fn fetch_detail(&self, url: &str) -> Result<DetailRecord> {
        let body = self.client.get_json(url).await?;
        Ok(DetailRecord::new(body))
    }

    /// Fetch details for every entry concurrently; output `i` belongs to entry `i`
    pub async fn fetch_detail_batch(&self, entries: &[IndexEntry]) -> Result<Vec<DetailRecord>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        info!("Fetching details for {} entries", entries.len());
        try_join_all(entries.iter().map(|entry| self.fetch_detail(&entry.url))).await
    }
}
