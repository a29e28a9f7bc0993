//! Listing fetcher and paginated aggregator.

use std::num::NonZeroU32;

use futures::future::try_join_all;
use log::{debug, info};

use arena_shared::{IndexEntry, ListingPage, MAX_CHUNKS};

use super::PokeApi;
use crate::error::{ArenaError, Result};
use crate::network::HttpClient;

/// Start offsets of every chunk needed to cover `total` entries
fn chunk_offsets(total: u64, chunk_size: NonZeroU32) -> impl Iterator<Item = u64> {
    (0..total).step_by(chunk_size.get() as usize)
}

impl<C: HttpClient> PokeApi<C> {
    /// Fetch one page of index entries
    pub async fn fetch_listing(&self, offset: u64, limit: u32) -> Result<ListingPage> {
        let url = self.listing_url(offset, limit);
        let body = self.client.get_json(&url).await?;
        serde_json::from_value(body)
            .map_err(|e| ArenaError::protocol(url, format!("malformed listing: {}", e)))
    }

    /// Fetch the whole collection in `chunk_size` pages, all in flight at once.
    ///
    /// A one-entry probe learns the collection size first. Entries come back in
    /// collection order regardless of which chunk finishes first. A size that
    /// would take more than [`MAX_CHUNKS`] requests is rejected.
    pub async fn fetch_all_entries(&self, chunk_size: u32) -> Result<Vec<IndexEntry>> {
        let step = NonZeroU32::new(chunk_size)
            .ok_or_else(|| ArenaError::validation("chunk size must be positive"))?;

        let probe = self.fetch_listing(0, 1).await?;
        let total = u64::try_from(probe.count).map_err(|_| {
            ArenaError::validation(format!("collection reported negative size {}", probe.count))
        })?;

        let chunks = total.div_ceil(u64::from(chunk_size));
        if chunks > MAX_CHUNKS {
            return Err(ArenaError::validation(format!(
                "collection size {} needs {} chunks of {}, limit is {}",
                total, chunks, chunk_size, MAX_CHUNKS
            )));
        }
        info!(
            "Collection has {} entries, fetching {} chunks of {}",
            total, chunks, chunk_size
        );

        let pages = try_join_all(
            chunk_offsets(total, step).map(|offset| self.fetch_listing(offset, chunk_size)),
        )
        .await?;

        let entries: Vec<IndexEntry> = pages.into_iter().flat_map(|page| page.results).collect();
        debug!("Aggregated {} index entries", entries.len());

        Ok(entries)
    }
}
