//! Listing and detail retrieval against the creature API.
//!
//! Both aggregators fan requests out on the current task and join them with
//! [`futures::future::try_join_all`], so output order always follows request
//! order and the first failing request fails the whole call.

mod listing;
mod detail;

use arena_shared::COLLECTION_PATH;

use crate::network::HttpClient;

/// API facade over an [`HttpClient`]
pub struct PokeApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> PokeApi<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL of one listing page
    fn listing_url(&self, offset: u64, limit: u32) -> String {
        format!(
            "{}/{}?offset={}&limit={}",
            self.base_url, COLLECTION_PATH, offset, limit
        )
    }
}
