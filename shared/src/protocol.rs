//! Wire types for the creature REST API.

use serde::{Deserialize, Serialize};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Collection endpoint path, relative to the API root
pub const COLLECTION_PATH: &str = "pokemon";

/// Entries requested per listing chunk
pub const DEFAULT_CHUNK_SIZE: u32 = 100;

/// Upper bound on listing chunks issued for one collection
pub const MAX_CHUNKS: u64 = 10_000;

/// Number of entries whose details are fetched for the arena
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Delay between printed battle events in milliseconds
pub const DEFAULT_PACE_MS: u64 = 200;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reference to a full record in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub url: String,
}

/// One page of the collection listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPage {
    /// Total size of the collection, not the size of this page
    pub count: i64,
    #[serde(default)]
    pub results: Vec<IndexEntry>,
}

/// Raw detail record as returned by the per-entity endpoint.
///
/// The shape is left open; only `name` and `stats` are ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailRecord(pub serde_json::Value);

impl DetailRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for DetailRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
