//! Command line configuration.

use std::time::Duration;

use clap::Parser;

use arena_shared::{
    DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE, DEFAULT_PACE_MS, DEFAULT_SAMPLE_SIZE,
    DEFAULT_TIMEOUT_SECS,
};

use crate::error::{ArenaError, Result};

/// Fetch creatures from the API and pit two random ones against each other
#[derive(Debug, Parser)]
#[command(name = "arena", version, about)]
pub struct Args {
    /// API root URL
    #[arg(long, env = "ARENA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Entries per listing request
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: u32,

    /// Entries whose details are fetched
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Delay between printed battle events, in milliseconds
    #[arg(long, default_value_t = DEFAULT_PACE_MS)]
    pub pace_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub chunk_size: u32,
    pub sample_size: usize,
    pub pace: Duration,
    pub timeout: Duration,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.chunk_size == 0 {
            return Err(ArenaError::validation("--chunk-size must be at least 1"));
        }
        if args.sample_size < 2 {
            return Err(ArenaError::validation("--sample-size must be at least 2"));
        }
        if args.timeout_secs == 0 {
            return Err(ArenaError::validation("--timeout-secs must be at least 1"));
        }

        Ok(Self {
            base_url: args.base_url,
            chunk_size: args.chunk_size,
            sample_size: args.sample_size,
            pace: Duration::from_millis(args.pace_ms),
            timeout: Duration::from_secs(args.timeout_secs),
        })
    }
}
