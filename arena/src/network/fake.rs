//! In-memory HTTP client for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::HttpClient;
use crate::error::{ArenaError, Result};

/// Canned response for one URL
enum Route {
    Json(serde_json::Value),
    Status(u16),
}

/// Serves canned JSON per URL, optionally after a delay
#[derive(Default)]
pub struct FakeClient {
    routes: HashMap<String, (Route, Duration)>,
    requests: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: serde_json::Value) -> Self {
        self.routes.insert(url.to_string(), (Route::Json(body), Duration::ZERO));
        self
    }

    pub fn with_delayed_json(mut self, url: &str, body: serde_json::Value, delay: Duration) -> Self {
        self.routes.insert(url.to_string(), (Route::Json(body), delay));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.routes.insert(url.to_string(), (Route::Status(status), Duration::ZERO));
        self
    }

    /// URLs requested so far, in issue order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for FakeClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        self.requests.lock().unwrap().push(url.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        let result = match self.routes.get(url) {
            Some((route, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                match route {
                    Route::Json(body) => Ok(body.clone()),
                    Route::Status(status) => {
                        Err(ArenaError::protocol(url, format!("unexpected status {}", status)))
                    }
                }
            }
            None => Err(ArenaError::transport(url, "connection refused")),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
