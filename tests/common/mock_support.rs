//! Shared test support: a fixture model and a scripted mock transport built
//! purely on the crate's public API.

#![allow(dead_code)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use uni_fetch::api::FetchRequest;
use uni_fetch::error::{NetworkError, NetworkResult};
use uni_fetch::traits::Network;

/// Fixture response model used across the integration tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    pub fn sample() -> Self {
        Self {
            id: 1,
            name: "A".to_string(),
        }
    }

    /// The JSON wire form of [`sample`](Self::sample).
    pub const SAMPLE_JSON: &'static str = r#"{"id":1,"name":"A"}"#;
}

/// Mock transport with a scripted outcome queue and recorded requests.
pub struct MockNetwork<M> {
    script: Mutex<VecDeque<NetworkResult<M>>>,
    requests: Mutex<Vec<FetchRequest>>,
    call_count: AtomicU32,
}

impl<M> MockNetwork<M> {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicU32::new(0),
        }
    }

    pub fn with_outcome(self, outcome: NetworkResult<M>) -> Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<FetchRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl<M: serde::de::DeserializeOwned + Send> Network for MockNetwork<M> {
    type Model = M;

    async fn fetch(&self, request: FetchRequest) -> NetworkResult<M> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::unknown(None)))
    }
}
