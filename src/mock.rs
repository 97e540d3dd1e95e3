//! Scripted mock transport for exercising the contract's default methods.
//!
//! Gated with `#[cfg(test)]`; integration tests carry their own copy under
//! `tests/common/`.

use crate::api::FetchRequest;
use crate::error::{NetworkError, NetworkResult};
use crate::traits::Network;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Mock transport with a scripted outcome queue.
///
/// Every `fetch` call records the canonical request it received and pops the
/// next scripted outcome; once the script is exhausted, calls fail as
/// unknown. The recorded requests let tests assert exactly what the default
/// methods built and how often the primitive was invoked.
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

    /// Append an outcome to the script.
    pub fn with_outcome(self, outcome: NetworkResult<M>) -> Self {
        self.script.lock().unwrap().push_back(outcome);
        self
    }

    /// Number of times `fetch` was invoked.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The most recent canonical request `fetch` received.
    pub fn last_request(&self) -> Option<FetchRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl<M: DeserializeOwned + Send> Network for MockNetwork<M> {
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
