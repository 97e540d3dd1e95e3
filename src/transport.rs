//! Default transport: the fetch contract executed over a [`reqwest::Client`].

use crate::api::{FetchRequest, ResponseMetadata};
use crate::error::{NetworkError, NetworkResult};
use crate::traits::Network;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Instant;

/// The default [`Network`] transport.
///
/// The injected [`reqwest::Client`] is the only configuration this type
/// recognizes: timeouts, proxies, TLS, and connection pooling all live on the
/// client. A client instance is internally reference-counted and may back any
/// number of `ReqwestNetwork` values and concurrent fetch calls.
///
/// Completion resumes on whatever tokio worker the client drives the exchange
/// on; no thread affinity is guaranteed.
pub struct ReqwestNetwork<M> {
    client: Client,
    _model: PhantomData<fn() -> M>,
}

impl<M> Default for ReqwestNetwork<M> {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl<M> ReqwestNetwork<M> {
    /// Create a transport over a fresh default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport over an existing (possibly shared) client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            _model: PhantomData,
        }
    }
}

#[async_trait]
impl<M: DeserializeOwned + Send> Network for ReqwestNetwork<M> {
    type Model = M;

    /// Execute the canonical request and classify its outcome.
    ///
    /// A send failure or unreadable body yields an unknown failure carrying
    /// the transport error. An empty body maps a non-success status to an
    /// HTTP-status failure and a success status to an unknown failure (nothing
    /// to decode, nothing wrong to report). Any non-empty body is handed to
    /// the JSON decoder **regardless of status**, yielding either the decoded
    /// model or a decoding failure — so a non-success status that arrives
    /// with a body surfaces through the decode outcome, never as an
    /// HTTP-status failure.
    async fn fetch(&self, request: FetchRequest) -> NetworkResult<M> {
        let FetchRequest {
            method,
            url,
            headers,
            body,
        } = request;
        tracing::debug!(method = %method, url = %url, "Dispatching HTTP exchange");
        let started = Instant::now();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }

        let outcome = exchange(builder).await;
        metrics::histogram!("http_fetch.duration_seconds").record(started.elapsed().as_secs_f64());
        match &outcome {
            Ok(_) => {
                metrics::counter!("http_fetch.total", "outcome" => "success").increment(1);
            }
            Err(e) => {
                metrics::counter!("http_fetch.total", "outcome" => "failure").increment(1);
                tracing::debug!(error = %e, "HTTP exchange classified as failure");
            }
        }
        outcome
    }
}

async fn exchange<M: DeserializeOwned>(builder: reqwest::RequestBuilder) -> NetworkResult<M> {
    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => return Err(NetworkError::unknown(Some(Box::new(e)))),
    };

    // Metadata must be captured up front: reading the body consumes the response.
    let metadata = ResponseMetadata::from_response(&response);
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return Err(NetworkError::unknown(Some(Box::new(e)))),
    };

    if body.is_empty() {
        if !metadata.status.is_success() {
            return Err(NetworkError::http_status(metadata, None));
        }
        return Err(NetworkError::unknown(None));
    }

    match serde_json::from_slice(&body) {
        Ok(model) => Ok(model),
        Err(e) => Err(NetworkError::decoding(metadata, e)),
    }
}
