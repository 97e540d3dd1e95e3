//! The fetch contract every transport must satisfy.

use crate::api::FetchRequest;
use crate::error::{NetworkError, NetworkResult};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// A type-safe fetch abstraction over a single HTTP exchange.
///
/// Transports implement exactly one method, [`fetch`](Network::fetch); the
/// URL- and string-based conveniences are one shared default implementation
/// that every conforming transport inherits, and they are not meant to be
/// overridden. Each operation performs one exchange and delivers exactly one
/// outcome — failures arrive through the [`NetworkResult`] channel, never as
/// panics.
///
/// The response shape is fixed per transport instance through the
/// [`Model`](Network::Model) associated type and resolved at compile time.
#[async_trait]
pub trait Network: Send + Sync {
    /// The response shape a successful exchange decodes into.
    type Model: DeserializeOwned + Send;

    /// Execute one canonical request and deliver its classified outcome.
    ///
    /// This is the primitive every other operation reduces to. The request is
    /// taken as-is: no headers are added and no normalization is applied.
    async fn fetch(&self, request: FetchRequest) -> NetworkResult<Self::Model>;

    /// Fetch `url`, as a `POST` carrying `body` when one is present and as a
    /// `GET` otherwise. The request always carries `accept: application/json`.
    async fn fetch_url(&self, url: Url, body: Option<Vec<u8>>) -> NetworkResult<Self::Model> {
        self.fetch(FetchRequest::for_url(url, body)).await
    }

    /// Parse `url` and fetch it like [`fetch_url`](Network::fetch_url).
    ///
    /// An unparseable string completes immediately with an
    /// [`ErrorType::InvalidUrl`](crate::error::ErrorType::InvalidUrl) failure;
    /// no network activity takes place.
    async fn fetch_url_str(&self, url: &str, body: Option<Vec<u8>>) -> NetworkResult<Self::Model> {
        match Url::parse(url) {
            Ok(url) => self.fetch_url(url, body).await,
            Err(e) => Err(NetworkError::invalid_url(e)),
        }
    }
}
