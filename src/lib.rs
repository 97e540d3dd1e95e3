//! Type-safe async HTTP fetch client.
//!
//! Uni-Fetch wraps a single HTTP exchange behind one polymorphic contract:
//! describe the request (a canonical request, a URL + optional body, or a URL
//! string + optional body) and get back either the response body decoded into
//! your own type or a classified [`NetworkError`](error::NetworkError). No
//! retries, caching, or connection management live here — one call, one
//! exchange, one outcome.
//!
//! # Key concepts
//!
//! - **[`Network`](traits::Network)** — the fetch contract. Transports
//!   implement one required method; the URL- and string-based conveniences
//!   come for free as default methods.
//! - **[`FetchRequest`](api::FetchRequest)** — the canonical
//!   method/url/headers/body form every operation reduces to.
//! - **[`ReqwestNetwork`](transport::ReqwestNetwork)** — the default transport
//!   over an injected [`reqwest::Client`].
//! - **[`ErrorType`](error::ErrorType)** — the closed failure taxonomy:
//!   unknown, decoding, invalid URL, HTTP status.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use uni_fetch::traits::Network;
//! use uni_fetch::transport::ReqwestNetwork;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let network: ReqwestNetwork<User> = ReqwestNetwork::new();
//! let user = network
//!     .fetch_url_str("https://api.example.com/users/1", None)
//!     .await?;
//! println!("fetched {}", user.name);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod traits;
pub mod transport;

#[cfg(test)]
mod mock;
