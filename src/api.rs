//! Request and response value types shared by every transport.

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};

/// The canonical request form that every fetch operation reduces to.
///
/// A `FetchRequest` is constructed fresh per invocation and discarded once the
/// exchange completes; nothing is shared between invocations. Header insertion
/// order carries no meaning.
///
/// Requests built through [`for_url`](Self::for_url) always carry
/// `accept: application/json`. Requests built through [`new`](Self::new) carry
/// exactly the headers the caller attaches.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// HTTP method — `GET` for body-less fetches, `POST` when a body is attached.
    pub method: Method,
    /// Fully parsed target URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Raw request payload, passed through verbatim when present. Callers
    /// produce it separately (typically with [`serde_json::to_vec`]).
    pub body: Option<Vec<u8>>,
}

impl FetchRequest {
    /// Create a bare request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Normalize a URL and optional body into a canonical request.
    ///
    /// A present body makes this a `POST` carrying that body; an absent body
    /// makes it a `GET`. The `accept: application/json` header is attached in
    /// both cases.
    pub fn for_url(url: Url, body: Option<Vec<u8>>) -> Self {
        let method = if body.is_some() {
            Method::POST
        } else {
            Method::GET
        };
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    /// Attach (or replace) a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a raw payload.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw metadata of a received HTTP response, captured before the body is
/// consumed.
///
/// Carried on classified errors so callers can inspect what the server
/// actually returned.
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// Final URL of the exchange (after any redirects the client followed).
    pub url: Url,
    /// HTTP status line of the response.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
}

impl ResponseMetadata {
    /// Capture the metadata of a live response before its body is consumed.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
        }
    }
}
