//! Error taxonomy and result type for the fetch contract.

use crate::api::ResponseMetadata;
use thiserror::Error;

/// Convenience alias used throughout the crate: exactly one of `Ok` / `Err`
/// is produced per fetch invocation.
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;

/// Boxed underlying error carried inside a [`NetworkError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed classification of fetch failures.
///
/// Variants are intentionally coarse-grained so that callers can match on
/// failure *category* rather than on transport-specific details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// No response and no usable error — nothing to classify.
    Unknown,
    /// The exchange completed but the body could not be parsed into the
    /// requested model type.
    Decoding,
    /// The supplied URL string could not be parsed into a valid URL.
    InvalidUrl,
    /// The exchange completed with a non-success HTTP status and an empty
    /// body; the numeric status is carried in the variant.
    HttpStatus(u16),
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown network failure"),
            Self::Decoding => write!(f, "response decoding failed"),
            Self::InvalidUrl => write!(f, "invalid URL"),
            Self::HttpStatus(code) => write!(f, "HTTP status {code}"),
        }
    }
}

/// A classified fetch failure.
///
/// Values are immutable and built only through the classification
/// constructors below — never field-by-field. Beyond its [`kind`](Self::kind),
/// an error optionally carries the raw [`ResponseMetadata`] of whatever the
/// server returned, and the underlying transport or decode error (exposed via
/// [`std::error::Error::source`]).
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct NetworkError {
    kind: ErrorType,
    response: Option<ResponseMetadata>,
    #[source]
    source: Option<BoxError>,
}

impl NetworkError {
    /// The degenerate classification: no response metadata, optionally a
    /// transport-level error.
    pub fn unknown(source: Option<BoxError>) -> Self {
        Self {
            kind: ErrorType::Unknown,
            response: None,
            source,
        }
    }

    /// A URL string failed to parse; no exchange took place.
    pub fn invalid_url(source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorType::InvalidUrl,
            response: None,
            source: Some(source.into()),
        }
    }

    /// The response body could not be decoded into the requested model.
    pub fn decoding(response: ResponseMetadata, source: impl Into<BoxError>) -> Self {
        Self {
            kind: ErrorType::Decoding,
            response: Some(response),
            source: Some(source.into()),
        }
    }

    /// An exchange completed with the given response and nothing to decode;
    /// the classification carries the numeric HTTP status.
    pub fn http_status(response: ResponseMetadata, source: Option<BoxError>) -> Self {
        Self {
            kind: ErrorType::HttpStatus(response.status.as_u16()),
            response: Some(response),
            source,
        }
    }

    /// Fallback classifier for a finished exchange: with response metadata the
    /// failure is [`ErrorType::HttpStatus`], without it [`ErrorType::Unknown`].
    pub fn from_exchange(response: Option<ResponseMetadata>, source: Option<BoxError>) -> Self {
        match response {
            Some(response) => Self::http_status(response, source),
            None => Self::unknown(source),
        }
    }

    /// The failure classification.
    pub fn kind(&self) -> ErrorType {
        self.kind
    }

    /// Raw metadata of the response, when one was received.
    pub fn response(&self) -> Option<&ResponseMetadata> {
        self.response.as_ref()
    }

    /// The numeric HTTP status for [`ErrorType::HttpStatus`] failures.
    pub fn http_status_code(&self) -> Option<u16> {
        match self.kind {
            ErrorType::HttpStatus(code) => Some(code),
            _ => None,
        }
    }
}
