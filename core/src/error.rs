//! Error types for the comment API client.
//!
//! # Design
//! Every failure is terminal at this layer: nothing is retried and no
//! partial result is returned. Structural problems with a response carry a
//! `StructureError` so callers can tell which check failed without parsing
//! the message.

use thiserror::Error;

use crate::http::TransportError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by `CommentClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status code other than the one the
    /// operation expects.
    #[error("unexpected HTTP status code: expected {expected}, got {actual}")]
    BadStatus { expected: u16, actual: u16 },

    /// The response body is not valid JSON.
    #[error("invalid JSON in response body")]
    BadJson(#[source] serde_json::Error),

    /// The response body is valid JSON but not shaped like a comment payload.
    #[error("invalid response: {0}")]
    BadStructure(#[from] StructureError),

    /// An update was requested with neither a name nor a text.
    #[error("specify either a name or a text to update")]
    NothingToUpdate,

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request body")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed to deliver the request or read the response.
    #[error("transport error")]
    Transport(#[source] TransportError),
}

/// The structural check a response failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("expected object for comment item")]
    ExpectedObject,

    #[error("expected array at root level")]
    ExpectedArray,

    #[error("item #{index} must be an object")]
    ItemNotObject { index: usize },

    #[error("'{field}' field is invalid or does not exist")]
    InvalidField { field: &'static str },
}
