//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo is gone" from "the server returned an unexpected status." All
//! other non-2xx responses land in `HttpError` with the raw status and body.
//! Network failures are `Transport` so they surface as values instead of
//! escaping the sync adapter.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and the sync adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Transport(e.to_string())
    }
}
