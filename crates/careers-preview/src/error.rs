//! Error types for the careers preview service.
//!
//! Errors are rendered as HTML pages rather than JSON, since this is a
//! user-facing HTML service. Whatever went wrong upstream, the visitor only
//! ever sees the fixed loading-failure message; details go to the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::render;

/// Fixed user-facing message for any failure to load a posting.
pub const LOAD_ERROR_MESSAGE: &str = "Error loading job postings";

/// Failure to obtain a posting from the CMS backend.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned status {0}")]
    Status(u16),

    /// The body was not a valid posting envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The envelope was well-formed but carried no record.
    #[error("posting not found")]
    Missing,
}

impl FetchError {
    /// HTTP status to answer the visitor with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(404) | Self::Missing => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Preview service error type.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The route identifier is not a valid posting id.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The posting could not be loaded from the backend.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Internal server error (serialization, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidIdentifier(raw) => {
                tracing::debug!(identifier = %raw, "rejected identifier");
                StatusCode::BAD_REQUEST
            }
            Self::Fetch(err) => {
                tracing::warn!(error = %err, "failed to load job posting");
                err.status_code()
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, render::error_page(LOAD_ERROR_MESSAGE)).into_response()
    }
}
