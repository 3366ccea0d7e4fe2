//! Error types for the to-do client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the item does not exist" from "the service returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body. Local precondition failures (empty text, unknown id) are not errors:
//! they are silent no-ops and never reach this type.

use thiserror::Error;

/// Errors surfaced by the to-do client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service returned 404.
    #[error("resource not found")]
    NotFound,

    /// The service returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The table template failed to compile or render.
    #[error("render failed: {0}")]
    Render(String),

    /// The host could not display the rendered table.
    #[error("view update failed: {0}")]
    View(String),

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
