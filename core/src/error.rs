//! Errors returned by the typed `ApiClient::parse_*` methods.
//!
//! `BadRequest` and `NotFound` carry the server's `message` because callers
//! branch on those two. Any other non-2xx status, or an error body that is
//! not the `{"message"}` envelope, lands in `HttpError` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered 400.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server answered 404.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// A 2xx body that does not match the expected schema.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
