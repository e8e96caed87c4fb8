//! Shared error type across echometer crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Request body exceeds the configured limit.
    PayloadTooLarge,
    /// Unsupported config version.
    UnsupportedVersion,
    /// I/O failure while reading the request or writing the response.
    Io,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Io => "IO",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, EchoError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum EchoError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("internal: {0}")]
    Internal(String),
}

impl EchoError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            EchoError::BadRequest(_) => ClientCode::BadRequest,
            EchoError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            EchoError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            EchoError::Io(_) => ClientCode::Io,
            EchoError::Internal(_) => ClientCode::Internal,
        }
    }
}
