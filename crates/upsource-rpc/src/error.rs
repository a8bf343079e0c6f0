//! Error types for the upsource-rpc library.
//!
//! One error type with an explicit variant per failure cause: transport,
//! request encoding, response decoding, and input validation.

use thiserror::Error;

/// The unified error type for upsource-rpc operations.
///
/// RPC-level errors reported by the server in a well-formed JSON body are not
/// represented here; they come back as ordinary results.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, I/O, body transfer).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The request parameters could not be encoded as JSON.
    #[error("failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body is not valid JSON (or not the expected shape).
    #[error("failed to deserialize response: {source}")]
    Deserialization {
        source: serde_json::Error,
        /// The raw response text that failed to decode.
        body: String,
    },

    /// Input validation errors (server URL, method name, header value).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error came from the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if the response body could not be decoded.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Error::Deserialization { .. })
    }

    /// Returns true if the request could not be encoded.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The transport gave up waiting.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be read to completion.
    #[error("failed to read response body: {message}")]
    Body { message: String },

    /// Any other HTTP-layer failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_body() || err.is_decode() {
            TransportError::Body {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server base URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Invalid RPC method name.
    #[error("invalid RPC method '{value}': {reason}")]
    Method { value: String, reason: String },

    /// A header value could not be built.
    #[error("invalid header value: {reason}")]
    Header { reason: String },
}
