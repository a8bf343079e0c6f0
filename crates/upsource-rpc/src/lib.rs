//! upsource-rpc - Blocking client for Upsource RPC endpoints.
//!
//! Every RPC method lives at `<server>/~rpc/<method>`. A call is a single
//! HTTP POST whose body is the JSON-encoded parameters; the response body is
//! the JSON-encoded result. Requests carry a Basic `Authorization` header when
//! credentials are configured and run with guest permissions otherwise.
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//! use upsource_rpc::{ClientConfig, Credentials, RpcClient, ServerUrl};
//!
//! # fn example() -> Result<(), upsource_rpc::Error> {
//! let server = ServerUrl::new("http://localhost:8080/")?;
//! let config = ClientConfig::new(server).with_credentials(Credentials::basic("admin", "admin"));
//! let client = RpcClient::new(config)?;
//!
//! // Raw: string in, string out.
//! let text = client.call_raw("getRevisionsList", r#"{"projectId": "project", "limit": 30}"#)?;
//! println!("{text}");
//!
//! // Structured: JSON value in, JSON value out.
//! let reviews = client.call("getReviews", &json!({"projectId": "project", "limit": 30}))?;
//! println!("{reviews}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::RpcClient;
pub use config::ClientConfig;
pub use error::{Error, InvalidInputError, TransportError};
pub use types::{Endpoint, RpcMethod, ServerUrl};

/// A JSON-representable value used for structured parameters and results.
///
/// Object keys keep their insertion order.
pub type StructuredValue = serde_json::Value;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
