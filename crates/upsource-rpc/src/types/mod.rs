//! Validated value types for addressing RPC endpoints.

mod endpoint;
mod method;
mod server_url;

pub use endpoint::Endpoint;
pub use method::RpcMethod;
pub use server_url::ServerUrl;
