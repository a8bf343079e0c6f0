//! Client configuration.

use crate::auth::Credentials;
use crate::types::ServerUrl;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("upsource-rpc/", env!("CARGO_PKG_VERSION"));

/// Everything an [`RpcClient`](crate::RpcClient) needs to reach a server.
///
/// # Example
///
/// ```
/// use upsource_rpc::{ClientConfig, Credentials, ServerUrl};
///
/// let config = ClientConfig::new(ServerUrl::new("http://localhost:8080/").unwrap())
///     .with_credentials(Credentials::basic("admin", "admin"));
/// assert!(config.credentials().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    server: ServerUrl,
    credentials: Option<Credentials>,
    user_agent: String,
}

impl ClientConfig {
    /// Create a guest configuration for `server`.
    pub fn new(server: ServerUrl) -> Self {
        Self {
            server,
            credentials: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Authenticate every request with `credentials`.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set or clear the credentials.
    pub fn with_optional_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
