//! RPC endpoint addressing.

use std::fmt;
use url::Url;

use super::{RpcMethod, ServerUrl};

/// Path segment under which the server exposes its RPC methods.
const RPC_SEGMENT: &str = "~rpc";

/// A single RPC method on a specific server.
///
/// The request URL is `<server>/~rpc/<method>`. Exactly one `/` separates the
/// base path from `~rpc`, whether or not the base URL ends with a slash. The
/// method is percent-encoded as one path segment, and the base URL's query and
/// fragment are dropped.
///
/// # Example
///
/// ```
/// use upsource_rpc::{Endpoint, RpcMethod, ServerUrl};
///
/// let server = ServerUrl::new("http://localhost:8080/").unwrap();
/// let method = RpcMethod::new("getRevisionsList").unwrap();
/// let endpoint = Endpoint::new(server, method);
/// assert_eq!(endpoint.url().as_str(), "http://localhost:8080/~rpc/getRevisionsList");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    server: ServerUrl,
    method: RpcMethod,
}

impl Endpoint {
    /// Create an endpoint for `method` on `server`.
    pub fn new(server: ServerUrl, method: RpcMethod) -> Self {
        Self { server, method }
    }

    /// Returns the server this endpoint belongs to.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Returns the RPC method name.
    pub fn method(&self) -> &RpcMethod {
        &self.method
    }

    /// Returns the full request URL.
    pub fn url(&self) -> Url {
        let mut url = self.server.as_url().clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .expect("ServerUrl is always a base URL")
            .pop_if_empty()
            .push(RPC_SEGMENT)
            .push(self.method.as_str());
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}
