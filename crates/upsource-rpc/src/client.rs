//! Blocking RPC client.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::config::ClientConfig;
use crate::error::{Error, InvalidInputError};
use crate::types::{Endpoint, RpcMethod, ServerUrl};
use crate::{Result, StructuredValue};

/// HTTP client for `~rpc/<method>` calls against one server.
///
/// Every call is a single blocking request/response exchange. The client
/// holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: Client,
    server: ServerUrl,
    authorization: Option<HeaderValue>,
}

impl RpcClient {
    /// Create a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not form a valid header value
    /// or the HTTP transport cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let authorization = match config.credentials() {
            Some(credentials) => {
                let mut value = HeaderValue::from_str(&credentials.header_value()).map_err(|e| {
                    InvalidInputError::Header {
                        reason: e.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        let http = Client::builder()
            .user_agent(config.user_agent())
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            http,
            server: config.server().clone(),
            authorization,
        })
    }

    /// Returns the server this client talks to.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// Returns true if requests carry an `Authorization` header.
    pub fn has_credentials(&self) -> bool {
        self.authorization.is_some()
    }

    /// Returns the endpoint for `method` on this client's server.
    pub fn endpoint(&self, method: &str) -> Result<Endpoint> {
        Ok(Endpoint::new(self.server.clone(), RpcMethod::new(method)?))
    }

    /// POST `request_body` verbatim to `method` and return the response body.
    ///
    /// The body is returned whatever the HTTP status; an RPC error reported
    /// by the server is the caller's to interpret.
    #[instrument(skip(self, request_body), fields(server = %self.server))]
    pub fn call_raw(&self, method: &str, request_body: &str) -> Result<String> {
        let url = self.endpoint(method)?.url();
        debug!(method, %url, "RPC call");
        trace!(bytes = request_body.len(), "request body");

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(request_body.to_owned());

        self.execute(request)
    }

    /// Same as [`call_raw`](Self::call_raw), but sends the parameters as a
    /// `params` query argument of a GET request.
    #[instrument(skip(self, params_json), fields(server = %self.server))]
    pub fn query_raw(&self, method: &str, params_json: &str) -> Result<String> {
        let url = self.endpoint(method)?.url();
        debug!(method, %url, "RPC query");
        trace!(bytes = params_json.len(), "query params");

        let request = self.http.get(url).query(&[("params", params_json)]);

        self.execute(request)
    }

    /// Encode `params` as JSON, call `method`, and decode the JSON result.
    pub fn call(&self, method: &str, params: &StructuredValue) -> Result<StructuredValue> {
        self.call_typed(method, params)
    }

    /// Typed form of [`call`](Self::call).
    ///
    /// # Errors
    ///
    /// [`Error::Serialization`] if `params` cannot be encoded,
    /// [`Error::Deserialization`] if the response is not valid JSON for `R`
    /// (an empty body included), and [`Error::Transport`] from the call itself.
    pub fn call_typed<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_string(params).map_err(Error::Serialization)?;
        let text = self.call_raw(method, &body)?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(source) => Err(Error::Deserialization { source, body: text }),
        }
    }

    /// Attach credentials, send, and read the body as text.
    fn execute(&self, mut request: RequestBuilder) -> Result<String> {
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "RPC returned non-success status");
        }

        let text = response.text()?;
        trace!(%status, bytes = text.len(), "RPC response");
        Ok(text)
    }
}
