//! RPC method name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The name of a remote operation under the server's `~rpc/` namespace,
/// e.g. `getReviews`.
///
/// The name must be non-empty and must not be the path segments `.` or `..`,
/// which URL path handling would swallow. Reserved URL characters are allowed
/// here and escaped when the endpoint URL is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RpcMethod(String);

impl RpcMethod {
    /// Create a new method name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or a dot segment.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        let reason = match s.as_str() {
            "" => "cannot be empty",
            "." | ".." => "cannot be a dot segment",
            _ => return Ok(Self(s)),
        };
        Err(InvalidInputError::Method {
            value: s,
            reason: reason.to_string(),
        }
        .into())
    }

    /// Returns the method name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RpcMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RpcMethod {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RpcMethod {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RpcMethod> for String {
    fn from(method: RpcMethod) -> Self {
        method.0
    }
}

impl AsRef<str> for RpcMethod {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
