//! Server URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The validated base URL of a server.
///
/// Any absolute URL that can carry path segments is accepted; scheme and host
/// are left to the transport to judge.
///
/// # Example
///
/// ```
/// use upsource_rpc::ServerUrl;
///
/// let server = ServerUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(server.host(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not an absolute URL that can serve
    /// as a base for RPC paths.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: s.to_string(),
                reason: "must be an absolute URL with a path".to_string(),
            }
            .into());
        }

        Ok(Self(url))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
