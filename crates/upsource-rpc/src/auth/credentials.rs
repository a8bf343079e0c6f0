//! Basic authentication credentials.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Pre-encoded HTTP Basic credentials.
///
/// Holds `base64(username ":" password)` and renders it as the
/// `Authorization` header value `Basic <encoded>`. The value is never
/// re-encoded or inspected after construction.
///
/// # Security
///
/// The encoded token is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use upsource_rpc::Credentials;
///
/// let creds = Credentials::basic("admin", "admin");
/// assert_eq!(creds.header_value(), "Basic YWRtaW46YWRtaW4=");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    encoded: String,
}

impl Credentials {
    /// Encode a username and password per the Basic scheme.
    pub fn basic(username: impl AsRef<str>, password: impl AsRef<str>) -> Self {
        let raw = format!("{}:{}", username.as_ref(), password.as_ref());
        Self {
            encoded: STANDARD.encode(raw),
        }
    }

    /// Wrap an already encoded token, used verbatim.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self {
            encoded: encoded.into(),
        }
    }

    /// Returns the `Authorization` header value.
    ///
    /// # Security
    ///
    /// Use this only when constructing requests or persisting a profile.
    /// Never log or display this value.
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.encoded)
    }

    /// Returns the encoded token without the scheme prefix.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("encoded", &"[REDACTED]")
            .finish()
    }
}
