//! Connection profile: which server to call and with which credentials.

pub mod storage;

use anyhow::{Context, Result};
use tracing::debug;
use upsource_rpc::{ClientConfig, Credentials, ServerUrl};

use crate::cli::ConnectionArgs;

/// Server used when neither flags, environment, nor a saved profile name one.
pub const DEFAULT_URL: &str = "http://localhost:8080/";

/// A resolved connection target.
#[derive(Debug, Clone)]
pub struct Profile {
    pub url: ServerUrl,
    pub credentials: Option<Credentials>,
}

impl Profile {
    /// Resolve from explicit arguments, then the saved profile, then defaults.
    ///
    /// Saved credentials are only reused for the saved server.
    pub fn resolve(args: &ConnectionArgs) -> Result<Self> {
        let saved = storage::load_profile().context("Failed to load profile")?;
        Self::merge(args, saved)
    }

    fn merge(args: &ConnectionArgs, saved: Option<Profile>) -> Result<Self> {
        let url = match &args.url {
            Some(url) => ServerUrl::new(url).context("Invalid server URL")?,
            None => match &saved {
                Some(profile) => profile.url.clone(),
                None => ServerUrl::new(DEFAULT_URL)?,
            },
        };

        let credentials = args.credentials().or_else(|| {
            saved
                .filter(|profile| profile.url == url)
                .and_then(|profile| profile.credentials)
        });

        debug!(%url, authenticated = credentials.is_some(), "resolved profile");
        Ok(Self { url, credentials })
    }

    /// Build the client configuration for this profile.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.url.clone())
            .with_optional_credentials(self.credentials.clone())
            .with_user_agent(concat!("upsource-cli/", env!("CARGO_PKG_VERSION")))
    }
}
