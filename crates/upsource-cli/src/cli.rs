//! CLI argument definitions.

use clap::{Args, Parser};
use upsource_rpc::Credentials;

use crate::commands::Commands;

/// Upsource CLI tool for calling RPC methods.
#[derive(Parser, Debug)]
#[command(name = "upsource")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to connect and how to authenticate.
///
/// Unset values fall back to the saved profile (see `upsource login`).
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Server base URL
    #[arg(long, env = "UPSOURCE_URL", global = true)]
    pub url: Option<String>,

    /// Username for Basic authentication
    #[arg(long, env = "UPSOURCE_USER", global = true, conflicts_with = "credentials")]
    pub user: Option<String>,

    /// Password for Basic authentication
    #[arg(long, env = "UPSOURCE_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Pre-encoded Basic credentials, base64("user:password")
    #[arg(long, env = "UPSOURCE_CREDENTIALS", global = true, hide_env_values = true)]
    pub credentials: Option<String>,
}

impl ConnectionArgs {
    /// Credentials given explicitly on the command line or in the environment.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(encoded) = &self.credentials {
            return Some(Credentials::from_encoded(encoded));
        }
        self.user.as_ref().map(|user| {
            Credentials::basic(user, self.password.as_deref().unwrap_or_default())
        })
    }
}
