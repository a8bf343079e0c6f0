//! Login command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use upsource_rpc::ServerUrl;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::profile::{DEFAULT_URL, Profile, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub fn run(_args: LoginArgs, connection: &ConnectionArgs) -> Result<()> {
    let Some(credentials) = connection.credentials() else {
        bail!("No credentials given. Pass --user and --password, or --credentials.");
    };

    let url = connection.url.as_deref().unwrap_or(DEFAULT_URL);
    let profile = Profile {
        url: ServerUrl::new(url).context("Invalid server URL")?,
        credentials: Some(credentials),
    };

    storage::save_profile(&profile).context("Failed to save profile")?;

    output::success("Profile saved");
    println!();
    output::field("Server", profile.url.as_str());

    Ok(())
}
