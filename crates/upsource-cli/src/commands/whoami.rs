//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::output;
use crate::profile::Profile;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs, connection: &ConnectionArgs) -> Result<()> {
    let profile = Profile::resolve(connection)?;

    output::field("Server", profile.url.as_str());
    output::field(
        "Auth",
        if profile.credentials.is_some() {
            "basic"
        } else {
            "guest"
        },
    );

    Ok(())
}
