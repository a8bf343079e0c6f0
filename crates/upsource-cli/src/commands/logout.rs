//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::profile::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs) -> Result<()> {
    if storage::clear_profile().context("Failed to remove profile")? {
        output::success("Profile removed");
    } else {
        eprintln!("No saved profile.");
    }
    Ok(())
}
