//! Subcommand implementations.

mod call;
mod demo;
mod login;
mod logout;
mod whoami;

use anyhow::{Context, Result};
use clap::Subcommand;
use upsource_rpc::RpcClient;

use crate::cli::ConnectionArgs;
use crate::profile::Profile;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Call an RPC method and print the response
    Call(call::CallArgs),

    /// Run the getRevisionsList and getReviews sample calls
    Demo(demo::DemoArgs),

    /// Save the server URL and credentials for later calls
    Login(login::LoginArgs),

    /// Remove the saved profile
    Logout(logout::LogoutArgs),

    /// Display the resolved server and authentication mode
    Whoami(whoami::WhoamiArgs),
}

pub fn handle(cmd: Commands, connection: &ConnectionArgs) -> Result<()> {
    match cmd {
        Commands::Call(args) => call::run(args, connection),
        Commands::Demo(args) => demo::run(args, connection),
        Commands::Login(args) => login::run(args, connection),
        Commands::Logout(args) => logout::run(args),
        Commands::Whoami(args) => whoami::run(args, connection),
    }
}

/// Build a client for the resolved profile.
fn connect(connection: &ConnectionArgs) -> Result<RpcClient> {
    let profile = Profile::resolve(connection)?;
    RpcClient::new(profile.client_config()).context("Failed to create RPC client")
}
