//! Call command implementation.

use std::io;

use anyhow::{Context, Result};
use clap::Args;
use upsource_rpc::StructuredValue;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// RPC method name (e.g., getReviews)
    pub method: String,

    /// JSON parameters, or '-' to read them from stdin
    #[arg(default_value = "{}")]
    pub params: String,

    /// Send the parameters as a `params` query argument of a GET request
    #[arg(long)]
    pub get: bool,

    /// Decode the response as JSON and pretty-print it
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: CallArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = super::connect(connection)?;

    let params = if args.params == "-" {
        io::read_to_string(io::stdin()).context("Failed to read parameters from stdin")?
    } else {
        args.params
    };

    if args.pretty && !args.get {
        let params: StructuredValue =
            serde_json::from_str(&params).context("Parameters are not valid JSON")?;
        let result = client
            .call(&args.method, &params)
            .with_context(|| format!("Failed to call {}", args.method))?;
        return output::json_pretty(&result);
    }

    let response = if args.get {
        client.query_raw(&args.method, &params)
    } else {
        client.call_raw(&args.method, &params)
    };
    let response = response.with_context(|| format!("Failed to call {}", args.method))?;

    if args.pretty {
        let result: StructuredValue =
            serde_json::from_str(&response).context("Response is not valid JSON")?;
        output::json_pretty(&result)
    } else {
        output::raw(&response);
        Ok(())
    }
}
