//! Demo command implementation.

use anyhow::{Result, bail};
use clap::Args;
use serde_json::json;
use upsource_rpc::Error;

use crate::cli::ConnectionArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Project ID to query
    #[arg(long, default_value = "project")]
    pub project: String,

    /// Maximum number of items per call
    #[arg(long, default_value_t = 30)]
    pub limit: u32,
}

pub fn run(args: DemoArgs, connection: &ConnectionArgs) -> Result<()> {
    let client = super::connect(connection)?;
    let params = json!({ "projectId": args.project, "limit": args.limit });

    // Raw request: string in, string out.
    let response = client.call_raw("getRevisionsList", &params.to_string());
    let response = match response {
        Ok(text) => text,
        Err(e) => return report("getRevisionsList", e),
    };
    output::response("getRevisionsList", &response);

    // Structured request: the value is encoded to JSON and the result decoded.
    let result = match client.call("getReviews", &params) {
        Ok(value) => value,
        Err(e) => return report("getReviews", e),
    };
    output::response("getReviews", &serde_json::to_string(&result)?);

    Ok(())
}

fn report(method: &str, err: Error) -> Result<()> {
    output::call_failed(method, &err);
    bail!("{method} failed")
}
