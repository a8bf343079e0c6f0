//! Output formatting helpers.
//!
//! Response bodies go to stdout untouched; status lines and diagnostics are
//! decorated and failures go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use upsource_rpc::Error;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print the response of `method` on one line, prefixed with its name.
pub fn response(method: &str, body: &str) {
    println!("{}: {}", method.bold(), body.trim_end());
}

/// Print a response body as received, ending with a newline.
pub fn raw(body: &str) {
    if body.ends_with('\n') {
        print!("{}", body);
    } else {
        println!("{}", body);
    }
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Report a failed call of `method` on stderr.
pub fn call_failed(method: &str, err: &Error) {
    let cause = if err.is_transport() {
        format!("could not reach server: {err}")
    } else {
        err.to_string()
    };
    eprintln!("{} {}: {}", "✗".red(), method, cause);
}
