use chrono::Utc;
use clap::Args;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Header value: seconds or an HTTP-date. If not specified, reads from stdin
    value: Option<String>,

    /// Reference time for HTTP-dates (RFC 3339). Defaults to the current time
    #[arg(long)]
    now: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct RetryAfterOutput {
    seconds: i64,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let value = read_input(config.value)?;
    let now = match config.now.as_deref() {
        Some(now) => utc::Utc::parse(now)?.to_datetime(),
        None => Utc::now(),
    };

    let delay = httputil::parse_retry_after_at(&value, now)
        .ok_or_else(|| Error::InvalidInput(format!("invalid Retry-After value {value:?}")))?;
    tracing::debug!(value = %value, now = %now.to_rfc3339(), "parsed Retry-After");

    match config.output {
        OutputFormat::Json => print_json(&RetryAfterOutput {
            seconds: delay.num_seconds(),
        })?,
        OutputFormat::Text => println!("{}", delay.num_seconds()),
    }

    Ok(())
}
