use chrono::TimeDelta;
use clap::Args;
use lang::Tag;
use serde::Serialize;
use utc::Utc;

use crate::error::{Error, Result};
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// RFC 3339 timestamp. If not specified, reads from stdin
    timestamp: Option<String>,

    /// Round down to a multiple of this many seconds
    #[arg(long, conflicts_with = "ceil")]
    floor: Option<i64>,

    /// Round up to a multiple of this many seconds
    #[arg(long)]
    ceil: Option<i64>,

    /// Language used for the localized forms
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct TimeOutput {
    rfc3339: Utc,
    date_long: String,
    date_short: String,
    time_short: String,
}

fn precision(seconds: i64) -> Result<TimeDelta> {
    TimeDelta::try_seconds(seconds)
        .filter(|d| *d > TimeDelta::zero())
        .ok_or_else(|| Error::InvalidInput(format!("invalid rounding precision {seconds}")))
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.timestamp)?;
    let tag = Tag::parse(&config.lang)?;

    let mut time = Utc::parse(&input)?;
    if let Some(seconds) = config.floor {
        time = time.floor(precision(seconds)?);
    }
    if let Some(seconds) = config.ceil {
        time = time.ceil(precision(seconds)?);
    }

    let output = TimeOutput {
        rfc3339: time,
        date_long: utc::format_date_long(time, &tag),
        date_short: utc::format_date_short(time, &tag),
        time_short: utc::format_time_short(time, &tag),
    };

    match config.output {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => {
            println!("rfc3339:    {}", output.rfc3339);
            println!("date long:  {}", output.date_long);
            println!("date short: {}", output.date_short);
            println!("time short: {}", output.time_short);
        }
    }

    Ok(())
}
