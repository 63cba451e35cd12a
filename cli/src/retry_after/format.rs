use chrono::TimeDelta;
use clap::Args;

use crate::error::Result;

#[derive(Args)]
pub(crate) struct Config {
    /// Delay in seconds; negative delays are rendered as 0
    #[arg(allow_hyphen_values = true)]
    seconds: i64,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let delay = TimeDelta::try_seconds(config.seconds).unwrap_or(if config.seconds < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    });
    println!("{}: {}", httputil::retry_after::RETRY_AFTER, httputil::format_retry_after(delay));
    Ok(())
}
