pub(crate) mod format;
pub(crate) mod parse;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RetryAfterCommands {
    /// Parse a Retry-After value into a delay in seconds
    Parse {
        #[command(flatten)]
        config: parse::Config,
    },
    /// Format a delay in seconds as a Retry-After value
    Format {
        #[command(flatten)]
        config: format::Config,
    },
}
