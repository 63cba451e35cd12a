use clap::{Parser, Subcommand};

mod error;
mod output;
mod query;
mod range;
mod retry_after;
mod tag;
mod time;
mod utils;

use error::Result;

use retry_after::RetryAfterCommands;
use tag::LangCommands;

#[derive(Parser)]
#[command(name = "flatkey")]
#[command(about = "Typed query-string decoding and HTTP value toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a query string into listing parameters
    Query {
        #[command(flatten)]
        config: query::Config,
    },
    /// Parse a Content-Range header value
    Range {
        #[command(flatten)]
        config: range::Config,
    },
    /// Retry-After header operations
    RetryAfter {
        #[command(subcommand)]
        command: RetryAfterCommands,
    },
    /// Language tag operations
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
    /// Round and format an RFC 3339 timestamp
    Time {
        #[command(flatten)]
        config: time::Config,
    },
}

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { config } => {
            query::execute(config)?;
        }
        Commands::Range { config } => {
            range::execute(config)?;
        }
        Commands::RetryAfter { command } => match command {
            RetryAfterCommands::Parse { config } => {
                retry_after::parse::execute(config)?;
            }
            RetryAfterCommands::Format { config } => {
                retry_after::format::execute(config)?;
            }
        },
        Commands::Lang { command } => match command {
            LangCommands::Parse { config } => {
                tag::parse::execute(config)?;
            }
            LangCommands::Accept { config } => {
                tag::accept::execute(config)?;
            }
        },
        Commands::Time { config } => {
            time::execute(config)?;
        }
    }

    Ok(())
}
