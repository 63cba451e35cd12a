pub(crate) mod accept;
pub(crate) mod parse;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum LangCommands {
    /// Parse a language tag and print its canonical form
    Parse {
        #[command(flatten)]
        config: parse::Config,
    },
    /// Parse an Accept-Language value and pick the best supported tag
    Accept {
        #[command(flatten)]
        config: accept::Config,
    },
}
