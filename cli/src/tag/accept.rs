use clap::Args;
use lang::{Matcher, Tag};
use serde::Serialize;

use crate::error::Result;
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Accept-Language value, e.g. `fr-CH, fr;q=0.9`. If not specified, reads from stdin
    value: Option<String>,

    /// Supported tags, the first being the default
    #[arg(short, long, value_delimiter = ',', default_value = "en,fr,de,it")]
    supported: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct AcceptOutput {
    preferred: Vec<Tag>,
    best: Tag,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let value = read_input(config.value)?;
    let preferred = lang::parse_accept_language(&value)?;
    let supported = config
        .supported
        .iter()
        .map(|s| Tag::parse(s))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let best = Matcher::new(supported).best(&preferred);

    match config.output {
        OutputFormat::Json => print_json(&AcceptOutput { preferred, best })?,
        OutputFormat::Text => {
            let preferred: Vec<String> = preferred.iter().map(ToString::to_string).collect();
            println!("preferred: {}", preferred.join(", "));
            println!("best:      {}", best);
        }
    }

    Ok(())
}
