use clap::Args;
use lang::Tag;
use serde::Serialize;

use crate::error::Result;
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Language tag, e.g. `en-gb`. If not specified, reads from stdin
    tag: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct TagOutput<'a> {
    tag: &'a Tag,
    base: &'a str,
    script: Option<&'a str>,
    region: Option<&'a str>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.tag)?;
    let tag = Tag::parse(&input)?;

    match config.output {
        OutputFormat::Json => print_json(&TagOutput {
            tag: &tag,
            base: tag.base(),
            script: tag.script(),
            region: tag.region(),
        })?,
        OutputFormat::Text => {
            println!("tag:    {}", tag);
            println!("base:   {}", tag.base());
            println!("script: {}", tag.script().unwrap_or("-"));
            println!("region: {}", tag.region().unwrap_or("-"));
        }
    }

    Ok(())
}
