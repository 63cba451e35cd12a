use clap::Args;
use httputil::ContentRange;
use serde::Serialize;

use crate::error::Result;
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Header value, e.g. `bytes 0-63/128`. If not specified, reads from stdin
    value: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct RangeOutput {
    start: i64,
    end: i64,
    size: i64,
    length: i64,
}

impl From<ContentRange> for RangeOutput {
    fn from(range: ContentRange) -> Self {
        RangeOutput {
            start: range.start,
            end: range.end,
            size: range.size,
            length: range.len(),
        }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let value = read_input(config.value)?;
    let range = httputil::parse_content_range(&value)?;

    match config.output {
        OutputFormat::Json => print_json(&RangeOutput::from(range))?,
        OutputFormat::Text => {
            println!("start:  {}", range.start);
            println!("end:    {}", range.end);
            println!("size:   {}", range.size);
            println!("length: {}", range.len());
        }
    }

    Ok(())
}
