use clap::Args;
use flatkey::decoder::DecodableFrom;
use httputil::query::{FromQuery, Schema, Values};
use serde::Serialize;

use crate::error::Result;
use crate::output::{OutputFormat, print_json};
use crate::utils::read_input;

/// Parameters of a paginated listing endpoint.
#[derive(Debug, Default, Serialize)]
pub(crate) struct ListParams {
    min: Option<utc::Utc>,
    max: Option<Box<utc::Utc>>,
    limit: u64,
    continuation: String,
    q: Option<String>,
    lang: Option<lang::Tag>,
    desc: bool,
}

impl DecodableFrom<Values> for ListParams {}

impl FromQuery for ListParams {
    fn describe(schema: &mut Schema<Self>) {
        schema
            .field("min", |p| &mut p.min)
            .field("max", |p| &mut p.max)
            .field("limit", |p| &mut p.limit)
            .field("continuation", |p| &mut p.continuation)
            .field("q", |p| &mut p.q)
            .field("lang", |p| &mut p.lang)
            .field("desc", |p| &mut p.desc);
    }
}

#[derive(Args)]
pub(crate) struct Config {
    /// Query string, e.g. `limit=15&q=foo`. If not specified, reads from stdin
    query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let raw = read_input(config.query)?;
    let params: ListParams = httputil::parse_query(&raw)?;

    match config.output {
        OutputFormat::Json => print_json(&params)?,
        OutputFormat::Text => print!("{}", format_params(&params)),
    }

    Ok(())
}

fn format_params(params: &ListParams) -> String {
    let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    let mut output = String::new();
    output.push_str(&format!("min:          {}\n", optional(params.min.map(|t| t.to_string()))));
    output.push_str(&format!(
        "max:          {}\n",
        optional(params.max.as_ref().map(|t| t.to_string()))
    ));
    output.push_str(&format!("limit:        {}\n", params.limit));
    output.push_str(&format!("continuation: {}\n", params.continuation));
    output.push_str(&format!("q:            {}\n", optional(params.q.clone())));
    output.push_str(&format!(
        "lang:         {}\n",
        optional(params.lang.as_ref().map(|t| t.to_string()))
    ));
    output.push_str(&format!("desc:         {}\n", params.desc));
    output
}
