use std::io::{self, Read};

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Returns `arg` or, if it is `None`, the whole of stdin with surrounding
/// whitespace removed.
pub(crate) fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(value) => Ok(value),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(String::from_utf8(buffer)?.trim().to_string())
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("failed to initialise logging: {err}");
    }
}
