use crate::error::Result;
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Installs the global subscriber: a compact stderr layer gated by the
/// verbosity flags, plus a plain-text file layer when `--log-file` is given.
/// The file layer is not gated by the console filter, so a `--quiet` run
/// still leaves a full trace on disk.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_filter(verbosity, quiet));

    match log_file {
        Some(path) => {
            let file = File::create(&path)?;
            let file_layer = fmt::layer().with_writer(file).with_ansi(false);
            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .init();
        }
        None => tracing_subscriber::registry().with(console).init(),
    }

    Ok(())
}

fn console_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
