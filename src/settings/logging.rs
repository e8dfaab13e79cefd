use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::PathBuf,
};
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt::{self, format::debug_fn},
    prelude::*,
    registry, EnvFilter,
};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, FILE_LOG_LEVEL, LOG_FILE,
};

/// Platform data directory that holds `encrypted-bank.log`.
fn log_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;
    Ok(project_dirs.data_dir().to_path_buf())
}

/// Install the global subscriber: JSON lines into the data directory and, when
/// `console` is set, compact messages on stderr.
///
/// The interactive screen owns the terminal, so it runs with `console = false`.
#[cfg(not(tarpaulin_include))]
pub fn init_logger(console: bool) -> Result<()> {
    let directory = log_directory()?;
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_appender = rolling::never(&directory, LOG_FILE);

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(stderr)
            .with_ansi(IsTerminal::is_terminal(&stderr()))
            .with_level(true)
            .without_time()
            .compact()
            .fmt_fields({
                debug_fn(move |writer, field, value| {
                    if field.name() == "message" {
                        write!(writer, "{:?}", value)?;
                    }
                    Ok(())
                })
            })
            .with_filter(env_filter)
    });

    let json_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true)
        .with_level(true)
        .flatten_event(true)
        .with_filter(FILE_LOG_LEVEL);

    registry().with(console_layer).with(json_layer).init();

    Ok(())
}
