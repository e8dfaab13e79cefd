use anyhow::Result;
use tracing::info;

pub mod bank;
pub mod cli;
mod commands;
pub mod screens;
pub mod settings;
pub mod ux;

use cli::{Cli, Commands};
use settings::{FileSettingsStore, JsonFileSettingsStore, SettingsStore};

pub struct AppCtx {
    pub settings_store: Box<dyn SettingsStore>,
}

impl AppCtx {
    pub fn new(cli: &Cli) -> Result<Self> {
        let settings_store: Box<dyn SettingsStore> = match &cli.settings {
            Some(path) => Box::new(JsonFileSettingsStore::new(path.clone())),
            None => Box::new(FileSettingsStore::new()?),
        };
        Ok(Self { settings_store })
    }
}

#[cfg(not(tarpaulin_include))]
pub fn run(cli: Cli) -> Result<()> {
    let ctx = AppCtx::new(&cli)?;

    info!(
        "Encrypted Bank {} - {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    );

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::handle(&ctx),
        Commands::Barcode(args) => commands::barcode::handle(args, &ctx),
        Commands::Screen(args) => commands::screen::handle(args, &ctx),
        Commands::Config(args) => commands::config::handle(args, &ctx),
    }
}
