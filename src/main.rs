use anyhow::Result;
use clap::Parser;

use encrypted_bank::settings::init_logger;

fn main() -> Result<()> {
    let cli = encrypted_bank::cli::Cli::parse();
    init_logger(cli.logs_to_console())?;
    encrypted_bank::run(cli)?;
    Ok(())
}
