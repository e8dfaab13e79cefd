use barcode_art::render::{MAX_HEIGHT, MAX_WIDTH};
use clap::{value_parser, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::{settings::consts::MAX_MONITOR_ROWS, ux::ScreenKind};

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Console logging would draw over the interactive screen.
    pub fn logs_to_console(&self) -> bool {
        !matches!(self.command, None | Some(Commands::Run))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive bank (default)
    Run,

    /// Print a payment code as an ASCII barcode
    Barcode(BarcodeArgs),

    /// Print a plain-text snapshot of one screen
    Screen(ScreenArgs),

    /// Configure the display
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct BarcodeArgs {
    /// Payment code to encode (a random one when omitted, e.g: "CB-482193")
    pub code: Option<String>,

    /// Barcode width in characters
    #[arg(long, value_parser = value_parser!(u32).range(1..=MAX_WIDTH as i64))]
    pub width: Option<u32>,

    /// Barcode height in rows
    #[arg(long, value_parser = value_parser!(u32).range(1..=MAX_HEIGHT as i64))]
    pub height: Option<u32>,
}

#[derive(Args)]
pub struct ScreenArgs {
    /// Screen to print
    #[arg(value_enum)]
    pub screen: ScreenKind,

    /// Terminal width to lay out for
    #[arg(long, default_value = "80")]
    pub width: u16,

    /// Terminal height to lay out for
    #[arg(long, default_value = "24")]
    pub height: u16,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Show the VPN indicator as connected (green) or not (red)
    #[arg(long, value_name = "BOOL")]
    pub vpn_connected: Option<bool>,

    /// Make the VPN indicator blink
    #[arg(long, value_name = "BOOL")]
    pub blink: Option<bool>,

    /// Number of transactions on the dirty to clean monitor
    #[arg(
        long,
        value_name = "N",
        value_parser = value_parser!(u64).range(1..=MAX_MONITOR_ROWS as u64)
    )]
    pub monitor_rows: Option<u64>,

    /// Delay between two monitor transactions, in milliseconds
    #[arg(long, value_name = "MS")]
    pub monitor_delay_ms: Option<u64>,

    /// Barcode width in characters
    #[arg(long, value_name = "N", value_parser = value_parser!(u32).range(1..=MAX_WIDTH as i64))]
    pub barcode_width: Option<u32>,

    /// Barcode height in rows
    #[arg(long, value_name = "N", value_parser = value_parser!(u32).range(1..=MAX_HEIGHT as i64))]
    pub barcode_height: Option<u32>,
}
