use tracing_subscriber::filter::LevelFilter;

pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "encrypted-bank";
pub const APP_NAME: &str = "encrypted-bank";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "encrypted-bank.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// The log file records debug and above regardless of `RUST_LOG`, which only
/// filters stderr. Per-render raster details are debug events; trace is left out.
pub const FILE_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Longest list the dirty to clean monitor will show.
pub const MAX_MONITOR_ROWS: usize = 50;
