use anyhow::{anyhow, bail, Context, Result};
use barcode_art::{
    render::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH},
    RenderOptions,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{from_str, to_string_pretty};
use std::{fs, path::PathBuf, time::Duration};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, MAX_MONITOR_ROWS, SETTINGS_FILE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Colour of the VPN indicator on the main menu
    pub vpn_connected: bool,
    pub blink_indicator: bool,
    /// Transactions shown by the dirty to clean monitor
    pub monitor_rows: usize,
    /// Delay between two monitor rows
    pub monitor_delay_ms: u64,
    pub barcode_width: u32,
    pub barcode_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vpn_connected: true,
            blink_indicator: false,
            monitor_rows: 5,
            monitor_delay_ms: 400,
            barcode_width: DEFAULT_WIDTH,
            barcode_height: DEFAULT_HEIGHT,
        }
    }
}

impl Settings {
    pub fn monitor_delay(&self) -> Duration {
        Duration::from_millis(self.monitor_delay_ms)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_grid(self.barcode_width, self.barcode_height)
    }

    /// Reject values the command line would not accept either.
    pub fn validated(self) -> Result<Self> {
        if !(1..=MAX_WIDTH).contains(&self.barcode_width) {
            bail!(
                "barcodeWidth must be between 1 and {}, got {}",
                MAX_WIDTH,
                self.barcode_width
            );
        }
        if !(1..=MAX_HEIGHT).contains(&self.barcode_height) {
            bail!(
                "barcodeHeight must be between 1 and {}, got {}",
                MAX_HEIGHT,
                self.barcode_height
            );
        }
        if !(1..=MAX_MONITOR_ROWS).contains(&self.monitor_rows) {
            bail!(
                "monitorRows must be between 1 and {}, got {}",
                MAX_MONITOR_ROWS,
                self.monitor_rows
            );
        }
        Ok(self)
    }
}

fn parse(content: &str) -> Result<Settings> {
    from_str::<Settings>(content)
        .context("Failed to deserialize settings")?
        .validated()
        .context("Invalid settings")
}

pub trait SettingsStore {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}

pub struct FileSettingsStore {
    directory: PathBuf, // platform config directory (from ProjectDirs)
    file: &'static str, // "settings.json"
}

impl FileSettingsStore {
    /// Build from ProjectDirs config directory:
    ///   - Windows:   %APPDATA%\<qualifier>\<org>\<app>\settings.json
    ///   - macOS:     ~/Library/Application Support/<app>/settings.json
    ///   - Linux:     ~/.config/<app>/settings.json
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;

        Ok(Self::in_directory(project_dirs.config_dir().to_path_buf()))
    }

    pub fn in_directory(directory: PathBuf) -> Self {
        Self {
            directory,
            file: SETTINGS_FILE,
        }
    }

    fn path(&self) -> PathBuf {
        self.directory.join(self.file)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                let defaults = Settings::default();
                self.save(&defaults)?;
                return Ok(defaults);
            }
        };
        parse(&content)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::create_dir_all(&self.directory).with_context(|| {
            format!(
                "Failed to create settings directory: {}",
                self.directory.display()
            )
        })?;
        fs::write(self.path(), to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path().display()))
    }
}

/// Settings file given explicitly on the command line.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<Settings> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        parse(&content)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        fs::write(&self.path, to_string_pretty(settings)?)
            .with_context(|| format!("Failed to persist settings file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::in_directory(dir.path().join("nested"));

        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(dir.path().join("nested").join(SETTINGS_FILE).exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::in_directory(dir.path().to_path_buf());
        let settings = Settings {
            vpn_connected: false,
            blink_indicator: true,
            monitor_rows: 8,
            ..Settings::default()
        };

        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "vpnConnected": false, "barcodeWidth": 60 }"#).unwrap();

        let settings = JsonFileSettingsStore::new(path).load().unwrap();
        assert!(!settings.vpn_connected);
        assert_eq!(settings.barcode_width, 60);
        assert_eq!(settings.barcode_height, 10);
        assert_eq!(settings.monitor_delay(), Duration::from_millis(400));
        assert_eq!(settings.render_options().width, 60);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("missing.json"));
        let err = store.load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read settings file"));
    }

    #[test]
    fn test_out_of_range_grid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::in_directory(dir.path().to_path_buf());

        for content in [
            r#"{ "barcodeWidth": 0 }"#,
            r#"{ "barcodeHeight": 4000000000 }"#,
            r#"{ "barcodeWidth": 501 }"#,
            r#"{ "monitorRows": 0 }"#,
        ] {
            fs::write(dir.path().join(SETTINGS_FILE), content).unwrap();
            let err = store.load().unwrap_err();
            assert_eq!(err.to_string(), "Invalid settings", "{}", content);
        }

        fs::write(dir.path().join(SETTINGS_FILE), r#"{ "barcodeHeight": 200 }"#).unwrap();
        assert_eq!(store.load().unwrap().barcode_height, MAX_HEIGHT);
    }

    #[test]
    fn test_validation_names_the_field() {
        let settings = Settings {
            barcode_height: 4_000_000_000,
            ..Settings::default()
        };
        let err = settings.validated().unwrap_err();
        assert_eq!(
            err.to_string(),
            "barcodeHeight must be between 1 and 200, got 4000000000"
        );
        assert!(Settings::default().validated().is_ok());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileSettingsStore::new(path).load().unwrap_err();
        assert_eq!(err.to_string(), "Failed to deserialize settings");
    }
}
