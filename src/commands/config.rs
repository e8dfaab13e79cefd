use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, settings::Settings, AppCtx};

pub fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    let mut settings = ctx.settings_store.load()?;
    apply(&mut settings, args);
    ctx.settings_store.save(&settings)?;
    info!("Configuration saved successfully ✅");
    Ok(())
}

fn apply(settings: &mut Settings, args: ConfigArgs) {
    if let Some(connected) = args.vpn_connected {
        settings.vpn_connected = connected;
    }
    if let Some(blink) = args.blink {
        settings.blink_indicator = blink;
    }
    if let Some(rows) = args.monitor_rows {
        settings.monitor_rows = rows as usize;
    }
    if let Some(delay) = args.monitor_delay_ms {
        settings.monitor_delay_ms = delay;
    }
    if let Some(width) = args.barcode_width {
        settings.barcode_width = width;
    }
    if let Some(height) = args.barcode_height {
        settings.barcode_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FileSettingsStore, SettingsStore};

    fn args() -> ConfigArgs {
        ConfigArgs {
            vpn_connected: None,
            blink: None,
            monitor_rows: None,
            monitor_delay_ms: None,
            barcode_width: None,
            barcode_height: None,
        }
    }

    #[test]
    fn test_only_given_fields_change() {
        let mut settings = Settings::default();
        apply(
            &mut settings,
            ConfigArgs {
                vpn_connected: Some(false),
                monitor_rows: Some(3),
                ..args()
            },
        );
        assert!(!settings.vpn_connected);
        assert_eq!(settings.monitor_rows, 3);
        assert_eq!(settings.monitor_delay_ms, 400);
        assert_eq!(settings.barcode_width, 40);
    }

    #[test]
    fn test_handle_persists_settings() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppCtx {
            settings_store: Box::new(FileSettingsStore::in_directory(dir.path().to_path_buf())),
        };
        handle(
            ConfigArgs {
                blink: Some(true),
                barcode_height: Some(6),
                ..args()
            },
            &ctx,
        )
        .unwrap();

        let saved = ctx.settings_store.load().unwrap();
        assert!(saved.blink_indicator);
        assert_eq!(saved.barcode_height, 6);
    }
}
