use anyhow::Result;
use tracing::info;

use crate::{
    bank::RandomSource,
    ux::{run_app, App},
    AppCtx,
};

#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    info!(?settings, "Starting interactive session");

    let mut app = App::new(RandomSource::new(), &settings);
    run_app(&mut app, settings.monitor_delay())?;

    info!("Session closed");
    Ok(())
}
