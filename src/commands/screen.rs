use anyhow::Result;
use tracing::info;

use crate::{
    bank::{DataSource, RandomSource},
    cli::ScreenArgs,
    screens::{compose, Viewport},
    settings::Settings,
    ux::{App, ScreenKind},
    AppCtx,
};

pub fn handle(args: ScreenArgs, ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    info!(screen = ?args.screen, "Printing screen snapshot");

    let viewport = Viewport::new(args.width, args.height);
    for line in snapshot(RandomSource::new(), &settings, args.screen, viewport) {
        println!("{}", line);
    }
    Ok(())
}

/// The screen as it looks once any animation has finished.
fn snapshot<S: DataSource>(
    source: S,
    settings: &Settings,
    kind: ScreenKind,
    viewport: Viewport,
) -> Vec<String> {
    let mut app = App::new(source, settings);
    app.open(kind);
    app.settle();
    compose(&app.layout(viewport), viewport)
}
