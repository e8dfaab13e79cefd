use anyhow::Result;
use barcode_art::{BarcodeRenderer, RenderOptions};
use tracing::{info, warn};

use crate::{
    bank::{DataSource, RandomSource},
    cli::BarcodeArgs,
    AppCtx,
};

pub fn handle(args: BarcodeArgs, ctx: &AppCtx) -> Result<()> {
    let settings = ctx.settings_store.load()?;
    let code = args
        .code
        .unwrap_or_else(|| RandomSource::new().payment_code().to_string());

    let options = RenderOptions::with_grid(
        args.width.unwrap_or(settings.barcode_width),
        args.height.unwrap_or(settings.barcode_height),
    );
    for row in barcode_lines(&code, options) {
        println!("{}", row);
    }
    Ok(())
}

/// Rows to print for `code`. Input the encoder rejects prints the placeholder.
fn barcode_lines(code: &str, options: RenderOptions) -> Vec<String> {
    info!(code, width = options.width, height = options.height, "Rendering barcode");
    let rendered = BarcodeRenderer::with_options(options).render(code);
    if let Some(cause) = rendered.cause() {
        warn!("Could not draw {:?}: {}", code, cause);
    }
    rendered.into_grid().into_rows()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_lines_use_requested_grid() {
        let lines = barcode_lines("CB-482193", RenderOptions::with_grid(30, 3));
        assert_eq!(lines.len(), 3);
        assert!(lines
            .iter()
            .all(|line| line.chars().count() == 30 && !line.contains('|')));
    }

    #[test]
    fn test_empty_code_prints_placeholder() {
        let lines = barcode_lines("", RenderOptions::with_grid(12, 2));
        assert_eq!(lines, vec!["|".repeat(12); 2]);
    }

    #[test]
    fn test_untrimmed_and_non_ascii_codes_reach_the_renderer() {
        let lines = barcode_lines("  CB-1 ", RenderOptions::with_grid(20, 2));
        assert!(lines.iter().all(|line| !line.contains('|')));

        let lines = barcode_lines("CB-€5", RenderOptions::with_grid(20, 2));
        assert_eq!(lines, vec!["|".repeat(20); 2]);
    }
}
