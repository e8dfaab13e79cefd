pub mod error;
pub mod raster;
pub mod render;
pub mod symbology;

pub use error::RenderError;
pub use render::{AsciiBarcode, BarcodeRenderer, RenderOptions, Rendered};

/// Render `code` with the default Code 128 renderer (40 x 10 grid).
///
/// Never fails: an unencodable code yields [`Rendered::Placeholder`].
pub fn render(code: &str) -> Rendered {
    BarcodeRenderer::default().render(code)
}
