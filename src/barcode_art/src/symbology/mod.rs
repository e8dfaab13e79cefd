use crate::error::RenderError;

pub mod code128;

pub use code128::Code128;

/// A linear barcode symbology.
///
/// Encoding yields one entry per module, left to right, quiet zones included:
/// `true` is a bar, `false` is a space.
pub trait Symbology {
    fn name(&self) -> &'static str;
    fn encode(&self, data: &str) -> Result<Vec<bool>, RenderError>;
}
