use thiserror::Error;

/// Anything that can go wrong between the input text and the glyph grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cannot encode an empty code")]
    EmptyInput,
    #[error("character {ch:?} at position {position} is not encodable")]
    UnsupportedCharacter { ch: char, position: usize },
    #[error("barcode encoder rejected the input: {0}")]
    Encoding(String),
    #[error("barcode bitmap would be empty")]
    EmptyBitmap,
    #[error("output grid must be between 1x1 and 500x200, got {width}x{height}")]
    GridOutOfRange { width: u32, height: u32 },
    #[error("dark and light glyphs must differ")]
    IndistinctGlyphs,
}
