use std::fmt;

use image::imageops::{self, FilterType};
use tracing::{debug, warn};

use crate::{
    error::RenderError,
    raster::{self, RasterOptions},
    symbology::{Code128, Symbology},
};

/// Output grid width in cells.
pub const DEFAULT_WIDTH: u32 = 40;
/// Output grid height in rows.
pub const DEFAULT_HEIGHT: u32 = 10;
/// Widest grid the renderer will build, placeholders included.
pub const MAX_WIDTH: u32 = 500;
/// Tallest grid the renderer will build, placeholders included.
pub const MAX_HEIGHT: u32 = 200;
/// Cells with a luma strictly below this value are dark.
pub const DEFAULT_THRESHOLD: u8 = 128;
pub const DARK_GLYPH: char = '█';
pub const LIGHT_GLYPH: char = ' ';
pub const PLACEHOLDER_GLYPH: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub dark: char,
    pub light: char,
    pub placeholder: char,
    pub raster: RasterOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            threshold: DEFAULT_THRESHOLD,
            dark: DARK_GLYPH,
            light: LIGHT_GLYPH,
            placeholder: PLACEHOLDER_GLYPH,
            raster: RasterOptions::default(),
        }
    }
}

impl RenderOptions {
    /// Default options with a custom grid size.
    pub fn with_grid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), RenderError> {
        if !(1..=MAX_WIDTH).contains(&self.width) || !(1..=MAX_HEIGHT).contains(&self.height) {
            return Err(RenderError::GridOutOfRange {
                width: self.width,
                height: self.height,
            });
        }
        if self.dark == self.light {
            return Err(RenderError::IndistinctGlyphs);
        }
        Ok(())
    }
}

/// A grid of equal-width text rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiBarcode {
    rows: Vec<String>,
}

impl AsciiBarcode {
    /// `height` rows of `width` copies of `glyph`, each dimension clamped to
    /// `1..=MAX_WIDTH` and `1..=MAX_HEIGHT`.
    pub fn placeholder(width: u32, height: u32, glyph: char) -> Self {
        let width = width.clamp(1, MAX_WIDTH) as usize;
        let height = height.clamp(1, MAX_HEIGHT) as usize;
        let row: String = std::iter::repeat(glyph).take(width).collect();
        Self {
            rows: vec![row; height],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }

    /// Width in characters.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for AsciiBarcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rows.join("\n"))
    }
}

/// Outcome of [`BarcodeRenderer::render`]. Both variants carry a displayable grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Barcode(AsciiBarcode),
    Placeholder {
        grid: AsciiBarcode,
        cause: RenderError,
    },
}

impl Rendered {
    pub fn grid(&self) -> &AsciiBarcode {
        match self {
            Rendered::Barcode(grid) | Rendered::Placeholder { grid, .. } => grid,
        }
    }

    pub fn into_grid(self) -> AsciiBarcode {
        match self {
            Rendered::Barcode(grid) | Rendered::Placeholder { grid, .. } => grid,
        }
    }

    pub fn rows(&self) -> &[String] {
        self.grid().rows()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Rendered::Placeholder { .. })
    }

    pub fn cause(&self) -> Option<&RenderError> {
        match self {
            Rendered::Barcode(_) => None,
            Rendered::Placeholder { cause, .. } => Some(cause),
        }
    }
}

/// Encode -> rasterize -> downsample -> threshold pipeline.
pub struct BarcodeRenderer {
    symbology: Box<dyn Symbology>,
    options: RenderOptions,
}

impl Default for BarcodeRenderer {
    fn default() -> Self {
        Self::with_options(RenderOptions::default())
    }
}

impl BarcodeRenderer {
    pub fn new(symbology: Box<dyn Symbology>, options: RenderOptions) -> Self {
        Self { symbology, options }
    }

    /// Code 128 renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self::new(Box::new(Code128), options)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// The placeholder this renderer falls back to.
    pub fn placeholder(&self) -> AsciiBarcode {
        AsciiBarcode::placeholder(
            self.options.width,
            self.options.height,
            self.options.placeholder,
        )
    }

    pub fn try_render(&self, code: &str) -> Result<AsciiBarcode, RenderError> {
        self.options.validate()?;

        let modules = self.symbology.encode(code)?;
        let bitmap = raster::rasterize(&modules, &self.options.raster)?;
        debug!(
            symbology = self.symbology.name(),
            modules = modules.len(),
            width = bitmap.width(),
            height = bitmap.height(),
            "Rasterized barcode"
        );

        let cells = imageops::resize(
            &bitmap,
            self.options.width,
            self.options.height,
            FilterType::CatmullRom,
        );
        let rows = cells
            .rows()
            .map(|row| {
                row.map(|cell| {
                    if cell.0[0] < self.options.threshold {
                        self.options.dark
                    } else {
                        self.options.light
                    }
                })
                .collect()
            })
            .collect();

        Ok(AsciiBarcode { rows })
    }

    /// Like [`try_render`](Self::try_render) but falls back to the placeholder grid.
    pub fn render(&self, code: &str) -> Rendered {
        match self.try_render(code) {
            Ok(grid) => Rendered::Barcode(grid),
            Err(cause) => {
                warn!(code, %cause, "Barcode rendering failed, using placeholder");
                Rendered::Placeholder {
                    grid: self.placeholder(),
                    cause,
                }
            }
        }
    }
}
