use image::{GrayImage, Luma};

use crate::error::RenderError;

const BAR: Luma<u8> = Luma([0]);
const SPACE: Luma<u8> = Luma([255]);

/// Natural resolution of the rasterized symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Pixels per module.
    pub module_width: u32,
    /// Bar height in pixels.
    pub bar_height: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 60,
        }
    }
}

/// Draw a module sequence as a luminance bitmap: bars black, spaces white.
pub fn rasterize(modules: &[bool], options: &RasterOptions) -> Result<GrayImage, RenderError> {
    if modules.is_empty() || options.module_width == 0 || options.bar_height == 0 {
        return Err(RenderError::EmptyBitmap);
    }

    let width = modules.len() as u32 * options.module_width;
    Ok(GrayImage::from_fn(width, options.bar_height, |x, _| {
        if modules[(x / options.module_width) as usize] {
            BAR
        } else {
            SPACE
        }
    }))
}
