//! Pixel-grid rendering of a module matrix

use image::{Rgb, RgbImage};

use crate::config::GenerationConfig;
use crate::encoder::ModuleMatrix;
use crate::style::ColorScheme;

/// Draw a module matrix as an RGB pixel buffer
///
/// Each module becomes a `module_size` x `module_size` block of pixels, with
/// `quiet_zone` modules of background on every side.
pub fn draw(matrix: &ModuleMatrix, config: &GenerationConfig, colors: &ColorScheme) -> RgbImage {
    let scale = config.module_size();
    let border = config.quiet_zone();
    let side = (matrix.width() as u32 + 2 * border) * scale;

    let dark = Rgb(colors.dark.channels());
    let light = Rgb(colors.light.channels());

    RgbImage::from_fn(side, side, |x, y| {
        let mx = (x / scale) as i64 - border as i64;
        let my = (y / scale) as i64 - border as i64;
        if matrix.is_dark(mx, my) {
            dark
        } else {
            light
        }
    })
}
