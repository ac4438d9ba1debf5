//! Grayscale rasterization and PNG encoding.

use std::io::Write;

use domino_targets_core::{mm_to_px, Point2, MM_PER_INCH};

use crate::error::{LayoutError, PrintError};
use crate::scene::Scene;

/// Sub-samples per pixel along each axis.
const SUPERSAMPLE: usize = 4;

/// Refuse rasters above this many pixels (about 200 MB of gray).
pub const MAX_RASTER_PIXELS: u64 = 200_000_000;

pub const DEFAULT_PNG_DPI: f64 = 300.0;

/// 8-bit grayscale image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayRaster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GrayRaster {
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Paint the scene onto a white raster at `dpi`, with supersampled edge coverage.
pub fn rasterize(scene: &Scene, dpi: f64) -> Result<GrayRaster, PrintError> {
    if !dpi.is_finite() || dpi <= 0.0 {
        return Err(LayoutError::InvalidDpi(dpi).into());
    }
    let width = mm_to_px(scene.size.width, dpi).ceil().max(1.0) as u32;
    let height = mm_to_px(scene.size.height, dpi).ceil().max(1.0) as u32;
    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        return Err(PrintError::RasterTooLarge {
            width,
            height,
            max_pixels: MAX_RASTER_PIXELS,
        });
    }

    let mm_per_px = MM_PER_INCH / dpi;
    let (w, h) = (width as usize, height as usize);
    let mut data = vec![255u8; w * h];
    let samples = (SUPERSAMPLE * SUPERSAMPLE) as f64;

    for shape in &scene.shapes {
        let (lo, hi) = shape.bounds();
        let x_lo = (lo.x / mm_per_px).floor().max(0.0) as usize;
        let y_lo = (lo.y / mm_per_px).floor().max(0.0) as usize;
        let x_hi = ((hi.x / mm_per_px).ceil() as usize).min(w);
        let y_hi = ((hi.y / mm_per_px).ceil() as usize).min(h);
        let ink = f64::from(shape.fill().gray());

        for py in y_lo..y_hi {
            for px in x_lo..x_hi {
                let mut hits = 0usize;
                for sy in 0..SUPERSAMPLE {
                    for sx in 0..SUPERSAMPLE {
                        let p = Point2::new(
                            (px as f64 + (sx as f64 + 0.5) / SUPERSAMPLE as f64) * mm_per_px,
                            (py as f64 + (sy as f64 + 0.5) / SUPERSAMPLE as f64) * mm_per_px,
                        );
                        if shape.contains(p) {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }
                let coverage = hits as f64 / samples;
                let cell = &mut data[py * w + px];
                let blended = f64::from(*cell) * (1.0 - coverage) + ink * coverage;
                *cell = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(GrayRaster {
        width,
        height,
        data,
    })
}

/// Encode a raster as an 8-bit grayscale PNG.
pub fn write_png<W: Write>(raster: &GrayRaster, out: W) -> Result<(), PrintError> {
    let mut encoder = png::Encoder::new(out, raster.width, raster.height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&raster.data)?;
    writer.finish()?;
    Ok(())
}

/// Rasterize and encode in one step.
pub fn render_png(scene: &Scene, dpi: f64) -> Result<Vec<u8>, PrintError> {
    let raster = rasterize(scene, dpi)?;
    let mut buf = Vec::new();
    write_png(&raster, &mut buf)?;
    Ok(buf)
}
