//! Physical units and a small millimetre point type.

use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// CSS pixel density used for SVG user units.
pub const SVG_DPI: f64 = 96.0;

/// PostScript points per inch, the PDF default user space.
pub const PDF_PT_PER_INCH: f64 = 72.0;

/// Convert millimetres to pixels at the given density.
#[inline]
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 {
    mm * dpi / MM_PER_INCH
}

/// Convert millimetres to PDF points.
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm_to_px(mm, PDF_PT_PER_INCH)
}

/// Point on a sheet, in millimetres, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// Axis-aligned size in millimetres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size2 {
    pub width: f64,
    pub height: f64,
}

impl Size2 {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn one_inch_converts_to_density() {
        assert_relative_eq!(mm_to_px(25.4, SVG_DPI), 96.0);
        assert_relative_eq!(mm_to_pt(25.4), 72.0);
        assert_relative_eq!(mm_to_px(12.7, 300.0), 150.0);
    }

    #[test]
    fn point_helpers_compose() {
        let p = Point2::new(1.0, -2.0).offset(0.5, 0.5).scale(2.0);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, -3.0);
    }
}
