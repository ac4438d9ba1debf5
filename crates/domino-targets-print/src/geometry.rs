//! Physical dimensions of a single domino.

use domino_targets_code::{Row, COLUMNS};
use domino_targets_core::Point2;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Domino dimensions in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DominoGeometry {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub dot_radius: f64,
    /// Centre-to-centre spacing of dots, both along a row and between rows.
    pub dot_pitch: f64,
    /// Blank space between neighbouring dominoes.
    pub gap: f64,
    /// Extra blank border added around the sheet, on top of `gap`.
    pub extra_margin: f64,
}

impl Default for DominoGeometry {
    fn default() -> Self {
        Self {
            width: 43.0,
            height: 12.7,
            corner_radius: 2.5,
            dot_radius: 1.25,
            dot_pitch: 5.08,
            gap: 2.25,
            extra_margin: 2.75,
        }
    }
}

impl DominoGeometry {
    /// Nominal geometry with every length multiplied by `adjust_scale`.
    pub fn scaled(adjust_scale: f64) -> Result<Self, LayoutError> {
        if !adjust_scale.is_finite() || adjust_scale <= 0.0 {
            return Err(LayoutError::InvalidScale(adjust_scale));
        }
        let g = Self::default();
        Ok(Self {
            width: g.width * adjust_scale,
            height: g.height * adjust_scale,
            corner_radius: g.corner_radius * adjust_scale,
            dot_radius: g.dot_radius * adjust_scale,
            dot_pitch: g.dot_pitch * adjust_scale,
            gap: g.gap * adjust_scale,
            extra_margin: g.extra_margin * adjust_scale,
        })
    }

    /// Distance from the sheet edge to the first domino.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.gap + self.extra_margin
    }

    /// Dot centre relative to the domino centre (y down).
    ///
    /// The lower row sits half a pitch below the centre line, the upper row
    /// half a pitch above; columns are symmetric about the centre.
    pub fn dot_offset(&self, row: Row, col: usize) -> Point2 {
        let x = (col as f64 - (COLUMNS as f64 - 1.0) / 2.0) * self.dot_pitch;
        let y = match row {
            Row::Lower => self.dot_pitch / 2.0,
            Row::Upper => -self.dot_pitch / 2.0,
        };
        Point2::new(x, y)
    }
}
