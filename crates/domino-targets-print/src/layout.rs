//! Grid placement of dominoes on a sheet.

use domino_targets_code::DominoCode;
use domino_targets_core::{Point2, Size2};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::DominoGeometry;

fn default_adjust_scale() -> f64 {
    1.0
}

/// Sheet grid and scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub rows: usize,
    pub cols: usize,
    /// Multiplier applied to every nominal length (1.0 = 43 x 12.7 mm dominoes).
    #[serde(default = "default_adjust_scale")]
    pub adjust_scale: f64,
}

impl SheetSpec {
    pub fn new(rows: usize, cols: usize, adjust_scale: f64) -> Self {
        Self {
            rows,
            cols,
            adjust_scale,
        }
    }

    /// Number of domino slots, or `None` when `rows * cols` overflows.
    #[inline]
    pub fn checked_slots(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Number of domino slots; saturates on grids that [`Self::validate`] rejects.
    #[inline]
    pub fn slots(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayoutError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.checked_slots().is_none() {
            return Err(LayoutError::TooManySlots {
                rows: self.rows,
                cols: self.cols,
                files: 1,
            });
        }
        DominoGeometry::scaled(self.adjust_scale).map(|_| ())
    }
}

/// One domino at its place on the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedDomino {
    /// Row-major slot index.
    pub id: u32,
    pub row: usize,
    pub col: usize,
    pub code: DominoCode,
    /// Centre of the domino body, millimetres from the top-left sheet corner.
    pub center: Point2,
}

/// A validated sheet with codes assigned to slots.
#[derive(Clone, Debug)]
pub struct SheetLayout {
    spec: SheetSpec,
    geometry: DominoGeometry,
    dominoes: Vec<PlacedDomino>,
}

impl SheetLayout {
    /// Assign `codes` to slots in row-major order.
    pub fn new(spec: SheetSpec, codes: &[DominoCode]) -> Result<Self, LayoutError> {
        spec.validate()?;
        let geometry = DominoGeometry::scaled(spec.adjust_scale)?;
        if codes.len() != spec.slots() {
            return Err(LayoutError::CodeCountMismatch {
                expected: spec.slots(),
                got: codes.len(),
            });
        }

        let x0 = geometry.margin() + geometry.width / 2.0;
        let y0 = geometry.margin() + geometry.height / 2.0;
        let dx = geometry.width + geometry.gap;
        let dy = geometry.height + geometry.gap;

        let dominoes = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                let (row, col) = (i / spec.cols, i % spec.cols);
                PlacedDomino {
                    id: i as u32,
                    row,
                    col,
                    code,
                    center: Point2::new(x0 + col as f64 * dx, y0 + row as f64 * dy),
                }
            })
            .collect();

        Ok(Self {
            spec,
            geometry,
            dominoes,
        })
    }

    #[inline]
    pub fn spec(&self) -> SheetSpec {
        self.spec
    }

    #[inline]
    pub fn geometry(&self) -> &DominoGeometry {
        &self.geometry
    }

    #[inline]
    pub fn dominoes(&self) -> &[PlacedDomino] {
        &self.dominoes
    }

    /// Sheet size: the grid plus a margin on every side.
    pub fn page_size(&self) -> Size2 {
        let g = &self.geometry;
        let span = |n: usize, len: f64| n as f64 * len + (n as f64 - 1.0) * g.gap;
        Size2::new(
            2.0 * g.margin() + span(self.spec.cols, g.width),
            2.0 * g.margin() + span(self.spec.rows, g.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn codes(n: usize) -> Vec<DominoCode> {
        (0..n as u16).map(DominoCode::from_bits).collect()
    }

    #[test]
    fn slots_fill_row_major() {
        let layout = SheetLayout::new(SheetSpec::new(2, 3, 1.0), &codes(6)).unwrap();
        let d = &layout.dominoes()[4];
        assert_eq!((d.row, d.col), (1, 1));
        assert_eq!(d.code.bits(), 4);
    }

    #[test]
    fn first_and_neighbour_centres() {
        let layout = SheetLayout::new(SheetSpec::new(2, 2, 1.0), &codes(4)).unwrap();
        let first = layout.dominoes()[0].center;
        assert_relative_eq!(first.x, 43.0 / 2.0 + 5.0);
        assert_relative_eq!(first.y, 12.7 / 2.0 + 5.0);

        let right = layout.dominoes()[1].center;
        let below = layout.dominoes()[2].center;
        assert_relative_eq!(right.x - first.x, 45.25);
        assert_relative_eq!(below.y - first.y, 14.95, epsilon = 1e-9);
    }

    #[test]
    fn page_has_equal_margins() {
        let layout = SheetLayout::new(SheetSpec::new(3, 2, 1.0), &codes(6)).unwrap();
        let size = layout.page_size();
        assert_relative_eq!(size.width, 10.0 + 2.0 * 43.0 + 2.25);
        assert_relative_eq!(size.height, 10.0 + 3.0 * 12.7 + 2.0 * 2.25, epsilon = 1e-9);

        let last = layout.dominoes().last().unwrap().center;
        assert_relative_eq!(size.width - (last.x + 43.0 / 2.0), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn code_count_must_match_slots() {
        let err = SheetLayout::new(SheetSpec::new(2, 2, 1.0), &codes(3)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::CodeCountMismatch {
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(matches!(
            SheetSpec::new(0, 4, 1.0).validate(),
            Err(LayoutError::InvalidGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn overflowing_grid_is_rejected() {
        let huge = usize::MAX / 2 + 1;
        let spec = SheetSpec::new(huge, 2, 1.0);
        assert_eq!(spec.checked_slots(), None);
        assert_eq!(spec.slots(), usize::MAX);
        assert_eq!(
            spec.validate(),
            Err(LayoutError::TooManySlots {
                rows: huge,
                cols: 2,
                files: 1
            })
        );
        assert!(SheetLayout::new(spec, &codes(0)).is_err());
    }
}
