//! Output-independent list of filled shapes.

use domino_targets_code::{Row, COLUMNS};
use domino_targets_core::{Point2, Size2};

use crate::layout::SheetLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Black,
    White,
}

impl Fill {
    /// 8-bit gray level.
    #[inline]
    pub fn gray(self) -> u8 {
        match self {
            Fill::Black => 0,
            Fill::White => 255,
        }
    }

    #[inline]
    pub fn svg_name(self) -> &'static str {
        match self {
            Fill::Black => "black",
            Fill::White => "white",
        }
    }
}

/// A filled primitive in sheet millimetres (y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    RoundedRect {
        center: Point2,
        width: f64,
        height: f64,
        radius: f64,
        fill: Fill,
    },
    Circle {
        center: Point2,
        radius: f64,
        fill: Fill,
    },
}

impl Shape {
    /// Bounding box as `(min, max)` corners.
    pub fn bounds(&self) -> (Point2, Point2) {
        let (c, hw, hh) = match *self {
            Shape::RoundedRect {
                center,
                width,
                height,
                ..
            } => (center, width / 2.0, height / 2.0),
            Shape::Circle { center, radius, .. } => (center, radius, radius),
        };
        (c.offset(-hw, -hh), c.offset(hw, hh))
    }

    /// Point-in-shape test, boundary inclusive.
    pub fn contains(&self, p: Point2) -> bool {
        match *self {
            Shape::RoundedRect {
                center,
                width,
                height,
                radius,
                ..
            } => {
                let ax = (p.x - center.x).abs();
                let ay = (p.y - center.y).abs();
                if ax > width / 2.0 || ay > height / 2.0 {
                    return false;
                }
                let dx = ax - (width / 2.0 - radius);
                let dy = ay - (height / 2.0 - radius);
                if dx > 0.0 && dy > 0.0 {
                    dx * dx + dy * dy <= radius * radius
                } else {
                    true
                }
            }
            Shape::Circle { center, radius, .. } => {
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                dx * dx + dy * dy <= radius * radius
            }
        }
    }

    #[inline]
    pub fn fill(&self) -> Fill {
        match *self {
            Shape::RoundedRect { fill, .. } | Shape::Circle { fill, .. } => fill,
        }
    }
}

/// Shapes painted in order on a white page.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub size: Size2,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Body first, then one white dot per set bit: lower column `i`, then upper column `i`.
    pub fn from_layout(layout: &SheetLayout) -> Self {
        let g = layout.geometry();
        let mut shapes = Vec::new();
        for domino in layout.dominoes() {
            shapes.push(Shape::RoundedRect {
                center: domino.center,
                width: g.width,
                height: g.height,
                radius: g.corner_radius,
                fill: Fill::Black,
            });
            for col in 0..COLUMNS {
                for row in Row::ALL {
                    if domino.code.dot(row, col) {
                        let off = g.dot_offset(row, col);
                        shapes.push(Shape::Circle {
                            center: domino.center.offset(off.x, off.y),
                            radius: g.dot_radius,
                            fill: Fill::White,
                        });
                    }
                }
            }
        }
        Self {
            size: layout.page_size(),
            shapes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SheetSpec;
    use domino_targets_code::DominoCode;

    #[test]
    fn one_body_plus_one_dot_per_bit() {
        let codes = [DominoCode::from_bits(0x8F8F), DominoCode::from_bits(0x8181)];
        let layout = SheetLayout::new(SheetSpec::new(1, 2, 1.0), &codes).unwrap();
        let scene = Scene::from_layout(&layout);
        assert_eq!(scene.shapes.len(), 2 + 10 + 4);
        assert!(matches!(scene.shapes[0], Shape::RoundedRect { .. }));
        assert_eq!(scene.shapes[1].fill(), Fill::White);
    }

    #[test]
    fn dots_follow_bit_order() {
        let layout =
            SheetLayout::new(SheetSpec::new(1, 1, 1.0), &[DominoCode::from_bits(0x8181)]).unwrap();
        let scene = Scene::from_layout(&layout);
        let centers: Vec<Point2> = scene.shapes[1..]
            .iter()
            .map(|s| match s {
                Shape::Circle { center, .. } => *center,
                _ => unreachable!(),
            })
            .collect();
        // bit 0 (lower-left), bit 8 (upper-left), bit 7 (lower-right), bit 15 (upper-right)
        assert!(centers[0].y > centers[1].y);
        assert!(centers[0].x < centers[2].x);
        assert!(centers[3].y < centers[2].y);
    }

    #[test]
    fn rounded_corner_excludes_the_square_tip() {
        let rect = Shape::RoundedRect {
            center: Point2::new(0.0, 0.0),
            width: 10.0,
            height: 4.0,
            radius: 1.0,
            fill: Fill::Black,
        };
        assert!(rect.contains(Point2::new(0.0, 0.0)));
        assert!(rect.contains(Point2::new(4.9, 0.0)));
        assert!(!rect.contains(Point2::new(4.95, 1.95)));
        assert!(!rect.contains(Point2::new(5.1, 0.0)));
    }
}
