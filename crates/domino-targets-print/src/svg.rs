//! SVG output. User units are CSS pixels (96 dpi); the root element carries
//! the physical size in millimetres so the sheet prints at scale.

use std::fmt::Write as _;

use domino_targets_core::{mm_to_px, SVG_DPI};

use crate::scene::{Scene, Shape};

/// Print `v` with at most `decimals` fractional digits, trailing zeros trimmed.
pub(crate) fn fmt_num(v: f64, decimals: usize) -> String {
    let mut s = format!("{v:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

fn px(mm: f64) -> String {
    fmt_num(mm_to_px(mm, SVG_DPI), 4)
}

/// Path data for a rounded rectangle: four quarter arcs joined by straight edges.
fn rounded_rect_path(cx: f64, cy: f64, w: f64, h: f64, r: f64) -> String {
    let (hw, hh) = (w / 2.0, h / 2.0);
    let p = |x: f64, y: f64| format!("{} {}", px(cx + x), px(cy + y));
    let rr = px(r);
    let arc = |x: f64, y: f64| format!("A{rr},{rr} 0 0,1 {}", p(x, y).replace(' ', ","));
    [
        format!("M {}", p(-hw + r, hh)),
        arc(-hw, hh - r),
        format!("L {}", p(-hw, -hh + r)),
        arc(-hw + r, -hh),
        format!("L {}", p(hw - r, -hh)),
        arc(hw, -hh + r),
        format!("L {}", p(hw, hh - r)),
        arc(hw - r, hh),
        "z".to_string(),
    ]
    .concat()
}

/// Render a scene as a standalone SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let (w_mm, h_mm) = (scene.size.width, scene.size.height);
    let mut out = String::new();
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}mm" height="{}mm" viewBox="0 0 {} {}">"#,
        fmt_num(w_mm, 4),
        fmt_num(h_mm, 4),
        px(w_mm),
        px(h_mm)
    );

    for shape in &scene.shapes {
        match *shape {
            Shape::RoundedRect {
                center,
                width,
                height,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    r#"<path d="{}" fill="{}" stroke="none" />"#,
                    rounded_rect_path(center.x, center.y, width, height, radius),
                    fill.svg_name()
                );
            }
            Shape::Circle {
                center,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
                    px(center.x),
                    px(center.y),
                    px(radius),
                    fill.svg_name()
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
