//! Minimal single-page vector PDF writer.
//!
//! The page is sized to the sheet in points and contains one content stream
//! of filled paths. Arcs are approximated with cubic Béziers.

use std::fmt::Write as _;

use domino_targets_core::mm_to_pt;

use crate::scene::{Fill, Scene, Shape};
use crate::svg::fmt_num;

/// Control-point distance for a quarter circle of unit radius.
const KAPPA: f64 = 0.552_284_75;

struct PathBuilder {
    ops: String,
}

impl PathBuilder {
    fn new() -> Self {
        Self { ops: String::new() }
    }

    fn num(v: f64) -> String {
        fmt_num(v, 3)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = writeln!(self.ops, "{} {} m", Self::num(x), Self::num(y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = writeln!(self.ops, "{} {} l", Self::num(x), Self::num(y));
    }

    fn curve_to(&mut self, c1: (f64, f64), c2: (f64, f64), end: (f64, f64)) {
        let _ = writeln!(
            self.ops,
            "{} {} {} {} {} {} c",
            Self::num(c1.0),
            Self::num(c1.1),
            Self::num(c2.0),
            Self::num(c2.1),
            Self::num(end.0),
            Self::num(end.1)
        );
    }

    fn fill(&mut self) {
        self.ops.push_str("h f\n");
    }

    /// Rounded rectangle from `(x0, y0)` to `(x1, y1)` in y-up space.
    fn rounded_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, r: f64) {
        let k = KAPPA * r;
        self.move_to(x0 + r, y0);
        self.line_to(x1 - r, y0);
        self.curve_to((x1 - r + k, y0), (x1, y0 + r - k), (x1, y0 + r));
        self.line_to(x1, y1 - r);
        self.curve_to((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));
        self.line_to(x0 + r, y1);
        self.curve_to((x0 + r - k, y1), (x0, y1 - r + k), (x0, y1 - r));
        self.line_to(x0, y0 + r);
        self.curve_to((x0, y0 + r - k), (x0 + r - k, y0), (x0 + r, y0));
        self.fill();
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = KAPPA * r;
        self.move_to(cx + r, cy);
        self.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
        self.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
        self.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
        self.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
        self.fill();
    }
}

/// Build the page content stream; sheet y-down millimetres become y-up points.
fn content_stream(scene: &Scene) -> String {
    let page_h = mm_to_pt(scene.size.height);
    let flip = |y_mm: f64| page_h - mm_to_pt(y_mm);

    let mut path = PathBuilder::new();
    let mut current: Option<Fill> = None;
    for shape in &scene.shapes {
        let fill = shape.fill();
        if current != Some(fill) {
            let gray = match fill {
                Fill::Black => "0 g\n",
                Fill::White => "1 g\n",
            };
            path.ops.push_str(gray);
            current = Some(fill);
        }
        match *shape {
            Shape::RoundedRect {
                center,
                width,
                height,
                radius,
                ..
            } => {
                let x0 = mm_to_pt(center.x - width / 2.0);
                let x1 = mm_to_pt(center.x + width / 2.0);
                let y0 = flip(center.y + height / 2.0);
                let y1 = flip(center.y - height / 2.0);
                path.rounded_rect(x0, y0, x1, y1, mm_to_pt(radius));
            }
            Shape::Circle { center, radius, .. } => {
                path.circle(mm_to_pt(center.x), flip(center.y), mm_to_pt(radius));
            }
        }
    }
    path.ops
}

/// Render a scene as a one-page PDF 1.4 document.
pub fn render_pdf(scene: &Scene) -> Vec<u8> {
    let page_w = fmt_num(mm_to_pt(scene.size.width), 3);
    let page_h = fmt_num(mm_to_pt(scene.size.height), 3);
    let content = content_stream(scene);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_w} {page_h}] /Resources << >> /Contents 4 0 R >>"
        ),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        format!(
            "<< /Producer (domino-targets {}) >>",
            env!("CARGO_PKG_VERSION")
        ),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for off in &offsets {
        let _ = writeln!(xref, "{off:010} 00000 n ");
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    );
    out.extend_from_slice(xref.as_bytes());
    out
}
