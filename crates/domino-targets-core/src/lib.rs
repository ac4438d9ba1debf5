//! Core units and utilities shared by the `domino-targets-*` crates.
//!
//! This crate is intentionally small. Sheet geometry is expressed in
//! millimetres and converted to output units (CSS px, PDF points, raster
//! pixels) only at the writer boundary.

mod logger;
mod units;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
pub use units::{mm_to_pt, mm_to_px, Point2, Size2, MM_PER_INCH, PDF_PT_PER_INCH, SVG_DPI};
