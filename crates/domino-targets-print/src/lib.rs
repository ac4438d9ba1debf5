//! Printable domino fiducial sheets.
//!
//! Pipeline:
//! 1. draw unique codes with [`domino_targets_code::CodeGenerator`],
//! 2. place them on a grid ([`SheetLayout`]),
//! 3. turn the layout into filled shapes ([`Scene`]),
//! 4. write SVG, PDF, PNG and a JSON manifest per sheet.
//!
//! ```
//! use domino_targets_code::{CodeGenerator, CodeRegistry};
//! use domino_targets_print::{generate_sheets, render_svg, BatchRequest, SheetSpec};
//!
//! let request = BatchRequest { sheet: SheetSpec::new(2, 3, 1.0), files: 2, seed: Some(1) };
//! let mut registry = CodeRegistry::new();
//! let sheets = generate_sheets(&request, &mut CodeGenerator::seeded(1), &mut registry).unwrap();
//! let svg = render_svg(&sheets[0].scene());
//! assert!(svg.contains("<circle"));
//! ```

mod batch;
mod error;
mod format;
mod geometry;
mod io;
mod layout;
mod pdf;
mod raster;
mod scene;
mod svg;

pub use batch::{
    generate_sheets, registry_from_manifests, write_sheet, BatchRequest, PrintableSheet,
    RenderOptions,
};
pub use error::{LayoutError, PrintError};
pub use format::{OutputFormat, UnknownFormat};
pub use geometry::DominoGeometry;
pub use io::{DominoRecord, GenerateConfig, SheetManifest};
pub use layout::{PlacedDomino, SheetLayout, SheetSpec};
pub use pdf::render_pdf;
pub use raster::{
    rasterize, render_png, write_png, GrayRaster, DEFAULT_PNG_DPI, MAX_RASTER_PIXELS,
};
pub use scene::{Fill, Scene, Shape};
pub use svg::render_svg;
