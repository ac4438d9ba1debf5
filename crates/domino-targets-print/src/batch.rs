//! Multi-sheet generation and file output.

use std::fs;
use std::path::{Path, PathBuf};

use domino_targets_code::{CodeError, CodeGenerator, CodeRegistry};
use log::{debug, info};
use rand::Rng;

use crate::error::{LayoutError, PrintError};
use crate::format::OutputFormat;
use crate::io::SheetManifest;
use crate::layout::{SheetLayout, SheetSpec};
use crate::pdf::render_pdf;
use crate::raster::{render_png, DEFAULT_PNG_DPI};
use crate::scene::Scene;
use crate::svg::render_svg;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A run of `files` sheets sharing one grid spec.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchRequest {
    pub sheet: SheetSpec,
    pub files: usize,
    /// Recorded in manifests so a run can be reproduced.
    pub seed: Option<u64>,
}

impl BatchRequest {
    /// Codes needed for the whole batch.
    pub fn total_codes(&self) -> Result<usize, LayoutError> {
        self.sheet
            .checked_slots()
            .and_then(|slots| slots.checked_mul(self.files))
            .ok_or(LayoutError::TooManySlots {
                rows: self.sheet.rows,
                cols: self.sheet.cols,
                files: self.files,
            })
    }
}

/// Output options shared by every sheet of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub formats: Vec<OutputFormat>,
    pub png_dpi: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            formats: OutputFormat::default_set(),
            png_dpi: DEFAULT_PNG_DPI,
        }
    }
}

/// One generated sheet, ready to be written.
#[derive(Clone, Debug)]
pub struct PrintableSheet {
    pub index: usize,
    pub layout: SheetLayout,
    pub manifest: SheetManifest,
}

impl PrintableSheet {
    /// File stem shared by every output of this sheet.
    pub fn file_stem(&self) -> String {
        format!("dominoes-{}", self.index)
    }

    pub fn scene(&self) -> Scene {
        Scene::from_layout(&self.layout)
    }
}

/// Generate every sheet of a batch, with codes distinct across all sheets and
/// from anything already in `registry`.
///
/// The whole batch is checked against the remaining code space before any
/// sampling, so an impossible request fails without side effects.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(generator, registry), fields(excluded = registry.len()))
)]
pub fn generate_sheets<R: Rng>(
    request: &BatchRequest,
    generator: &mut CodeGenerator<R>,
    registry: &mut CodeRegistry,
) -> Result<Vec<PrintableSheet>, PrintError> {
    request.sheet.validate()?;
    generator.constraints().check()?;

    let requested = request.total_codes()?;
    let available = registry.remaining(generator.constraints());
    if requested > available {
        return Err(CodeError::Exhausted {
            requested,
            available,
        }
        .into());
    }

    let mut sheets = Vec::with_capacity(request.files);
    for index in 0..request.files {
        let codes = generator.generate(request.sheet.slots(), registry)?;
        let layout = SheetLayout::new(request.sheet, &codes)?;
        let manifest = SheetManifest::from_layout(index, &layout, request.seed);
        debug!(
            "sheet {index}: {} codes, {} draws",
            codes.len(),
            generator.last_stats().draws
        );
        sheets.push(PrintableSheet {
            index,
            layout,
            manifest,
        });
    }
    info!(
        "generated {} sheet(s), {} codes, {} left unused",
        sheets.len(),
        requested,
        registry.remaining(generator.constraints())
    );
    Ok(sheets)
}

/// Write the requested outputs of one sheet into `dir` as `dominoes-<index>.<ext>`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(sheet = sheet.index))
)]
pub fn write_sheet(
    sheet: &PrintableSheet,
    dir: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>, PrintError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let scene = sheet.scene();
    let mut written = Vec::with_capacity(options.formats.len());
    for &format in &options.formats {
        let path = dir.join(format!("{}.{}", sheet.file_stem(), format.extension()));
        match format {
            OutputFormat::Svg => fs::write(&path, render_svg(&scene))?,
            OutputFormat::Pdf => fs::write(&path, render_pdf(&scene))?,
            OutputFormat::Png => fs::write(&path, render_png(&scene, options.png_dpi)?)?,
            OutputFormat::Json => sheet.manifest.write_json(&path)?,
        }
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Registry pre-loaded with the codes of earlier manifests.
pub fn registry_from_manifests<P: AsRef<Path>>(paths: &[P]) -> Result<CodeRegistry, PrintError> {
    let mut registry = CodeRegistry::new();
    for path in paths {
        let manifest = SheetManifest::load_json(path)?;
        let before = registry.len();
        registry.extend(manifest.codes());
        debug!(
            "excluded {} code(s) from {}",
            registry.len() - before,
            path.as_ref().display()
        );
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domino_targets_code::MAX_UNIQUE_CODES;
    use std::collections::HashSet;

    fn request(rows: usize, cols: usize, files: usize) -> BatchRequest {
        BatchRequest {
            sheet: SheetSpec::new(rows, cols, 1.0),
            files,
            seed: Some(5),
        }
    }

    #[test]
    fn codes_are_distinct_across_sheets() {
        let mut gen = CodeGenerator::seeded(5);
        let mut registry = CodeRegistry::new();
        let sheets = generate_sheets(&request(4, 3, 5), &mut gen, &mut registry).unwrap();
        assert_eq!(sheets.len(), 5);

        let orbits: HashSet<_> = sheets
            .iter()
            .flat_map(|s| s.manifest.codes())
            .map(|c| c.canonical())
            .collect();
        assert_eq!(orbits.len(), 60);
        assert_eq!(sheets[4].file_stem(), "dominoes-4");
    }

    #[test]
    fn oversized_batch_fails_without_drawing() {
        let mut gen = CodeGenerator::seeded(5);
        let mut registry = CodeRegistry::new();
        let err = generate_sheets(&request(10, 10, 5), &mut gen, &mut registry).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("only {MAX_UNIQUE_CODES} fiducials exist; requested 500")
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn writes_each_requested_format() {
        let mut gen = CodeGenerator::seeded(2);
        let mut registry = CodeRegistry::new();
        let sheets = generate_sheets(&request(2, 2, 1), &mut gen, &mut registry).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let options = RenderOptions {
            formats: OutputFormat::ALL.to_vec(),
            png_dpi: 50.0,
        };
        let written = write_sheet(&sheets[0], dir.path().join("out"), &options).unwrap();
        assert_eq!(written.len(), 4);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }
        assert!(dir.path().join("out/dominoes-0.pdf").exists());
    }

    #[test]
    fn excluded_manifests_are_never_reissued() {
        let dir = tempfile::tempdir().unwrap();
        let mut gen = CodeGenerator::seeded(9);
        let mut registry = CodeRegistry::new();
        let first = generate_sheets(&request(5, 5, 1), &mut gen, &mut registry).unwrap();
        let path = dir.path().join("previous.json");
        first[0].manifest.write_json(&path).unwrap();

        let mut registry = registry_from_manifests(&[&path]).unwrap();
        assert_eq!(registry.len(), 25);
        let mut gen = CodeGenerator::seeded(9);
        let second = generate_sheets(&request(5, 5, 1), &mut gen, &mut registry).unwrap();

        let previous: HashSet<_> = first[0].manifest.codes().map(|c| c.canonical()).collect();
        assert!(second[0]
            .manifest
            .codes()
            .all(|c| !previous.contains(&c.canonical())));
    }

    #[test]
    fn overflowing_grid_fails_before_drawing() {
        let mut gen = CodeGenerator::seeded(5);
        let mut registry = CodeRegistry::new();
        let huge = usize::MAX / 2 + 1;
        let err = generate_sheets(&request(huge, 2, 1), &mut gen, &mut registry).unwrap_err();
        assert!(matches!(
            err,
            PrintError::Layout(LayoutError::TooManySlots { cols: 2, .. })
        ));
        assert_eq!(gen.last_stats().draws, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn overflowing_file_count_fails_before_drawing() {
        let mut gen = CodeGenerator::seeded(5);
        let mut registry = CodeRegistry::new();
        let err = generate_sheets(&request(usize::MAX, 1, 2), &mut gen, &mut registry).unwrap_err();
        assert!(matches!(
            err,
            PrintError::Layout(LayoutError::TooManySlots { files: 2, .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn large_but_countable_grid_is_exhausted() {
        let mut gen = CodeGenerator::seeded(5);
        let mut registry = CodeRegistry::new();
        let err = generate_sheets(&request(1 << 20, 4, 1), &mut gen, &mut registry).unwrap_err();
        assert!(matches!(
            err,
            PrintError::Code(CodeError::Exhausted {
                requested: 4_194_304,
                ..
            })
        ));
    }
}
