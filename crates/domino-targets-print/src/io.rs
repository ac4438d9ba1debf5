//! JSON manifests and generation configs.

use domino_targets_code::{CodeConstraints, DominoCode};
use domino_targets_core::Point2;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::PrintError;
use crate::format::OutputFormat;
use crate::layout::SheetLayout;
use crate::raster::DEFAULT_PNG_DPI;

fn default_files() -> usize {
    1
}

fn default_adjust_scale() -> f64 {
    1.0
}

fn default_png_dpi() -> f64 {
    DEFAULT_PNG_DPI
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// One domino as recorded in a sheet manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominoRecord {
    pub id: u32,
    pub row: usize,
    pub col: usize,
    pub code: DominoCode,
    /// Same code as `0xXXXX`, for humans.
    pub hex: String,
    pub center_mm: Point2,
}

/// Sidecar description of a generated sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetManifest {
    pub index: usize,
    pub rows: usize,
    pub cols: usize,
    pub adjust_scale: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    pub dominoes: Vec<DominoRecord>,
}

impl SheetManifest {
    pub fn from_layout(index: usize, layout: &SheetLayout, seed: Option<u64>) -> Self {
        let spec = layout.spec();
        let size = layout.page_size();
        Self {
            index,
            rows: spec.rows,
            cols: spec.cols,
            adjust_scale: spec.adjust_scale,
            width_mm: size.width,
            height_mm: size.height,
            seed,
            dominoes: layout
                .dominoes()
                .iter()
                .map(|d| DominoRecord {
                    id: d.id,
                    row: d.row,
                    col: d.col,
                    code: d.code,
                    hex: d.code.to_string(),
                    center_mm: d.center,
                })
                .collect(),
        }
    }

    /// Codes in slot order.
    pub fn codes(&self) -> impl Iterator<Item = DominoCode> + '_ {
        self.dominoes.iter().map(|d| d.code)
    }

    /// Load a manifest from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this manifest to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Settings for a `generate` run. Every field has a default so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
    #[serde(default = "default_files")]
    pub files: usize,
    #[serde(default = "default_adjust_scale")]
    pub adjust_scale: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "OutputFormat::default_set")]
    pub formats: Vec<OutputFormat>,
    #[serde(default = "default_png_dpi")]
    pub png_dpi: f64,
    /// Manifests from earlier runs whose codes must not be reused.
    #[serde(default)]
    pub exclude: Vec<PathBuf>,
    #[serde(default)]
    pub constraints: CodeConstraints,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            rows: None,
            cols: None,
            files: default_files(),
            adjust_scale: default_adjust_scale(),
            output_dir: default_output_dir(),
            seed: None,
            formats: OutputFormat::default_set(),
            png_dpi: default_png_dpi(),
            exclude: Vec::new(),
            constraints: CodeConstraints::default(),
        }
    }
}

impl GenerateConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
