use domino_targets_code::CodeError;

/// Sheet grid and layout errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("rows and cols must be >= 1 (got {rows}x{cols})")]
    InvalidGrid { rows: usize, cols: usize },
    #[error("{rows}x{cols} grid over {files} sheet(s) has too many slots to count")]
    TooManySlots {
        rows: usize,
        cols: usize,
        files: usize,
    },
    #[error("adjust_scale must be finite and > 0 (got {0})")]
    InvalidScale(f64),
    #[error("sheet has {expected} slots but {got} codes were supplied")]
    CodeCountMismatch { expected: usize, got: usize },
    #[error("raster dpi must be finite and > 0 (got {0})")]
    InvalidDpi(f64),
}

/// Errors produced while generating or writing sheets.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Png(#[from] png::EncodingError),
    #[error("raster of {width}x{height} px exceeds the {max_pixels} pixel limit")]
    RasterTooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },
}
