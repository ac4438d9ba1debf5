use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unrecognized output format name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output format `{0}` (expected svg, pdf, png or json)")]
pub struct UnknownFormat(pub String);

/// File kinds written for every sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Pdf,
    Png,
    /// Sheet manifest (codes and positions).
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Svg,
        OutputFormat::Pdf,
        OutputFormat::Png,
        OutputFormat::Json,
    ];

    /// Vector outputs plus the manifest.
    pub fn default_set() -> Vec<OutputFormat> {
        vec![OutputFormat::Svg, OutputFormat::Pdf, OutputFormat::Json]
    }

    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extension() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
