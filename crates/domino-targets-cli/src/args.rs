use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domino_targets_print::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "dominoes",
    version,
    about = "Generate printable sheets of unique domino fiducial markers"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit structured JSON logs instead of plain text.
    #[cfg(feature = "tracing")]
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate sheets of dominoes with codes unique across every sheet.
    Generate(GenerateArgs),
    /// List every rotation-distinct valid code.
    Enumerate(EnumerateArgs),
    /// Look up an observed dot pattern.
    Identify(IdentifyArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Dominoes per column of a sheet.
    pub rows: Option<usize>,
    /// Dominoes per row of a sheet.
    pub cols: Option<usize>,
    /// Number of sheets to generate.
    pub files: Option<usize>,
    /// Multiplier for every length (1.0 = 43 x 12.7 mm dominoes).
    pub adjust_scale: Option<f64>,
    /// Directory for the generated files (created if missing).
    pub output_dir: Option<PathBuf>,

    /// JSON config; explicit arguments take precedence over its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// RNG seed for reproducible sheets; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Comma-separated outputs: svg, pdf, png, json.
    #[arg(long, value_delimiter = ',')]
    pub format: Option<Vec<OutputFormat>>,
    /// Raster density for PNG output.
    #[arg(long)]
    pub png_dpi: Option<f64>,
    /// Manifest of an earlier run whose codes must not be reused (repeatable).
    #[arg(long)]
    pub exclude: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EnumerateArgs {
    /// Print a JSON array instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct IdentifyArgs {
    /// Observed code: 0x-prefixed hex, 0b-prefixed binary or decimal.
    pub code: String,
    /// Sheet manifest to search; defaults to the full enumerated code list.
    #[arg(long)]
    pub manifest: Option<PathBuf>,
    /// Accept up to this many wrong dots.
    #[arg(long, default_value_t = 0)]
    pub max_hamming: u8,
}
