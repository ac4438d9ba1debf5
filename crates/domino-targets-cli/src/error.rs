use domino_targets_print::{LayoutError, PrintError};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Print(#[from] PrintError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing `{0}`: pass it on the command line or in --config")]
    MissingArgument(&'static str),
    #[error("invalid code `{0}`")]
    InvalidCode(String),
    #[error("no code within {max_hamming} dot(s) of {observed}")]
    NoMatch { observed: String, max_hamming: u8 },
}
