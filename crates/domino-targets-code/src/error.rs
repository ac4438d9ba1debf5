/// Errors returned by the code generator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("only {available} fiducials exist; requested {requested}")]
    Exhausted { requested: usize, available: usize },
    #[error("gave up after {draws} draws with {accepted} of {requested} codes accepted")]
    DrawLimit {
        draws: u64,
        accepted: usize,
        requested: usize,
    },
    #[error("required_mask {mask:#06X} changes under a half-turn ({rotated:#06X})")]
    AsymmetricMask { mask: u16, rotated: u16 },
}
