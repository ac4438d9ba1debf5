//! Domino fiducial codes.
//!
//! A domino carries two rows of eight dot positions. The outer dot of each
//! row end is always printed; the six inner columns of each row carry the
//! identity. This crate covers:
//! - the packed 16-bit code model and its half-turn rotation,
//! - validity constraints (dot count, no empty/full rows, no self-symmetric codes),
//! - exhaustive enumeration of the valid space (451 rotation-distinct codes),
//! - a seeded rejection-sampling generator backed by a registry of issued codes,
//! - matching observed patterns back to issued codes.
//!
//! ```
//! use domino_targets_code::{CodeGenerator, CodeRegistry};
//!
//! let mut registry = CodeRegistry::new();
//! let codes = CodeGenerator::seeded(42).generate(8, &mut registry).unwrap();
//! assert_eq!(codes.len(), 8);
//! ```

mod code;
mod constraints;
mod enumerate;
mod error;
mod generator;
mod matcher;
mod registry;

pub use code::{DominoCode, Row, ANCHOR_MASK, COLUMNS};
pub use constraints::{CodeConstraints, Rejection};
pub use enumerate::{capacity, enumerate_valid, MAX_UNIQUE_CODES};
pub use error::CodeError;
pub use generator::{CodeGenerator, GenerationStats, DEFAULT_MAX_DRAWS};
pub use matcher::{min_pairwise_distance, Match, Matcher};
pub use registry::CodeRegistry;
