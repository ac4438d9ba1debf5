//! Book-keeping of issued codes, so every domino in a run is distinct.

use std::collections::BTreeSet;

use crate::code::DominoCode;
use crate::constraints::CodeConstraints;
use crate::enumerate::capacity;

/// Set of issued codes, keyed by canonical form.
///
/// A code and its half-turn rotation are the same physical domino, so
/// registering either blocks both.
#[derive(Clone, Debug, Default)]
pub struct CodeRegistry {
    issued: BTreeSet<DominoCode>,
}

impl CodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `code` or its rotation has been issued.
    #[inline]
    pub fn contains(&self, code: DominoCode) -> bool {
        self.issued.contains(&code.canonical())
    }

    /// Register a code. Returns `false` if it (or its rotation) was already present.
    pub fn insert(&mut self, code: DominoCode) -> bool {
        self.issued.insert(code.canonical())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Canonical forms of all issued codes, ascending.
    pub fn iter(&self) -> impl Iterator<Item = DominoCode> + '_ {
        self.issued.iter().copied()
    }

    /// How many more codes can still be issued under `constraints`.
    ///
    /// Registered codes that the constraints would reject do not consume capacity.
    pub fn remaining(&self, constraints: &CodeConstraints) -> usize {
        let used = self
            .issued
            .iter()
            .filter(|&&code| {
                code.bits() & constraints.required_mask == constraints.required_mask
                    && constraints.is_valid(code)
            })
            .count();
        capacity(constraints).saturating_sub(used)
    }
}

impl Extend<DominoCode> for CodeRegistry {
    fn extend<I: IntoIterator<Item = DominoCode>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

impl FromIterator<DominoCode> for CodeRegistry {
    fn from_iter<I: IntoIterator<Item = DominoCode>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::MAX_UNIQUE_CODES;

    #[test]
    fn rotation_counts_as_duplicate() {
        let code = DominoCode::from_bits(0x8F8F);
        let mut registry = CodeRegistry::new();
        assert!(registry.insert(code));
        assert!(registry.contains(code.rotate_180()));
        assert!(!registry.insert(code.rotate_180()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remaining_ignores_invalid_entries() {
        let constraints = CodeConstraints::default();
        let registry: CodeRegistry = [DominoCode::from_bits(0x8F8F), DominoCode::from_bits(0)]
            .into_iter()
            .collect();
        assert_eq!(registry.remaining(&constraints), MAX_UNIQUE_CODES - 1);
    }
}
