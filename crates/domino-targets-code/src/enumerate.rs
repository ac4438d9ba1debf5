//! Exhaustive enumeration of the valid code space.

use crate::code::DominoCode;
use crate::constraints::CodeConstraints;

/// Number of rotation-distinct codes under [`CodeConstraints::default`].
///
/// 924 ways to place six dots on twelve free columns, minus the two
/// placements that empty a row, minus the 20 half-turn symmetric ones,
/// halved for the two orientations.
pub const MAX_UNIQUE_CODES: usize = 451;

/// All valid codes, one canonical representative per rotation pair, ascending.
pub fn enumerate_valid(constraints: &CodeConstraints) -> Vec<DominoCode> {
    (0..=u16::MAX)
        .filter(|raw| raw & constraints.required_mask == constraints.required_mask)
        .map(DominoCode::from_bits)
        .filter(|&code| constraints.is_valid(code) && code.canonical() == code)
        .collect()
}

/// Size of the rotation-distinct code space.
pub fn capacity(constraints: &CodeConstraints) -> usize {
    if *constraints == CodeConstraints::default() {
        return MAX_UNIQUE_CODES;
    }
    enumerate_valid(constraints).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_space_has_451_codes() {
        let codes = enumerate_valid(&CodeConstraints::default());
        assert_eq!(codes.len(), MAX_UNIQUE_CODES);
    }

    #[test]
    fn enumeration_has_no_rotation_duplicates() {
        let codes = enumerate_valid(&CodeConstraints::default());
        let mut seen = HashSet::new();
        for code in &codes {
            assert!(seen.insert(code.canonical()), "duplicate orbit for {code}");
        }
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn relaxing_symmetry_adds_the_symmetric_codes() {
        let relaxed = CodeConstraints {
            reject_symmetric: false,
            ..CodeConstraints::default()
        };
        assert_eq!(capacity(&relaxed), MAX_UNIQUE_CODES + 20);
    }
}
