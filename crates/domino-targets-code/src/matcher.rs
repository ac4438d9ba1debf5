//! Look up observed dot patterns in a set of issued codes.

use serde::{Deserialize, Serialize};

use crate::code::DominoCode;

/// A match for an observed pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Index of the code in the matcher's list.
    pub id: u32,
    /// `true` when the domino was observed upside down.
    pub rotated: bool,
    /// Hamming distance between the observation and the (oriented) code.
    pub hamming: u8,
}

/// Brute-force matcher over a fixed list of codes and both orientations.
///
/// At most 451 codes exist, so a linear scan is all that is needed.
#[derive(Clone, Debug)]
pub struct Matcher {
    codes: Vec<[u16; 2]>,
    max_hamming: u8,
}

impl Matcher {
    pub fn new(codes: impl IntoIterator<Item = DominoCode>, max_hamming: u8) -> Self {
        let codes = codes
            .into_iter()
            .map(|c| [c.bits(), c.rotate_180().bits()])
            .collect();
        Self { codes, max_hamming }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    pub fn max_hamming(&self) -> u8 {
        self.max_hamming
    }

    /// Find the closest code within `max_hamming`; ties keep the lowest id.
    pub fn match_code(&self, observed: u16) -> Option<Match> {
        let mut best: Option<Match> = None;

        for (id, orientations) in self.codes.iter().enumerate() {
            for (rot, &cand) in orientations.iter().enumerate() {
                let h = (observed ^ cand).count_ones() as u8;
                if h > self.max_hamming {
                    continue;
                }
                let m = Match {
                    id: id as u32,
                    rotated: rot == 1,
                    hamming: h,
                };
                if best.map_or(true, |prev| m.hamming < prev.hamming) {
                    if m.hamming == 0 {
                        return Some(m);
                    }
                    best = Some(m);
                }
            }
        }

        best
    }
}

/// Smallest Hamming distance between any two codes, over both orientations.
///
/// Returns `None` for fewer than two codes.
pub fn min_pairwise_distance(codes: &[DominoCode]) -> Option<u32> {
    let mut best: Option<u32> = None;
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            let d = (a.bits() ^ b.bits())
                .count_ones()
                .min((a.bits() ^ b.rotate_180().bits()).count_ones());
            best = Some(best.map_or(d, |prev| prev.min(d)));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::CodeConstraints;
    use crate::enumerate::enumerate_valid;

    fn codes() -> Vec<DominoCode> {
        enumerate_valid(&CodeConstraints::default())
    }

    #[test]
    fn finds_exact_code_in_both_orientations() {
        let codes = codes();
        let matcher = Matcher::new(codes.iter().copied(), 0);
        let target = codes[17];

        let m = matcher.match_code(target.bits()).expect("upright");
        assert_eq!(
            m,
            Match {
                id: 17,
                rotated: false,
                hamming: 0
            }
        );

        let m = matcher
            .match_code(target.rotate_180().bits())
            .expect("rotated");
        assert_eq!(m.id, 17);
        assert!(m.rotated);
    }

    #[test]
    fn tolerates_a_flipped_dot_within_threshold() {
        let codes = vec![DominoCode::from_bits(0x8F8F)];
        let matcher = Matcher::new(codes, 1);
        let m = matcher.match_code(0x8F8F ^ (1 << 12)).expect("near match");
        assert_eq!(m.hamming, 1);
        assert!(!m.rotated);

        let strict = Matcher::new([DominoCode::from_bits(0x8F8F)], 0);
        assert!(strict.match_code(0x8F8F ^ (1 << 12)).is_none());
    }

    #[test]
    fn full_space_is_at_least_two_apart() {
        assert_eq!(min_pairwise_distance(&codes()), Some(2));
        assert_eq!(min_pairwise_distance(&codes()[..1]), None);
    }
}
