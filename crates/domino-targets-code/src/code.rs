//! Packed 16-bit domino codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of dot columns per row.
pub const COLUMNS: usize = 8;

/// Row-end dots that are always printed (bits 0, 7, 8, 15).
pub const ANCHOR_MASK: u16 = 0x8181;

/// Mask of the six identity-carrying bits of a row, after shifting the row to bit 0.
const FREE_ROW_MASK: u8 = 0b0111_1110;

/// One of the two dot rows of a domino.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    /// Bits `0..8`, printed below the domino centre line.
    Lower,
    /// Bits `8..16`, printed above the domino centre line.
    Upper,
}

impl Row {
    pub const ALL: [Row; 2] = [Row::Lower, Row::Upper];

    #[inline]
    fn shift(self) -> u32 {
        match self {
            Row::Lower => 0,
            Row::Upper => 8,
        }
    }
}

/// A domino dot pattern.
///
/// Bit `row_offset + col` is set when the dot in column `col` (0 = left-most)
/// of that row is printed. A half-turn of the physical domino maps bit `i` to
/// bit `15 - i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DominoCode(u16);

impl DominoCode {
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Pattern seen after rotating the domino by 180 degrees.
    #[inline]
    pub const fn rotate_180(self) -> Self {
        Self(self.0.reverse_bits())
    }

    /// Orientation-independent representative: the smaller of the code and its rotation.
    #[inline]
    pub fn canonical(self) -> Self {
        self.min(self.rotate_180())
    }

    /// True when the pattern reads the same after a half-turn.
    #[inline]
    pub fn is_rotationally_symmetric(self) -> bool {
        self == self.rotate_180()
    }

    #[inline]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn row_bits(self, row: Row) -> u8 {
        (self.0 >> row.shift()) as u8
    }

    /// The six free bits of a row (columns 1..=6), column 1 in bit 0.
    #[inline]
    pub fn row_free_bits(self, row: Row) -> u8 {
        (self.row_bits(row) & FREE_ROW_MASK) >> 1
    }

    /// Whether the dot at `(row, col)` is printed. Out-of-range columns are never set.
    #[inline]
    pub fn dot(self, row: Row, col: usize) -> bool {
        col < COLUMNS && self.row_bits(row) & (1 << col) != 0
    }

    /// Two-line rendering, upper row first, `o` for a dot and `.` for a blank.
    pub fn to_ascii(self) -> String {
        let mut out = String::with_capacity(2 * COLUMNS + 1);
        for (i, row) in [Row::Upper, Row::Lower].into_iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for col in 0..COLUMNS {
                out.push(if self.dot(row, col) { 'o' } else { '.' });
            }
        }
        out
    }
}

impl From<u16> for DominoCode {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<DominoCode> for u16 {
    fn from(code: DominoCode) -> Self {
        code.0
    }
}

impl fmt::Display for DominoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Parse `0x`-prefixed hex, `0b`-prefixed binary or plain decimal.
impl std::str::FromStr for DominoCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bits = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u16::from_str_radix(hex, 16)?
        } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
            u16::from_str_radix(bin, 2)?
        } else {
            s.parse()?
        };
        Ok(Self(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_turn_moves_lower_left_to_upper_right() {
        let code = DominoCode::from_bits(1 << 1);
        let rotated = code.rotate_180();
        assert_eq!(rotated.bits(), 1 << 14);
        assert!(rotated.dot(Row::Upper, 6));
        assert_eq!(rotated.rotate_180(), code);
    }

    #[test]
    fn anchors_are_symmetric() {
        let anchors = DominoCode::from_bits(ANCHOR_MASK);
        assert!(anchors.is_rotationally_symmetric());
        assert_eq!(anchors.row_free_bits(Row::Lower), 0);
        assert_eq!(anchors.row_free_bits(Row::Upper), 0);
    }

    #[test]
    fn canonical_is_shared_by_both_orientations() {
        let code = DominoCode::from_bits(ANCHOR_MASK | 0b0000_0000_0001_1110);
        assert_eq!(code.canonical(), code.rotate_180().canonical());
        assert!(code.canonical() <= code);
    }

    #[test]
    fn free_bits_skip_anchor_columns() {
        let code = DominoCode::from_bits(ANCHOR_MASK | (0b10_0001 << 9) | (0b00_0110 << 1));
        assert_eq!(code.row_free_bits(Row::Upper), 0b10_0001);
        assert_eq!(code.row_free_bits(Row::Lower), 0b00_0110);
        assert_eq!(code.popcount(), 8);
    }

    #[test]
    fn ascii_prints_upper_row_first() {
        let code = DominoCode::from_bits(ANCHOR_MASK | (1 << 9) | (1 << 2));
        assert_eq!(code.to_ascii(), "oo.....o\no.o....o");
    }

    #[test]
    fn parses_hex_binary_and_decimal() {
        assert_eq!("0x8181".parse::<DominoCode>().unwrap().bits(), 0x8181);
        assert_eq!("0b101".parse::<DominoCode>().unwrap().bits(), 5);
        assert_eq!(" 42 ".parse::<DominoCode>().unwrap().bits(), 42);
        assert!("0xZZ".parse::<DominoCode>().is_err());
        assert_eq!(DominoCode::from_bits(0x81).to_string(), "0x0081");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&DominoCode::from_bits(0x8181)).unwrap();
        assert_eq!(json, "33153");
    }
}
