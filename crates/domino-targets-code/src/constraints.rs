//! Validity rules for printable domino codes.

use serde::{Deserialize, Serialize};

use crate::code::{DominoCode, Row, ANCHOR_MASK};
use crate::error::CodeError;

const FULL_FREE_ROW: u8 = 0b11_1111;

fn default_required_mask() -> u16 {
    ANCHOR_MASK
}

fn default_popcount() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// Why a candidate code was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// A row's free columns are all blank or all dotted.
    DegenerateRow,
    /// Wrong number of dots.
    Popcount,
    /// Reads the same after a half-turn.
    Symmetric,
    /// Already issued, possibly in the other orientation.
    Duplicate,
}

/// Constraints a generated code must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConstraints {
    /// Bits forced on before validation.
    #[serde(default = "default_required_mask")]
    pub required_mask: u16,
    /// Exact number of printed dots, anchors included.
    #[serde(default = "default_popcount")]
    pub popcount: u32,
    #[serde(default = "default_true")]
    pub reject_symmetric: bool,
    #[serde(default = "default_true")]
    pub reject_degenerate_rows: bool,
}

impl Default for CodeConstraints {
    fn default() -> Self {
        Self {
            required_mask: default_required_mask(),
            popcount: default_popcount(),
            reject_symmetric: true,
            reject_degenerate_rows: true,
        }
    }
}

impl CodeConstraints {
    /// Reject constraint sets the rotation-orbit bookkeeping cannot support.
    ///
    /// Enumeration and the registry keep one canonical code per half-turn
    /// pair, so the required bits must be the same in both orientations.
    pub fn check(&self) -> Result<(), CodeError> {
        let rotated = self.required_mask.reverse_bits();
        if rotated != self.required_mask {
            return Err(CodeError::AsymmetricMask {
                mask: self.required_mask,
                rotated,
            });
        }
        Ok(())
    }

    /// Force the required bits on.
    #[inline]
    pub fn normalize(&self, raw: u16) -> DominoCode {
        DominoCode::from_bits(raw | self.required_mask)
    }

    /// Check a code, reporting the first violated rule.
    ///
    /// Rules are checked in order: degenerate rows, popcount, symmetry.
    pub fn validate(&self, code: DominoCode) -> Result<(), Rejection> {
        if self.reject_degenerate_rows
            && Row::ALL.iter().any(|&row| {
                let free = code.row_free_bits(row);
                free == 0 || free == FULL_FREE_ROW
            })
        {
            return Err(Rejection::DegenerateRow);
        }
        if code.popcount() != self.popcount {
            return Err(Rejection::Popcount);
        }
        if self.reject_symmetric && code.is_rotationally_symmetric() {
            return Err(Rejection::Symmetric);
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self, code: DominoCode) -> bool {
        self.validate(code).is_ok()
    }
}
