//! Rejection-sampling code generator.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::code::DominoCode;
use crate::constraints::{CodeConstraints, Rejection};
use crate::error::CodeError;
use crate::registry::CodeRegistry;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Default cap on samples drawn for one batch.
pub const DEFAULT_MAX_DRAWS: u64 = 1_000_000;

/// Counters from the most recent [`CodeGenerator::generate`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub draws: u64,
    pub accepted: usize,
    pub degenerate_row: u64,
    pub popcount: u64,
    pub symmetric: u64,
    pub duplicate: u64,
}

impl GenerationStats {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::DegenerateRow => self.degenerate_row += 1,
            Rejection::Popcount => self.popcount += 1,
            Rejection::Symmetric => self.symmetric += 1,
            Rejection::Duplicate => self.duplicate += 1,
        }
    }
}

/// Draws uniform 16-bit samples and keeps those that pass the constraints
/// and are not yet in the registry.
#[derive(Clone, Debug)]
pub struct CodeGenerator<R> {
    rng: R,
    constraints: CodeConstraints,
    max_draws: u64,
    stats: GenerationStats,
}

impl CodeGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same codes.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), CodeConstraints::default())
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), CodeConstraints::default())
    }
}

impl<R: Rng> CodeGenerator<R> {
    pub fn new(rng: R, constraints: CodeConstraints) -> Self {
        Self {
            rng,
            constraints,
            max_draws: DEFAULT_MAX_DRAWS,
            stats: GenerationStats::default(),
        }
    }

    pub fn with_max_draws(mut self, max_draws: u64) -> Self {
        self.max_draws = max_draws;
        self
    }

    #[inline]
    pub fn constraints(&self) -> &CodeConstraints {
        &self.constraints
    }

    #[inline]
    pub fn last_stats(&self) -> GenerationStats {
        self.stats
    }

    /// Draw one sample and classify it against the constraints and the registry.
    fn draw(&mut self, registry: &CodeRegistry) -> Result<DominoCode, Rejection> {
        let code = self.constraints.normalize(self.rng.gen::<u16>());
        self.constraints.validate(code)?;
        if registry.contains(code) {
            return Err(Rejection::Duplicate);
        }
        Ok(code)
    }

    /// Generate `count` new codes, registering each one.
    ///
    /// Codes are returned in draw order and in the orientation they were drawn.
    /// Fails up front when the registry does not leave room for `count` codes,
    /// or when the constraints fail [`CodeConstraints::check`].
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "debug", skip(self, registry), fields(issued = registry.len()))
    )]
    pub fn generate(
        &mut self,
        count: usize,
        registry: &mut CodeRegistry,
    ) -> Result<Vec<DominoCode>, CodeError> {
        self.constraints.check()?;
        let available = registry.remaining(&self.constraints);
        if count > available {
            return Err(CodeError::Exhausted {
                requested: count,
                available,
            });
        }

        self.stats = GenerationStats::default();
        let mut codes = Vec::with_capacity(count);
        while codes.len() < count {
            if self.stats.draws >= self.max_draws {
                return Err(CodeError::DrawLimit {
                    draws: self.stats.draws,
                    accepted: codes.len(),
                    requested: count,
                });
            }
            self.stats.draws += 1;
            match self.draw(registry) {
                Ok(code) => {
                    registry.insert(code);
                    codes.push(code);
                }
                Err(rejection) => self.stats.record(rejection),
            }
        }
        self.stats.accepted = codes.len();

        debug!(
            "generated {} codes in {} draws (rejected: {} degenerate, {} popcount, {} symmetric, {} duplicate)",
            self.stats.accepted,
            self.stats.draws,
            self.stats.degenerate_row,
            self.stats.popcount,
            self.stats.symmetric,
            self.stats.duplicate
        );
        Ok(codes)
    }
}
