//! Random quote selection
//!
//! Selection is uniform over the filtered candidates: with `n` candidates the
//! chosen index is `floor(u * n)` for a unit sample `u` in `[0, 1)`. There is
//! no seeding contract, so production selection is not reproducible.

use super::category::CategoryFilter;
use super::entities::QuoteRecord;
use crate::core::error::QuoteError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// OS-seeded random source used outside of tests
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Always yields the same sample; makes selection deterministic
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Records matching `filter`, in store order.
pub fn filter<'a>(quotes: &'a [QuoteRecord], filter: &CategoryFilter) -> Vec<&'a QuoteRecord> {
    quotes.iter().filter(|q| filter.matches(q)).collect()
}

/// Pick one candidate uniformly at random.
///
/// Returns [`QuoteError::NotFound`] when there are no candidates; callers
/// render that as a message rather than treating it as a failure.
pub fn pick_random<'a, T>(
    candidates: &'a [T],
    random: &mut dyn RandomSource,
) -> Result<&'a T, QuoteError> {
    if candidates.is_empty() {
        return Err(QuoteError::NotFound);
    }

    let sample = random.next_unit();
    let index = ((sample * candidates.len() as f64).floor() as usize).min(candidates.len() - 1);
    Ok(&candidates[index])
}
