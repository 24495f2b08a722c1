use beauty_core::{Base, BeautyError, NumberLength};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distribution::SumDistribution;
use crate::options::CountOptions;
use crate::report::{self, CountReport};

/// Counts beautiful numbers of any length in a fixed base.
///
/// A numeral is beautiful when the digit sum of its first half equals the
/// digit sum of its second half. For odd lengths the middle digit is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeautifulNumbersCounter {
    base: Base,
}

impl BeautifulNumbersCounter {
    /// Validates `base` and creates a counter for it.
    pub fn create(base: u32) -> Result<Self, BeautyError> {
        let base = Base::new(base).map_err(|err| {
            debug!(base, error = %err, "rejected counter base");
            err
        })?;
        Ok(Self::new(base))
    }

    /// Creates a counter for an already validated base.
    pub fn new(base: Base) -> Self {
        debug!(base = base.get(), "created beautiful numbers counter");
        Self { base }
    }

    /// Base the counter was created with.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Number of beautiful numerals with exactly `length` digits.
    ///
    /// Leading zeros are allowed, so `get_count(2)` in base 10 counts
    /// `00, 11, ..., 99`.
    pub fn get_count(&self, length: u32) -> Result<BigUint, BeautyError> {
        let length = NumberLength::new(length).map_err(|err| {
            debug!(base = self.base.get(), length, error = %err, "rejected number length");
            err
        })?;
        Ok(self.count_for(length))
    }

    /// Infallible form of [`BeautifulNumbersCounter::get_count`].
    pub fn count_for(&self, length: NumberLength) -> BigUint {
        let (half_pairs, _) = self.half_pairs(length);
        self.apply_middle_digit(length, half_pairs)
    }

    /// Sum distribution for one half of `half_length` digits.
    pub fn distribution(&self, half_length: u32) -> Result<SumDistribution, BeautyError> {
        SumDistribution::for_half_length(self.base, half_length)
    }

    /// Counts numerals of `length` digits and summarizes the computation.
    pub fn report(&self, length: u32, opts: &CountOptions) -> Result<CountReport, BeautyError> {
        let length = NumberLength::new(length)?;
        let (half_pairs, distribution) = self.half_pairs(length);
        let count = self.apply_middle_digit(length, half_pairs.clone());
        Ok(report::assemble(
            self.base,
            length,
            &distribution,
            &half_pairs,
            &count,
            opts,
        ))
    }

    fn half_pairs(&self, length: NumberLength) -> (BigUint, SumDistribution) {
        let half_length = length.half_length();
        debug!(
            base = self.base.get(),
            length = length.get(),
            half_length,
            middle_digit = length.has_middle_digit(),
            "counting beautiful numbers"
        );
        let distribution = SumDistribution::grown(self.base, half_length);
        (distribution.sum_of_squares(), distribution)
    }

    fn apply_middle_digit(&self, length: NumberLength, half_pairs: BigUint) -> BigUint {
        if length.has_middle_digit() {
            half_pairs * self.base.get()
        } else {
            half_pairs
        }
    }
}

/// Counts beautiful numerals of `length` digits in `base`.
pub fn count_beautiful(base: u32, length: u32) -> Result<BigUint, BeautyError> {
    BeautifulNumbersCounter::create(base)?.get_count(length)
}
