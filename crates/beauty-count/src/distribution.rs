use beauty_core::{Base, BeautyError, ErrorInfo};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

/// Distribution of digit sums over all digit sequences of a fixed length.
///
/// Entry `s` holds the number of length-`h` sequences over `[0, B-1]` whose
/// digit values add up to exactly `s`, for `s` in `0..=h * (B - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumDistribution {
    base: Base,
    half_length: u32,
    counts: Vec<BigUint>,
}

impl SumDistribution {
    /// Distribution of a single digit: every value `0..B` occurs once.
    pub fn single_digit(base: Base) -> Self {
        Self {
            base,
            half_length: 1,
            counts: vec![BigUint::one(); base.get() as usize],
        }
    }

    /// Builds the distribution for `half_length` digits from the single digit case.
    pub fn for_half_length(base: Base, half_length: u32) -> Result<Self, BeautyError> {
        if half_length == 0 {
            let info = ErrorInfo::new(
                "half-length-zero",
                "sum distribution requires at least one digit",
            )
            .with_context("half_length", "0");
            return Err(BeautyError::InvalidParameter(info));
        }
        Ok(Self::grown(base, half_length))
    }

    /// Steps from the single digit case up to `half_length` digits; zero is treated as one.
    pub(crate) fn grown(base: Base, half_length: u32) -> Self {
        let mut distribution = Self::single_digit(base);
        for _ in 1..half_length {
            distribution = distribution.step();
        }
        distribution
    }

    /// Appends one digit position.
    ///
    /// Convolves the counts with `B` ones: `next[k] = sum(old[k - i])` for
    /// `i` in `0..B`, where indices outside `old` read as zero. Evaluated as a
    /// sliding window so each step costs one add and one subtract per entry.
    pub fn step(&self) -> Self {
        let width = self.base.get() as usize;
        let next_len = self.counts.len() + width - 1;
        trace!(
            base = self.base.get(),
            half_length = self.half_length + 1,
            entries = next_len,
            "extending sum distribution"
        );

        let mut next = Vec::with_capacity(next_len);
        let mut window = BigUint::zero();
        for k in 0..next_len {
            if let Some(entering) = self.counts.get(k) {
                window += entering;
            }
            if let Some(leaving) = k.checked_sub(width).and_then(|idx| self.counts.get(idx)) {
                window -= leaving;
            }
            next.push(window.clone());
        }

        Self {
            base: self.base,
            half_length: self.half_length + 1,
            counts: next,
        }
    }

    /// Base whose digits are being summed.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Number of digits per sequence.
    pub fn half_length(&self) -> u32 {
        self.half_length
    }

    /// Number of achievable sums, `h * (B - 1) + 1`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no entries; never true for a built distribution.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Largest achievable digit sum.
    pub fn max_sum(&self) -> usize {
        self.counts.len() - 1
    }

    /// Count for the digit sum `sum`, if achievable.
    pub fn get(&self, sum: usize) -> Option<&BigUint> {
        self.counts.get(sum)
    }

    /// Counts ordered by digit sum.
    pub fn counts(&self) -> &[BigUint] {
        &self.counts
    }

    /// Total number of sequences; equals `B^h`.
    pub fn total(&self) -> BigUint {
        self.counts.iter().sum()
    }

    /// Number of sequence pairs sharing a digit sum.
    pub fn sum_of_squares(&self) -> BigUint {
        self.counts.iter().map(|count| count * count).sum()
    }

    /// Whether `dist[s] == dist[max_sum - s]` for every `s`.
    pub fn is_palindromic(&self) -> bool {
        self.counts
            .iter()
            .zip(self.counts.iter().rev())
            .all(|(front, back)| front == back)
    }
}
