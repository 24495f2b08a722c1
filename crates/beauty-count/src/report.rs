use beauty_core::{Base, BeautyError, ErrorInfo, NumberLength, SchemaVersion};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::distribution::SumDistribution;
use crate::hash::canonical_report_hash;
use crate::options::CountOptions;

/// Structured summary of a single count.
///
/// Big integers are stored as decimal strings so the JSON form stays exact
/// for consumers without arbitrary precision support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// Schema version of the payload.
    pub schema_version: SchemaVersion,
    /// Base of the counted numerals.
    pub base: Base,
    /// Digit count of the counted numerals.
    pub length: NumberLength,
    /// Digits per half.
    pub half_length: u32,
    /// Whether a free middle digit multiplied the result.
    pub middle_digit: bool,
    /// Left/right half pairs with equal sums, before the middle digit.
    pub half_pairs: String,
    /// Number of beautiful numerals.
    pub count: String,
    /// Number of achievable half sums.
    pub distribution_len: usize,
    /// Half sum distribution, present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<String>>,
    /// Canonical SHA-256 of the fields above.
    pub report_hash: String,
}

impl CountReport {
    /// Parses the decimal count.
    pub fn count_value(&self) -> Result<BigUint, BeautyError> {
        parse_decimal("count", &self.count)
    }

    /// Parses the decimal half pair count.
    pub fn half_pairs_value(&self) -> Result<BigUint, BeautyError> {
        parse_decimal("half_pairs", &self.half_pairs)
    }

    /// Recomputes the canonical hash and compares it with `report_hash`.
    pub fn verify_hash(&self) -> Result<(), BeautyError> {
        let expected = canonical_report_hash(self);
        if expected != self.report_hash {
            let info = ErrorInfo::new("hash-mismatch", "report hash does not match its content")
                .with_context("expected", expected)
                .with_context("found", self.report_hash.clone());
            return Err(BeautyError::Serde(info));
        }
        Ok(())
    }
}

fn parse_decimal(field: &str, digits: &str) -> Result<BigUint, BeautyError> {
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
        BeautyError::Serde(
            ErrorInfo::new("invalid-decimal", "report field is not a decimal integer")
                .with_context("field", field),
        )
    })
}

pub(crate) fn assemble(
    base: Base,
    length: NumberLength,
    distribution: &SumDistribution,
    half_pairs: &BigUint,
    count: &BigUint,
    opts: &CountOptions,
) -> CountReport {
    let embedded = opts.include_distribution.then(|| {
        distribution
            .counts()
            .iter()
            .map(BigUint::to_string)
            .collect()
    });
    let mut report = CountReport {
        schema_version: opts.schema_version,
        base,
        length,
        half_length: length.half_length(),
        middle_digit: length.has_middle_digit(),
        half_pairs: half_pairs.to_string(),
        count: count.to_string(),
        distribution_len: distribution.len(),
        distribution: embedded,
        report_hash: String::new(),
    };
    report.report_hash = canonical_report_hash(&report);
    report
}
