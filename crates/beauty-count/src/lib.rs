#![deny(missing_docs)]
#![doc = "Counts beautiful numbers: fixed-length numerals whose two halves share a digit sum."]

/// Top-level counter and convenience entry point.
pub mod counter;
/// Digit sum distributions and their convolution step.
pub mod distribution;
/// Canonical hashing for count reports.
pub mod hash;
/// Report configuration.
pub mod options;
/// Structured count reports.
pub mod report;
/// JSON helpers for count reports.
pub mod serde;

pub use beauty_core::{Base, BeautyError, ErrorInfo, NumberLength, SchemaVersion};
pub use counter::{count_beautiful, BeautifulNumbersCounter};
pub use distribution::SumDistribution;
pub use hash::canonical_report_hash;
pub use options::CountOptions;
pub use report::CountReport;
pub use serde::{from_json, to_json};
