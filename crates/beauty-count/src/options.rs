use beauty_core::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Controls what a [`crate::CountReport`] carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Embed the half-length sum distribution in the report.
    #[serde(default)]
    pub include_distribution: bool,
    /// Schema version stamped on emitted reports.
    #[serde(default)]
    pub schema_version: SchemaVersion,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            include_distribution: false,
            schema_version: SchemaVersion::default(),
        }
    }
}

impl CountOptions {
    /// Options that embed the sum distribution.
    pub fn with_distribution() -> Self {
        Self {
            include_distribution: true,
            ..Self::default()
        }
    }
}
