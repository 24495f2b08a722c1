use beauty_core::{BeautyError, ErrorInfo};

use crate::report::CountReport;

/// Serializes a count report to pretty JSON.
pub fn to_json(report: &CountReport) -> Result<String, BeautyError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| BeautyError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a count report from JSON and checks its canonical hash.
pub fn from_json(json: &str) -> Result<CountReport, BeautyError> {
    let report: CountReport = serde_json::from_str(json)
        .map_err(|err| BeautyError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    report.verify_hash()?;
    Ok(report)
}
