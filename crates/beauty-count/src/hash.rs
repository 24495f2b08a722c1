use sha2::{Digest, Sha256};

use crate::report::CountReport;

fn update_decimal(hasher: &mut Sha256, digits: &str) {
    hasher.update((digits.len() as u64).to_le_bytes());
    hasher.update(digits.as_bytes());
}

/// Computes the canonical content hash for a count report.
///
/// Covers every field except `report_hash` itself.
pub fn canonical_report_hash(report: &CountReport) -> String {
    let mut hasher = Sha256::new();
    let version = report.schema_version;
    hasher.update((version.major as u64).to_le_bytes());
    hasher.update((version.minor as u64).to_le_bytes());
    hasher.update((version.patch as u64).to_le_bytes());
    hasher.update((report.base.get() as u64).to_le_bytes());
    hasher.update((report.length.get() as u64).to_le_bytes());
    hasher.update((report.half_length as u64).to_le_bytes());
    hasher.update([u8::from(report.middle_digit)]);
    update_decimal(&mut hasher, &report.half_pairs);
    update_decimal(&mut hasher, &report.count);
    hasher.update((report.distribution_len as u64).to_le_bytes());

    match &report.distribution {
        Some(entries) => {
            hasher.update([1u8]);
            for entry in entries {
                update_decimal(&mut hasher, entry);
            }
        }
        None => hasher.update([0u8]),
    }

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
