use crate::index::{normalize_email, EmailIndex};
use crate::model::{JoinedRecord, Partitions, SplitSummary, Table};
use crate::status::classify_status;

pub const VALIDATION_EMAIL_COLUMN: &str = "EMAILS";
pub const VALIDATION_STATUS_COLUMN: &str = "STATUS";

/// Join validation rows against the contact index.
///
/// A row is kept only when its status detail maps to a category AND its
/// normalized email has a VANID. Everything else is dropped and counted in
/// `summary`. Input order is preserved.
pub fn join_validation(
    validation: &Table,
    index: &EmailIndex,
    summary: &mut SplitSummary,
) -> Vec<JoinedRecord> {
    let mut joined = Vec::new();

    for record in validation.records() {
        let raw_email = record.get(VALIDATION_EMAIL_COLUMN).unwrap_or("");
        let status = record.get(VALIDATION_STATUS_COLUMN).unwrap_or("");

        let email = normalize_email(raw_email);
        let category = classify_status(status);
        let vanid = index.lookup(&email);

        match (vanid, category) {
            (Some(vanid), Some(category)) => joined.push(JoinedRecord {
                vanid: vanid.to_string(),
                email,
                status: status.to_string(),
                category,
            }),
            (_, None) => summary.unknown_status += 1,
            (None, Some(_)) => summary.unmatched_email += 1,
        }
    }

    joined
}

/// Split joined rows into category buckets, dropping the category column.
pub fn partition(joined: &[JoinedRecord]) -> Partitions {
    let mut partitions = Partitions::default();
    for record in joined {
        partitions.push(record.category, record.to_output());
    }
    partitions
}
