use tracing::{debug, info, warn};

use crate::classify::{join_validation, partition, VALIDATION_EMAIL_COLUMN, VALIDATION_STATUS_COLUMN};
use crate::index::{EmailIndex, CONTACT_EMAIL_COLUMN, CONTACT_ID_COLUMN};
use crate::model::{SplitOutcome, SplitResult, SplitSummary, Table};

/// Join validation rows to contacts and split them by category.
///
/// Pure: no IO, same input always gives the same outcome.
pub fn run(validation: &Table, contacts: &Table) -> SplitOutcome {
    if validation.is_empty() || contacts.is_empty() {
        info!(
            validation_rows = validation.len(),
            contact_rows = contacts.len(),
            "empty input, nothing to split"
        );
        return SplitOutcome::EmptyInput;
    }

    warn_missing_columns("validation", validation, &[VALIDATION_EMAIL_COLUMN, VALIDATION_STATUS_COLUMN]);
    warn_missing_columns("contacts", contacts, &[CONTACT_EMAIL_COLUMN, CONTACT_ID_COLUMN]);

    let index = EmailIndex::build(contacts);

    let mut summary = SplitSummary {
        validation_rows: validation.len(),
        contact_rows: contacts.len(),
        indexed_emails: index.len(),
        duplicate_emails: index.duplicates(),
        ..SplitSummary::default()
    };

    let joined = join_validation(validation, &index, &mut summary);
    debug!(
        unknown_status = summary.unknown_status,
        unmatched_email = summary.unmatched_email,
        "dropped validation rows"
    );

    if joined.is_empty() {
        info!(validation_rows = summary.validation_rows, "no validation row matched a contact");
        return SplitOutcome::NoMatches(summary);
    }

    let partitions = partition(&joined);
    summary.valid = partitions.valid.len();
    summary.invalid = partitions.invalid.len();
    summary.risky = partitions.risky.len();

    info!(
        valid = summary.valid,
        invalid = summary.invalid,
        risky = summary.risky,
        "split complete"
    );

    SplitOutcome::Split(SplitResult {
        joined,
        partitions,
        summary,
    })
}

fn warn_missing_columns(input: &str, table: &Table, expected: &[&str]) {
    for column in expected {
        if table.column(column).is_none() {
            warn!(input, column, "expected column not found in header");
        }
    }
}
