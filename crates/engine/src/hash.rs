use sha2::{Digest, Sha256};

use crate::error::SplitError;
use crate::model::Table;

/// Accepted email column names, in no particular priority: the first one
/// found in header order is used.
pub const EMAIL_COLUMNS: [&str; 4] = ["Email", "PreferredEmail", "EMAILS", "email"];

pub const HASHED_EMAIL_COLUMN: &str = "HashedEmail";

/// SHA-256 of the trimmed, lowercased value → 64 lowercase hex chars. Unsalted.
pub fn hash_email(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{:x}", digest)
}

/// Index of the first header that is an accepted email column.
pub fn email_column(table: &Table) -> Option<usize> {
    table
        .headers
        .iter()
        .position(|h| EMAIL_COLUMNS.contains(&h.as_str()))
}

/// Copy of `table` with a `HashedEmail` column.
///
/// Original columns and row order are kept. Short rows are padded so the
/// digest lands under its header; a missing email cell hashes as "". If the
/// input already has a `HashedEmail` column it is overwritten in place.
pub fn hash_table(table: &Table) -> Result<Table, SplitError> {
    let email_idx = email_column(table).ok_or_else(|| SplitError::EmailColumnMissing {
        expected: EMAIL_COLUMNS.iter().map(|c| c.to_string()).collect(),
    })?;

    let mut headers = table.headers.clone();
    let hash_idx = match table.column(HASHED_EMAIL_COLUMN) {
        Some(idx) => idx,
        None => {
            headers.push(HASHED_EMAIL_COLUMN.to_string());
            headers.len() - 1
        }
    };
    let width = headers.len();

    let mut out = Table::new(headers);
    for row in &table.rows {
        let email = row.get(email_idx).map(String::as_str).unwrap_or("");
        let digest = hash_email(email);

        let mut values = row.clone();
        if values.len() < width {
            values.resize(width, String::new());
        }
        values[hash_idx] = digest;
        out.push_row(values);
    }

    Ok(out)
}
