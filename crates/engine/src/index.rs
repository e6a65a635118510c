use std::collections::HashMap;

use tracing::warn;

use crate::model::Table;

pub const CONTACT_EMAIL_COLUMN: &str = "PreferredEmail";
pub const CONTACT_ID_COLUMN: &str = "VANID";

/// Trim surrounding whitespace and lowercase. Applied to both join sides.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized email → VANID, built once per run from the contacts roster.
#[derive(Debug, Clone, Default)]
pub struct EmailIndex {
    by_email: HashMap<String, String>,
    duplicates: usize,
}

impl EmailIndex {
    /// Index every contact row. A later row with the same normalized email
    /// replaces the earlier VANID.
    pub fn build(contacts: &Table) -> Self {
        let mut index = Self::default();
        for record in contacts.records() {
            let email = record.get(CONTACT_EMAIL_COLUMN).unwrap_or("");
            let vanid = record.get(CONTACT_ID_COLUMN).unwrap_or("");
            index.insert(email, vanid);
        }

        index
    }

    /// Insert one mapping. Returns the VANID it replaced, if any.
    /// Emails that normalize to empty are ignored.
    pub fn insert(&mut self, email: &str, vanid: &str) -> Option<String> {
        let key = normalize_email(email);
        if key.is_empty() {
            return None;
        }

        let previous = self.by_email.insert(key.clone(), vanid.to_string());
        if let Some(ref old) = previous {
            self.duplicates += 1;
            warn!(
                email = %key,
                old_vanid = %old,
                new_vanid = %vanid,
                "duplicate contact email, keeping last VANID"
            );
        }
        previous
    }

    /// VANID for an already-normalized email. An empty VANID counts as absent.
    pub fn lookup(&self, normalized_email: &str) -> Option<&str> {
        self.by_email
            .get(normalized_email)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    /// How many inserts overwrote an existing email.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}
