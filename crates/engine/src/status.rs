use crate::model::Category;

/// Status detail → category. Matching is exact and case-sensitive.
pub const STATUS_TABLE: &[(&str, Category)] = &[
    ("Valid", Category::Valid),
    ("Address Invalid", Category::Invalid),
    ("Domain Invalid", Category::Invalid),
    ("Account Invalid", Category::Invalid),
    ("Mailbox Full", Category::Invalid),
    ("Accept-All", Category::Invalid),
    ("Role Address", Category::Risky),
    ("Disposable", Category::Invalid),
    ("Unknown", Category::Risky),
];

/// Trailing segment of a status string after the last ':', trimmed.
///
/// `"Result: Valid"` → `"Valid"`, `"Valid"` → `"Valid"`,
/// `"a: b: Mailbox Full"` → `"Mailbox Full"`.
pub fn status_detail(status: &str) -> &str {
    status.rsplit(':').next().unwrap_or(status).trim()
}

pub fn category_for_detail(detail: &str) -> Option<Category> {
    STATUS_TABLE
        .iter()
        .find(|(known, _)| *known == detail)
        .map(|(_, category)| *category)
}

pub fn classify_status(status: &str) -> Option<Category> {
    category_for_detail(status_detail(status))
}
