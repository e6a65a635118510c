use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A header-delimited table as produced by the loader.
///
/// Rows keep whatever width they were read with: a short row simply has no
/// value for its trailing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header named `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            headers: &self.headers,
            values,
        })
    }
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Cell value for `column`, or `None` when the column is unknown or the
    /// row is too short to hold it.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.values.get(idx).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Valid,
    Invalid,
    Risky,
}

impl Category {
    /// Output order of the partitions.
    pub const ALL: [Category; 3] = [Category::Valid, Category::Invalid, Category::Risky];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Risky => "RISKY",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation row that matched a contact and a known status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedRecord {
    #[serde(rename = "VANID")]
    pub vanid: String,
    /// Normalized email.
    #[serde(rename = "EMAILS")]
    pub email: String,
    /// Original, unmodified status string.
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl JoinedRecord {
    pub fn to_output(&self) -> OutputRow {
        OutputRow {
            vanid: self.vanid.clone(),
            email: self.email.clone(),
            status: self.status.clone(),
        }
    }
}

/// Partition row. Column order is fixed: `VANID,EMAILS,STATUS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "VANID")]
    pub vanid: String,
    #[serde(rename = "EMAILS")]
    pub email: String,
    #[serde(rename = "STATUS")]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Partitions + Outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions {
    pub valid: Vec<OutputRow>,
    pub invalid: Vec<OutputRow>,
    pub risky: Vec<OutputRow>,
}

impl Partitions {
    pub fn get(&self, category: Category) -> &[OutputRow] {
        match category {
            Category::Valid => &self.valid,
            Category::Invalid => &self.invalid,
            Category::Risky => &self.risky,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Vec<OutputRow> {
        match category {
            Category::Valid => &mut self.valid,
            Category::Invalid => &mut self.invalid,
            Category::Risky => &mut self.risky,
        }
    }

    pub fn push(&mut self, category: Category, row: OutputRow) {
        self.get_mut(category).push(row);
    }

    /// Partitions in output order (VALID, INVALID, RISKY), empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[OutputRow])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len() + self.risky.len()
    }
}

/// Row counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub validation_rows: usize,
    pub contact_rows: usize,
    pub indexed_emails: usize,
    pub duplicate_emails: usize,
    /// Dropped because the status detail is not in the status table.
    pub unknown_status: usize,
    /// Dropped because the email has no contact (status was known).
    pub unmatched_email: usize,
    pub valid: usize,
    pub invalid: usize,
    pub risky: usize,
}

impl SplitSummary {
    pub fn joined(&self) -> usize {
        self.valid + self.invalid + self.risky
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResult {
    /// Every joined row in validation-input order.
    pub joined: Vec<JoinedRecord>,
    pub partitions: Partitions,
    pub summary: SplitSummary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// One or both inputs had no data rows.
    EmptyInput,
    /// Inputs had rows, but no row survived the join.
    NoMatches(SplitSummary),
    Split(SplitResult),
}
