use serde::{Deserialize, Serialize};

pub const MSG_COMPLETE: &str = "Processing complete!";
pub const MSG_EMPTY_INPUT: &str = "One or both CSV files are empty.";
pub const MSG_NO_MATCHES: &str =
    "No matching data found. Please check your CSV column names and content.";
pub const MSG_FAILED: &str = "Processing failed.";

// Default output locations and file names
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";
pub const DEFAULT_URL_PREFIX: &str = "/downloads";
pub const DEFAULT_VALID_NAME: &str = "valid_emails.csv";
pub const DEFAULT_INVALID_NAME: &str = "invalid_emails.csv";
pub const DEFAULT_RISKY_NAME: &str = "risky_emails.csv";
pub const DEFAULT_MAPPED_NAME: &str = "mapped_emails.csv";
pub const DEFAULT_HASHED_NAME: &str = "hashed_emails.csv";

/// A file made available to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub name: String,
    pub url: String,
}

impl Download {
    pub fn new(url_prefix: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: download_url(url_prefix, name),
        }
    }
}

/// Result object handed back to whoever triggered the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub message: String,
    pub downloads: Vec<Download>,
}

impl RunReport {
    pub fn complete(downloads: Vec<Download>) -> Self {
        Self {
            message: MSG_COMPLETE.to_string(),
            downloads,
        }
    }

    pub fn empty_input() -> Self {
        Self::message_only(MSG_EMPTY_INPUT)
    }

    pub fn no_matches() -> Self {
        Self::message_only(MSG_NO_MATCHES)
    }

    pub fn failed() -> Self {
        Self::message_only(MSG_FAILED)
    }

    fn message_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            downloads: Vec::new(),
        }
    }
}

/// `"/downloads"` + `"a.csv"` → `"/downloads/a.csv"`.
pub fn download_url(prefix: &str, name: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), name)
}
