//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                                   |
//! |---------|-----------|-----------------------------------------------|
//! | 0       | Universal | Success (including empty / no-match reports)  |
//! | 1       | Universal | General error (unspecified)                   |
//! | 2       | Universal | CLI usage error (missing input, bad name)     |
//! | 3-5     | split     | Parse, write and upload failures              |
//! | 6       | hash      | No email column                               |
//! | 7       | config    | Settings file unreadable or malformed         |

use vansplit_engine::SplitError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success. "One or both files are empty" and "no matching data" are
/// reports, not failures, and also exit 0.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - missing input file, invalid output name, bad arguments.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Split (3-5)
// =============================================================================

/// An input file could not be read or parsed. Nothing was written.
pub const EXIT_PARSE: u8 = 3;

/// An output file could not be written.
pub const EXIT_WRITE: u8 = 4;

/// Upload rejected: not declared as CSV.
pub const EXIT_UPLOAD_REJECTED: u8 = 5;

// =============================================================================
// Hash (6)
// =============================================================================

/// None of the accepted email columns is present.
pub const EXIT_HASH_NO_EMAIL: u8 = 6;

// =============================================================================
// Config (7)
// =============================================================================

/// Settings file exists but cannot be read or parsed.
pub const EXIT_CONFIG: u8 = 7;

/// Map a SplitError to its exit code.
pub fn split_exit_code(err: &SplitError) -> u8 {
    match err {
        SplitError::InputMissing(_) | SplitError::InvalidOutputName(_) => EXIT_USAGE,
        SplitError::Parse { .. } => EXIT_PARSE,
        SplitError::Write { .. } => EXIT_WRITE,
        SplitError::UnsupportedUpload { .. } => EXIT_UPLOAD_REJECTED,
        SplitError::EmailColumnMissing { .. } => EXIT_HASH_NO_EMAIL,
    }
}
