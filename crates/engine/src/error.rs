use std::fmt;

#[derive(Debug)]
pub enum SplitError {
    /// A required upload was not supplied.
    InputMissing(String),
    /// Upload was not declared as CSV.
    UnsupportedUpload { name: String, content_type: String },
    /// Read or parse failure on an input file.
    Parse { source: String, message: String },
    /// An output file could not be persisted.
    Write { path: String, message: String },
    /// Requested output file name is not a plain file name.
    InvalidOutputName(String),
    /// Hashing input has none of the accepted email columns.
    EmailColumnMissing { expected: Vec<String> },
}

impl SplitError {
    pub fn parse(source: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source: source.into(),
            message: message.to_string(),
        }
    }

    pub fn write(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMissing(what) => write!(f, "missing input: {what}"),
            Self::UnsupportedUpload { name, content_type } => {
                write!(f, "'{name}': only CSV files allowed (got '{content_type}')")
            }
            Self::Parse { source, message } => write!(f, "cannot parse '{source}': {message}"),
            Self::Write { path, message } => write!(f, "cannot write '{path}': {message}"),
            Self::InvalidOutputName(name) => write!(f, "invalid output file name: '{name}'"),
            Self::EmailColumnMissing { expected } => write!(
                f,
                "could not find a valid email column, expected one of: {}",
                expected.join(", ")
            ),
        }
    }
}

impl std::error::Error for SplitError {}
