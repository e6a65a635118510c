// Partition writer: turns split results into downloadable CSV files

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::info;
use vansplit_engine::report::{
    Download, DEFAULT_INVALID_NAME, DEFAULT_MAPPED_NAME, DEFAULT_RISKY_NAME, DEFAULT_VALID_NAME,
};
use vansplit_engine::{Category, SplitError, SplitResult, Table};

use crate::csv::{render_rows, render_table};

/// File names for the split outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub valid: String,
    pub invalid: String,
    pub risky: String,
    pub mapped: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            valid: DEFAULT_VALID_NAME.into(),
            invalid: DEFAULT_INVALID_NAME.into(),
            risky: DEFAULT_RISKY_NAME.into(),
            mapped: DEFAULT_MAPPED_NAME.into(),
        }
    }
}

impl OutputNames {
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Valid => &self.valid,
            Category::Invalid => &self.invalid,
            Category::Risky => &self.risky,
        }
    }

    /// Every file a run writes needs a plain, distinct name. The mapped name
    /// only counts when the mapped file is written. Comparison ignores case.
    pub fn validate(&self, write_mapped: bool) -> Result<(), SplitError> {
        let mut names = vec![&self.valid, &self.invalid, &self.risky];
        if write_mapped {
            names.push(&self.mapped);
        }

        let mut seen = HashSet::new();
        for name in names {
            validate_output_name(name)?;
            if !seen.insert(name.to_lowercase()) {
                return Err(SplitError::InvalidOutputName(name.clone()));
            }
        }
        Ok(())
    }
}

/// Output names must be plain file names: no directories, no `.`/`..`.
pub fn validate_output_name(name: &str) -> Result<(), SplitError> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if bad {
        return Err(SplitError::InvalidOutputName(name.to_string()));
    }
    Ok(())
}

/// Writes files into one output directory and describes them as downloads.
#[derive(Debug, Clone)]
pub struct PartitionWriter {
    out_dir: PathBuf,
    url_prefix: String,
}

impl PartitionWriter {
    pub fn new(out_dir: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// Write the mapped file (optional) then one file per non-empty
    /// partition in VALID, INVALID, RISKY order.
    ///
    /// Everything is rendered before the first file touches disk, so a
    /// serialization problem leaves no output behind.
    pub fn write_split(
        &self,
        result: &SplitResult,
        names: &OutputNames,
        write_mapped: bool,
    ) -> Result<Vec<Download>, SplitError> {
        names.validate(write_mapped)?;
        let mut files: Vec<(&str, Vec<u8>)> = Vec::new();

        if write_mapped {
            let bytes = render_rows(&result.joined)
                .map_err(|e| SplitError::write(names.mapped.as_str(), e))?;
            files.push((names.mapped.as_str(), bytes));
        }

        for (category, rows) in result.partitions.iter() {
            if rows.is_empty() {
                continue;
            }
            let name = names.for_category(category);
            let bytes = render_rows(rows).map_err(|e| SplitError::write(name, e))?;
            files.push((name, bytes));
        }

        files
            .into_iter()
            .map(|(name, bytes)| self.persist(name, &bytes))
            .collect()
    }

    /// Write a hashed table under `name`.
    pub fn write_table(&self, table: &Table, name: &str) -> Result<Download, SplitError> {
        let bytes = render_table(table).map_err(|e| SplitError::write(name, e))?;
        self.persist(name, &bytes)
    }

    fn persist(&self, name: &str, bytes: &[u8]) -> Result<Download, SplitError> {
        validate_output_name(name)?;
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| SplitError::write(self.out_dir.display().to_string(), e))?;

        let path = self.out_dir.join(name);
        fs::write(&path, bytes).map_err(|e| SplitError::write(path.display().to_string(), e))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote output file");

        Ok(Download::new(&self.url_prefix, name))
    }
}
