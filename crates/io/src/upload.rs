// Upload staging
//
// An upload is copied into a private temp file before the core reads it.
// The temp file is removed when the `StagedUpload` is dropped, whichever
// way the run ends.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use vansplit_engine::SplitError;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

#[derive(Debug, Clone)]
pub enum UploadSource {
    Path(PathBuf),
    Stdin,
    Bytes(Vec<u8>),
}

/// A file handed to the tool, plus what the sender claims it is.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    /// Declared MIME type. `None` means "infer from the file name".
    pub content_type: Option<String>,
    pub source: UploadSource,
}

impl Upload {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            content_type: None,
            source: UploadSource::Path(path),
        }
    }

    /// Stdin has no name to infer from, so it is declared as CSV.
    pub fn from_stdin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: Some(CSV_CONTENT_TYPE.into()),
            source: UploadSource::Stdin,
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            source: UploadSource::Bytes(bytes),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Accept only CSV: a declared `text/csv` (parameters ignored), or, when
    /// nothing is declared, a `.csv` extension.
    pub fn is_csv(&self) -> bool {
        match self.content_type.as_deref() {
            Some(declared) => {
                let mime = declared.split(';').next().unwrap_or("").trim();
                mime.eq_ignore_ascii_case(CSV_CONTENT_TYPE)
            }
            None => Path::new(&self.name)
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false),
        }
    }

    fn declared_type(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// A private copy of an accepted upload. Deleted on drop.
#[derive(Debug)]
pub struct StagedUpload {
    name: String,
    file: NamedTempFile,
}

impl StagedUpload {
    /// Reject non-CSV uploads, then copy the content into a temp file.
    pub fn stage(upload: &Upload) -> Result<Self, SplitError> {
        if !upload.is_csv() {
            return Err(SplitError::UnsupportedUpload {
                name: upload.name.clone(),
                content_type: upload.declared_type(),
            });
        }

        let io_err = |e: io::Error| SplitError::parse(upload.name.as_str(), e);
        let mut file = NamedTempFile::new().map_err(io_err)?;

        match &upload.source {
            UploadSource::Path(path) => {
                let mut src = File::open(path).map_err(io_err)?;
                io::copy(&mut src, file.as_file_mut()).map_err(io_err)?;
            }
            UploadSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf).map_err(io_err)?;
                file.write_all(&buf).map_err(io_err)?;
            }
            UploadSource::Bytes(bytes) => {
                file.write_all(bytes).map_err(io_err)?;
            }
        }
        file.flush().map_err(io_err)?;

        debug!(upload = %upload.name, staged = %file.path().display(), "staged upload");
        Ok(Self {
            name: upload.name.clone(),
            file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        debug!(upload = %self.name, staged = %self.file.path().display(), "removing staged upload");
    }
}
