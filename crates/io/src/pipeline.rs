// Load → split → write, shared by every front end

use std::path::PathBuf;

use tracing::info;
use vansplit_engine::hash::hash_table;
use vansplit_engine::report::{RunReport, DEFAULT_HASHED_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_URL_PREFIX};
use vansplit_engine::{SplitError, SplitOutcome};

use crate::csv::load_table;
use crate::upload::{StagedUpload, Upload};
use crate::writer::{validate_output_name, OutputNames, PartitionWriter};

#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub out_dir: PathBuf,
    pub url_prefix: String,
    pub names: OutputNames,
    /// Also write the combined file with every joined row.
    pub write_mapped: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            url_prefix: DEFAULT_URL_PREFIX.into(),
            names: OutputNames::default(),
            write_mapped: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HashOptions {
    pub out_dir: PathBuf,
    pub url_prefix: String,
    pub output_name: String,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            url_prefix: DEFAULT_URL_PREFIX.into(),
            output_name: DEFAULT_HASHED_NAME.into(),
        }
    }
}

/// Run one split request end to end.
///
/// Missing uploads are reported before anything is read. Non-CSV uploads
/// are rejected before the core sees them. Staged copies are removed when
/// this returns, on success and on error alike. Empty input and "no
/// matches" are reports, not errors.
pub fn split_uploads(
    validation: Option<&Upload>,
    contacts: Option<&Upload>,
    options: &SplitOptions,
) -> Result<RunReport, SplitError> {
    let (validation, contacts) = match (validation, contacts) {
        (Some(v), Some(c)) => (v, c),
        (None, Some(_)) => return Err(SplitError::InputMissing("validation file".into())),
        (Some(_), None) => return Err(SplitError::InputMissing("contacts file".into())),
        (None, None) => {
            return Err(SplitError::InputMissing("validation and contacts files".into()))
        }
    };
    options.names.validate(options.write_mapped)?;

    let staged_validation = StagedUpload::stage(validation)?;
    let staged_contacts = StagedUpload::stage(contacts)?;

    let validation_table = load_table(staged_validation.path()).map_err(|e| rename_source(e, validation))?;
    let contacts_table = load_table(staged_contacts.path()).map_err(|e| rename_source(e, contacts))?;

    let result = match vansplit_engine::run(&validation_table, &contacts_table) {
        SplitOutcome::EmptyInput => return Ok(RunReport::empty_input()),
        SplitOutcome::NoMatches(_) => return Ok(RunReport::no_matches()),
        SplitOutcome::Split(result) => result,
    };

    let writer = PartitionWriter::new(&options.out_dir, &options.url_prefix);
    let downloads = writer.write_split(&result, &options.names, options.write_mapped)?;
    info!(files = downloads.len(), out_dir = %options.out_dir.display(), "split written");

    Ok(RunReport::complete(downloads))
}

/// Append a `HashedEmail` column to an uploaded table and write it out.
pub fn hash_upload(upload: Option<&Upload>, options: &HashOptions) -> Result<RunReport, SplitError> {
    let upload = upload.ok_or_else(|| SplitError::InputMissing("input file".into()))?;
    validate_output_name(&options.output_name)?;

    let staged = StagedUpload::stage(upload)?;
    let table = load_table(staged.path()).map_err(|e| rename_source(e, upload))?;
    let hashed = hash_table(&table)?;

    let writer = PartitionWriter::new(&options.out_dir, &options.url_prefix);
    let download = writer.write_table(&hashed, &options.output_name)?;
    info!(rows = hashed.len(), file = %download.name, "hashed emails written");

    Ok(RunReport::complete(vec![download]))
}

/// Parse errors name the staged temp file; report the upload name instead.
fn rename_source(err: SplitError, upload: &Upload) -> SplitError {
    match err {
        SplitError::Parse { message, .. } => SplitError::Parse {
            source: upload.name.clone(),
            message,
        },
        other => other,
    }
}
