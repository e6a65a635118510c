//! Shared helpers for the split and hash commands.

use std::path::{Path, PathBuf};

use vansplit_config::Settings;
use vansplit_engine::report::RunReport;
use vansplit_engine::SplitError;
use vansplit_io::Upload;

use crate::CliError;

/// `-` on the command line means "read this input from stdin".
pub const STDIN_ARG: &str = "-";

/// Settings from `--config`, else the default location.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(p) => Settings::load_from(p).map_err(CliError::config),
        None => Settings::load().map_err(|e| {
            CliError::config(e).with_hint(format!(
                "fix or remove {}",
                Settings::config_path_display()
            ))
        }),
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_ARG
}

/// Build an upload from a path argument. `stdin_name` names stdin input in
/// reports; `content_type` overrides extension-based detection.
pub fn upload_from_arg(
    path: Option<PathBuf>,
    content_type: Option<String>,
    stdin_name: &str,
) -> Option<Upload> {
    let upload = match path {
        None => return None,
        Some(p) if is_stdin(&p) => Upload::from_stdin(stdin_name),
        Some(p) => Upload::from_path(p),
    };
    Some(match content_type {
        Some(ct) => upload.with_content_type(ct),
        None => upload,
    })
}

/// Print a finished run: JSON on stdout, or a short summary on stderr.
pub fn emit_report(report: &RunReport, out_dir: &Path, json: bool) -> Result<(), CliError> {
    if json {
        let out = serde_json::to_string_pretty(report)
            .map_err(|e| CliError::new(crate::exit_codes::EXIT_ERROR, format!("JSON serialization failed: {e}")))?;
        println!("{}", out);
        return Ok(());
    }

    eprintln!("{}", report.message);
    for download in &report.downloads {
        eprintln!("  {}  {}", download.name, out_dir.join(&download.name).display());
    }
    Ok(())
}

/// Hard failure: in JSON mode stdout still carries a report, then the
/// error goes to stderr with its exit code.
pub fn fail(err: SplitError, json: bool) -> CliError {
    print_failed_report(json);
    CliError::split(err)
}

pub fn print_failed_report(json: bool) {
    if json {
        if let Ok(out) = serde_json::to_string_pretty(&RunReport::failed()) {
            println!("{}", out);
        }
    }
}
