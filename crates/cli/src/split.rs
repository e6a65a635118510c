//! `vansplit split`: join a validation report to contacts and split by status.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use vansplit_io::{split_uploads, OutputNames, SplitOptions};

use crate::util::{
    emit_report, fail, is_stdin, load_settings, print_failed_report, upload_from_arg,
};
use crate::CliError;

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Email validation report (EMAILS, STATUS columns). `-` reads stdin
    #[arg(long, short = 'v')]
    pub validation: Option<PathBuf>,

    /// Contacts export (VANID, PreferredEmail columns). `-` reads stdin
    #[arg(long, short = 'c')]
    pub contacts: Option<PathBuf>,

    /// Declared content type of the validation file (default: by extension)
    #[arg(long)]
    pub validation_type: Option<String>,

    /// Declared content type of the contacts file (default: by extension)
    #[arg(long)]
    pub contacts_type: Option<String>,

    /// Directory to write output files to
    #[arg(long, env = "VANSPLIT_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Prefix for download URLs in the report
    #[arg(long)]
    pub url_prefix: Option<String>,

    /// File name for VALID rows
    #[arg(long)]
    pub valid_name: Option<String>,

    /// File name for INVALID rows
    #[arg(long)]
    pub invalid_name: Option<String>,

    /// File name for RISKY rows
    #[arg(long)]
    pub risky_name: Option<String>,

    /// Skip the combined mapped file
    #[arg(long)]
    pub no_mapped: bool,

    /// Output the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_split(args: SplitArgs, config: Option<PathBuf>) -> Result<(), CliError> {
    let both_stdin = matches!(
        (&args.validation, &args.contacts),
        (Some(v), Some(c)) if is_stdin(v) && is_stdin(c)
    );
    if both_stdin {
        print_failed_report(args.json);
        return Err(CliError::args("only one input can be read from stdin"));
    }

    let settings = load_settings(config.as_deref()).map_err(|e| {
        print_failed_report(args.json);
        e
    })?;
    let options = SplitOptions {
        out_dir: args.out_dir.unwrap_or(settings.output_dir),
        url_prefix: args.url_prefix.unwrap_or(settings.download_url_prefix),
        names: OutputNames {
            valid: args.valid_name.unwrap_or(settings.names.valid),
            invalid: args.invalid_name.unwrap_or(settings.names.invalid),
            risky: args.risky_name.unwrap_or(settings.names.risky),
            mapped: settings.names.mapped,
        },
        write_mapped: settings.write_mapped && !args.no_mapped,
    };
    debug!(out_dir = %options.out_dir.display(), write_mapped = options.write_mapped, "split options");

    let validation = upload_from_arg(args.validation, args.validation_type, "validation.csv");
    let contacts = upload_from_arg(args.contacts, args.contacts_type, "contacts.csv");

    let report = split_uploads(validation.as_ref(), contacts.as_ref(), &options)
        .map_err(|e| fail(e, args.json))?;
    emit_report(&report, &options.out_dir, args.json)
}
