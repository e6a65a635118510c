//! `vansplit hash`: append a hashed email column to a CSV.

use std::path::PathBuf;

use clap::Args;
use vansplit_io::{hash_upload, HashOptions};

use crate::util::{emit_report, fail, load_settings, print_failed_report, upload_from_arg};
use crate::CliError;

#[derive(Args, Debug)]
pub struct HashArgs {
    /// CSV with an Email, PreferredEmail, EMAILS or email column. `-` reads stdin
    pub input: Option<PathBuf>,

    /// Declared content type of the input (default: by extension)
    #[arg(long)]
    pub input_type: Option<String>,

    /// Output file name
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Directory to write the output file to
    #[arg(long, env = "VANSPLIT_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Prefix for the download URL in the report
    #[arg(long)]
    pub url_prefix: Option<String>,

    /// Output the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_hash(args: HashArgs, config: Option<PathBuf>) -> Result<(), CliError> {
    let settings = load_settings(config.as_deref()).map_err(|e| {
        print_failed_report(args.json);
        e
    })?;
    let options = HashOptions {
        out_dir: args.out_dir.unwrap_or(settings.output_dir),
        url_prefix: args.url_prefix.unwrap_or(settings.download_url_prefix),
        output_name: args.output.unwrap_or(settings.names.hashed),
    };

    let upload = upload_from_arg(args.input, args.input_type, "input.csv");
    let report = hash_upload(upload.as_ref(), &options).map_err(|e| fail(e, args.json))?;
    emit_report(&report, &options.out_dir, args.json)
}
