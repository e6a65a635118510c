// End-to-end tests: fixture CSVs → staged uploads → split/hash → files on disk.
// Run with: cargo test -p vansplit-io --test pipeline

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;
use vansplit_engine::hash::hash_email;
use vansplit_engine::report::{MSG_COMPLETE, MSG_EMPTY_INPUT, MSG_NO_MATCHES};
use vansplit_engine::SplitError;
use vansplit_io::{hash_upload, split_uploads, HashOptions, OutputNames, SplitOptions, Upload};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn split_options(out: &Path) -> SplitOptions {
    SplitOptions {
        out_dir: out.to_path_buf(),
        ..SplitOptions::default()
    }
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("cannot read {name}: {e}"))
}

#[test]
fn split_fixture_end_to_end() {
    let out = tempdir().unwrap();
    let report = split_uploads(
        Some(&Upload::from_path(fixture("validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &split_options(out.path()),
    )
    .unwrap();

    assert_eq!(report.message, MSG_COMPLETE);
    let names: Vec<&str> = report.downloads.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["mapped_emails.csv", "valid_emails.csv", "invalid_emails.csv", "risky_emails.csv"]
    );
    assert_eq!(report.downloads[1].url, "/downloads/valid_emails.csv");

    // hal's row is short (no Checked At) but still complete enough to join
    assert_eq!(
        read(out.path(), "valid_emails.csv"),
        "VANID,EMAILS,STATUS\n100,ann@example.org,Result: Valid\n800,hal@example.org,Result: Valid\n"
    );
    // gus is duplicated in contacts: last VANID wins
    assert_eq!(
        read(out.path(), "invalid_emails.csv"),
        "VANID,EMAILS,STATUS\n200,bob@example.org,Result: Mailbox Full\n701,gus@example.org,Result: Disposable\n"
    );
    assert_eq!(
        read(out.path(), "risky_emails.csv"),
        "VANID,EMAILS,STATUS\n300,cat@example.org,Result: Role Address\n600,fay@example.org,Unknown\n"
    );

    let mapped = read(out.path(), "mapped_emails.csv");
    let mut lines = mapped.lines();
    assert_eq!(lines.next(), Some("VANID,EMAILS,STATUS,Category"));
    assert_eq!(lines.next(), Some("100,ann@example.org,Result: Valid,VALID"));
    assert_eq!(mapped.lines().count(), 7);
    // dan (unknown status) and eve (no contact) appear nowhere
    assert!(!mapped.contains("dan@example.org"));
    assert!(!mapped.contains("eve@example.org"));
}

#[test]
fn split_is_byte_identical_across_runs() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    for out in [&first, &second] {
        split_uploads(
            Some(&Upload::from_path(fixture("validation.csv"))),
            Some(&Upload::from_path(fixture("contacts.csv"))),
            &split_options(out.path()),
        )
        .unwrap();
    }
    for name in ["mapped_emails.csv", "valid_emails.csv", "invalid_emails.csv", "risky_emails.csv"] {
        assert_eq!(fs::read(first.path().join(name)).unwrap(), fs::read(second.path().join(name)).unwrap());
    }
}

#[test]
fn custom_names_without_mapped_file() {
    let out = tempdir().unwrap();
    let options = SplitOptions {
        out_dir: out.path().to_path_buf(),
        url_prefix: "https://files.example.org/dl/".into(),
        names: OutputNames {
            valid: "ok.csv".into(),
            invalid: "bad.csv".into(),
            risky: "hmm.csv".into(),
            ..OutputNames::default()
        },
        write_mapped: false,
    };
    let report = split_uploads(
        Some(&Upload::from_path(fixture("validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &options,
    )
    .unwrap();

    let urls: Vec<&str> = report.downloads.iter().map(|d| d.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://files.example.org/dl/ok.csv",
            "https://files.example.org/dl/bad.csv",
            "https://files.example.org/dl/hmm.csv",
        ]
    );
    assert!(!out.path().join("mapped_emails.csv").exists());
}

#[test]
fn empty_input_reports_without_files() {
    let out = tempdir().unwrap();
    let report = split_uploads(
        Some(&Upload::from_path(fixture("empty_validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &split_options(&out.path().join("out")),
    )
    .unwrap();
    assert_eq!(report.message, MSG_EMPTY_INPUT);
    assert!(report.downloads.is_empty());
    assert!(!out.path().join("out").exists());
}

#[test]
fn no_matches_reports_without_files() {
    let out = tempdir().unwrap();
    let report = split_uploads(
        Some(&Upload::from_path(fixture("unmatched_validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &split_options(&out.path().join("out")),
    )
    .unwrap();
    assert_eq!(report.message, MSG_NO_MATCHES);
    assert!(report.downloads.is_empty());
    assert!(!out.path().join("out").exists());
}

#[test]
fn colliding_output_names_rejected_without_files() {
    let out = tempdir().unwrap();
    let mut options = split_options(&out.path().join("out"));
    options.names.invalid = "valid_emails.csv".into();

    let err = split_uploads(
        Some(&Upload::from_path(fixture("validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, SplitError::InvalidOutputName(ref n) if n == "valid_emails.csv"));
    assert!(!out.path().join("out").exists());

    // a partition may not reuse the mapped file's name either
    let mut options = split_options(&out.path().join("out"));
    options.names.risky = "mapped_emails.csv".into();
    let err = split_uploads(
        Some(&Upload::from_path(fixture("validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &options,
    )
    .unwrap_err();
    assert!(matches!(err, SplitError::InvalidOutputName(_)));

    // without the mapped file that name is free
    options.write_mapped = false;
    let report = split_uploads(
        Some(&Upload::from_path(fixture("validation.csv"))),
        Some(&Upload::from_path(fixture("contacts.csv"))),
        &options,
    )
    .unwrap();
    assert_eq!(report.message, MSG_COMPLETE);
    assert_eq!(report.downloads.len(), 3);
}

#[test]
fn swapped_files_is_no_matches_not_error() {
    let out = tempdir().unwrap();
    let report = split_uploads(
        Some(&Upload::from_path(fixture("contacts.csv"))),
        Some(&Upload::from_path(fixture("validation.csv"))),
        &split_options(out.path()),
    )
    .unwrap();
    assert_eq!(report.message, MSG_NO_MATCHES);
}

#[test]
fn hash_fixture() {
    let out = tempdir().unwrap();
    let options = HashOptions {
        out_dir: out.path().to_path_buf(),
        ..HashOptions::default()
    };
    let report = hash_upload(Some(&Upload::from_path(fixture("hash_input.csv"))), &options).unwrap();
    assert_eq!(report.downloads.len(), 1);
    assert_eq!(report.downloads[0].name, "hashed_emails.csv");

    let content = read(out.path(), "hashed_emails.csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Name,Email,Team,HashedEmail");
    assert_eq!(
        lines[1],
        format!("Ann,Ann@Example.org ,blue,{}", hash_email("ann@example.org"))
    );
    assert_eq!(
        lines[2],
        format!("Bob,bob@example.org,\"red, green\",{}", hash_email("bob@example.org"))
    );
    assert_eq!(lines[3], format!("Cy,,,{}", hash_email("")));
}

#[test]
fn hash_without_email_column_fails() {
    let out = tempdir().unwrap();
    let options = HashOptions {
        out_dir: out.path().to_path_buf(),
        ..HashOptions::default()
    };
    // validation.csv has EMAILS, so it is accepted
    assert!(hash_upload(Some(&Upload::from_path(fixture("validation.csv"))), &options).is_ok());

    let upload = Upload::from_bytes("people.csv", b"Name,Phone\nAnn,555\n".to_vec());
    let err = hash_upload(Some(&upload), &options).unwrap_err();
    assert!(matches!(err, SplitError::EmailColumnMissing { .. }));
}
