use vansplit_engine::hash::{hash_email, hash_table};
use vansplit_engine::model::{Category, SplitOutcome, Table};
use vansplit_engine::report::{RunReport, MSG_EMPTY_INPUT, MSG_NO_MATCHES};
use vansplit_engine::run;

fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let mut t = Table::new(headers.iter().map(|h| h.to_string()).collect());
    for r in rows {
        t.push_row(r.iter().map(|v| v.to_string()).collect());
    }
    t
}

fn validation(rows: &[&[&str]]) -> Table {
    table(&["EMAILS", "STATUS", "Checked"], rows)
}

fn contacts(rows: &[&[&str]]) -> Table {
    table(&["VANID", "FirstName", "PreferredEmail"], rows)
}

fn split(v: &Table, c: &Table) -> vansplit_engine::SplitResult {
    match run(v, c) {
        SplitOutcome::Split(result) => result,
        other => panic!("expected a split, got {other:?}"),
    }
}

// -------------------------------------------------------------------------
// Scenarios
// -------------------------------------------------------------------------

#[test]
fn realistic_report() {
    let v = validation(&[
        &["ann@example.org", "Result: Valid", "2026-01-02"],
        &["BOB@example.org ", "Result: Mailbox Full", "2026-01-02"],
        &["cat@example.org", "Result: Role Address", "2026-01-02"],
        &["dan@example.org", "Result: Something New", "2026-01-02"],
        &["eve@example.org", "Result: Valid", "2026-01-02"],
        &["fay@example.org", "Unknown", "2026-01-02"],
        &["gus@example.org", "Result: Accept-All", "2026-01-02"],
    ]);
    let c = contacts(&[
        &["100", "Ann", "ann@example.org"],
        &["200", "Bob", "bob@example.org"],
        &["300", "Cat", "Cat@Example.org"],
        &["400", "Dan", "dan@example.org"],
        &["600", "Fay", "fay@example.org"],
        &["700", "Gus", "gus@example.org"],
    ]);

    let result = split(&v, &c);

    let rows = |cat| {
        result
            .partitions
            .get(cat)
            .iter()
            .map(|r| (r.vanid.as_str(), r.email.as_str(), r.status.as_str()))
            .collect::<Vec<_>>()
    };

    assert_eq!(rows(Category::Valid), vec![("100", "ann@example.org", "Result: Valid")]);
    assert_eq!(
        rows(Category::Invalid),
        vec![
            ("200", "bob@example.org", "Result: Mailbox Full"),
            ("700", "gus@example.org", "Result: Accept-All"),
        ]
    );
    assert_eq!(
        rows(Category::Risky),
        vec![
            ("300", "cat@example.org", "Result: Role Address"),
            ("600", "fay@example.org", "Unknown"),
        ]
    );

    // dan: unknown status; eve: no contact
    assert_eq!(result.summary.unknown_status, 1);
    assert_eq!(result.summary.unmatched_email, 1);
    assert_eq!(result.summary.joined(), 5);
    assert_eq!(result.joined.len(), 5);
}

#[test]
fn duplicate_contacts_last_vanid_wins() {
    let v = validation(&[&["dup@example.org", "Valid", ""]]);
    let c = contacts(&[
        &["1", "First", "dup@example.org"],
        &["2", "Second", " DUP@example.org"],
    ]);
    let result = split(&v, &c);
    assert_eq!(result.partitions.valid[0].vanid, "2");
    assert_eq!(result.summary.duplicate_emails, 1);
    assert_eq!(result.summary.indexed_emails, 1);
}

#[test]
fn unmapped_status_with_matching_contact_is_dropped() {
    let v = validation(&[&["foo@bar.com", "Unmapped Status", ""]]);
    let c = contacts(&[&["123", "Foo", "foo@bar.com"]]);
    assert!(matches!(run(&v, &c), SplitOutcome::NoMatches(_)));
}

#[test]
fn unmatched_email_is_dropped() {
    let v = validation(&[
        &["foo@bar.com", "Result: Valid", ""],
        &["nobody@bar.com", "Result: Valid", ""],
    ]);
    let c = contacts(&[&["123", "Foo", "foo@bar.com"]]);
    let result = split(&v, &c);
    assert_eq!(result.partitions.total(), 1);
    assert!(result.partitions.valid.iter().all(|r| r.email != "nobody@bar.com"));
}

#[test]
fn empty_and_no_match_reports_differ() {
    let empty = run(&validation(&[]), &contacts(&[]));
    assert_eq!(empty, SplitOutcome::EmptyInput);

    let dropped = run(
        &validation(&[&["x@y.z", "Nope", ""]]),
        &contacts(&[&["1", "X", "x@y.z"]]),
    );
    assert!(matches!(dropped, SplitOutcome::NoMatches(_)));

    assert_eq!(RunReport::empty_input().message, MSG_EMPTY_INPUT);
    assert_eq!(RunReport::no_matches().message, MSG_NO_MATCHES);
}

#[test]
fn hashing_is_independent_of_join() {
    let t = contacts(&[&["1", "Ann", " Ann@Example.org "]]);
    let hashed = hash_table(&t).unwrap();
    assert_eq!(hashed.headers.last().map(String::as_str), Some("HashedEmail"));
    assert_eq!(hashed.rows[0][3], hash_email("ann@example.org"));
    // original table untouched
    assert_eq!(t.headers.len(), 3);
}
