// CSV import/export

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use vansplit_engine::{SplitError, Table};

/// Load a header-delimited CSV file into a `Table`.
pub fn load_table(path: &Path) -> Result<Table, SplitError> {
    let source = path.display().to_string();
    let content = read_file_as_utf8(path).map_err(|e| SplitError::parse(&source, e))?;
    parse_table(&content, &source)
}

/// Parse CSV text. First line is the header.
///
/// Blank lines are skipped. Rows may be shorter than the header (trailing
/// fields stay undefined); cells beyond the header width are dropped.
/// Empty content yields an empty table.
pub fn parse_table(content: &str, source: &str) -> Result<Table, SplitError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SplitError::parse(source, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let width = headers.len();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| SplitError::parse(source, e))?;
        table.push_row(record.iter().take(width).map(|v| v.to_string()).collect());
    }

    Ok(table)
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;
    Ok(decode_bytes(bytes))
}

/// UTF-8 first; on failure fall back to Windows-1252 (common for Excel-exported CSVs).
/// A leading byte-order mark is dropped.
pub fn decode_bytes(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Serialize rows to CSV bytes. Header comes from the row type's field names.
pub fn render_rows<S: Serialize>(rows: &[S]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer.into_inner().map_err(|e| e.to_string())
}

/// Serialize a table to CSV bytes, header first.
pub fn render_table(table: &Table) -> Result<Vec<u8>, String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(&table.headers).map_err(|e| e.to_string())?;
    for row in &table.rows {
        writer.write_record(row).map_err(|e| e.to_string())?;
    }
    writer.into_inner().map_err(|e| e.to_string())
}
