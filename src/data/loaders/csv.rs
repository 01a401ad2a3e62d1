// csv.rs - CSV loader for user-activity exports

use crate::data::record::{Column, UserRecord};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Header position of each recognized column found in one file
pub type ColumnIndexMap = HashMap<Column, usize>;

/// Records of one file keyed by user ID
pub type UserMap = HashMap<String, UserRecord>;

/// Split one line into fields.
///
/// A comma outside quotes ends a field. Every `"` toggles the quoted state and is
/// dropped, so an escaped quote (`""`) inside a quoted field is not supported.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut quoted = false;
    let mut current = String::new();

    for ch in line.chars() {
        match ch {
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            '"' => quoted = !quoted,
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Locate each recognized column in a header row by exact name
pub fn build_column_index(header: &[String], columns: &[Column]) -> ColumnIndexMap {
    let mut indices = ColumnIndexMap::new();
    for &column in columns {
        if let Some(index) = header.iter().position(|h| h == column.header()) {
            indices.insert(column, index);
        }
    }
    indices
}

/// Build a record from one parsed row; missing fields stay empty
fn build_record(fields: &[String], indices: &ColumnIndexMap, columns: &[Column]) -> UserRecord {
    let mut record = UserRecord::default();
    for &column in columns {
        if let Some(&index) = indices.get(&column) {
            let value = fields.get(index).map(String::as_str).unwrap_or("");
            record.set_field(column, value);
        }
    }
    record
}

/// Parse a whole file's text into records keyed by user ID.
///
/// The first non-empty line is the header. Later rows for the same user ID replace
/// earlier ones. A leading byte-order mark is ignored.
pub fn process_file(text: &str, columns: &[Column]) -> UserMap {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty());

    let mut users = UserMap::new();
    let Some(header_line) = lines.next() else {
        return users;
    };

    let header = parse_csv_line(header_line);
    let indices = build_column_index(&header, columns);
    debug!(
        "Header columns found: {:?}",
        columns.iter().filter(|c| indices.contains_key(*c)).collect::<Vec<_>>()
    );

    for line in lines {
        let fields = parse_csv_line(line);
        let record = build_record(&fields, &indices, columns);
        users.insert(record.user_id.clone(), record);
    }

    users
}

/// Read a file fully into memory and process it
pub fn load_file(path: &Path, columns: &[Column]) -> Result<UserMap> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read CSV file '{}'", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let users = process_file(&text, columns);
    debug!("CSV loaded: {} users from {}", users.len(), path.display());
    Ok(users)
}
