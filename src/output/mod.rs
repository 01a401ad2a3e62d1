// mod.rs - CSV output writer

use crate::data::{Column, UserRecord};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

/// Wrap a value in double quotes; inner quotes are not escaped
fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

fn quoted_line<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| quote(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Rendered row for a record, or `None` when every value is empty
pub fn render_row(record: &UserRecord, columns: &[Column]) -> Option<String> {
    let values: Vec<String> = columns.iter().map(|&c| record.render(c)).collect();
    if values.iter().all(|v| v.is_empty()) {
        return None;
    }
    Some(quoted_line(values))
}

/// Order records by name, then user ID
pub fn sort_records(records: &mut [&UserRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.user_id.cmp(&b.user_id)));
}

/// Write the header and one row per non-empty record
pub fn write_users<'a, W, I>(
    writer: &mut W,
    columns: &[Column],
    records: I,
    sort: bool,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a UserRecord>,
{
    let mut records: Vec<&UserRecord> = records.into_iter().collect();
    if sort {
        sort_records(&mut records);
    }

    writeln!(writer, "{}", quoted_line(columns.iter().map(|c| c.header())))
        .context("Write error")?;

    let mut written = 0;
    for record in records {
        match render_row(record, columns) {
            Some(row) => {
                writeln!(writer, "{}", row).context("Write error")?;
                written += 1;
            }
            None => debug!("Skipping empty record"),
        }
    }

    writer.flush().context("Flush error")?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn write_to_string(columns: &[Column], records: &[UserRecord], sort: bool) -> String {
        let mut buffer = Vec::new();
        write_users(&mut buffer, columns, records, sort).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_row() {
        let record = UserRecord::new("Alice", "U1", "alice", NaiveDate::from_ymd_opt(2021, 1, 5));
        let output = write_to_string(&Column::default_columns(), &[record], false);

        assert_eq!(
            output,
            "\"Name\",\"User ID\",\"Username\",\"Last active\"\n\
             \"Alice\",\"U1\",\"alice\",\"Jan 05, 2021\"\n"
        );
    }

    #[test]
    fn test_missing_date_renders_empty() {
        let record = UserRecord::new("Bob", "U2", "", None);
        let output = write_to_string(&Column::REQUIRED, &[record], false);

        assert_eq!(output, "\"Name\",\"User ID\",\"Last active\"\n\"Bob\",\"U2\",\"\"\n");
    }

    #[test]
    fn test_empty_record_is_skipped() {
        let empty = UserRecord::default();
        assert_eq!(render_row(&empty, &Column::default_columns()), None);

        let mut buffer = Vec::new();
        let written = write_users(&mut buffer, &Column::default_columns(), [&empty], false).unwrap();
        assert_eq!(written, 0);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\"Name\",\"User ID\",\"Username\",\"Last active\"\n"
        );
    }

    #[test]
    fn test_emptiness_judged_on_configured_columns() {
        // Only the username is set, and it is not an output column
        let record = UserRecord::new("", "", "ghost", None);
        assert_eq!(render_row(&record, &Column::REQUIRED), None);
        assert!(render_row(&record, &Column::default_columns()).is_some());
    }

    #[test]
    fn test_column_order_follows_configuration() {
        let record = UserRecord::new("Alice", "U1", "", None);
        let columns = [Column::UserId, Column::Name];
        assert_eq!(render_row(&record, &columns).unwrap(), "\"U1\",\"Alice\"");
    }

    #[test]
    fn test_sorted_output() {
        let records = vec![
            UserRecord::new("Carol", "3", "", None),
            UserRecord::new("Alice", "9", "", None),
            UserRecord::new("Alice", "2", "", None),
        ];
        let output = write_to_string(&[Column::Name, Column::UserId], &records, true);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(rows, vec!["\"Alice\",\"2\"", "\"Alice\",\"9\"", "\"Carol\",\"3\""]);
    }
}
