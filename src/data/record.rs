// record.rs - User record and recognized column definitions

use chrono::NaiveDate;
use std::fmt::{self, Display};

/// Fixed textual date format used by the exports, e.g. `Jan 05, 2021`
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Parse a last-active date; returns `None` for empty or unparsable text
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Render a date in the same format [`parse_date`] accepts
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Columns the tool knows how to read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    UserId,
    /// Only present in newer export versions
    Username,
    LastActive,
}

impl Column {
    /// All recognized columns, in default output order
    pub const ALL: [Column; 4] = [
        Column::Name,
        Column::UserId,
        Column::Username,
        Column::LastActive,
    ];

    /// Columns every input file is expected to carry
    pub const REQUIRED: [Column; 3] = [Column::Name, Column::UserId, Column::LastActive];

    /// Exact header text as it appears in the export
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::UserId => "User ID",
            Column::Username => "Username",
            Column::LastActive => "Last active",
        }
    }

    /// Look up a column by its exact (case-sensitive) header text
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header() == header)
    }

    pub fn default_columns() -> Vec<Column> {
        Self::ALL.to_vec()
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// One person's profile snapshot from one export file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub user_id: String,
    pub username: String,
    pub last_active: Option<NaiveDate>,
}

impl UserRecord {
    pub fn new(name: &str, user_id: &str, username: &str, last_active: Option<NaiveDate>) -> Self {
        Self {
            name: name.to_string(),
            user_id: user_id.to_string(),
            username: username.to_string(),
            last_active,
        }
    }

    /// Text value of a column as written to output
    pub fn render(&self, column: Column) -> String {
        match column {
            Column::Name => self.name.clone(),
            Column::UserId => self.user_id.clone(),
            Column::Username => self.username.clone(),
            Column::LastActive => self.last_active.map(format_date).unwrap_or_default(),
        }
    }

    /// Store a raw field value read from the column at hand
    pub fn set_field(&mut self, column: Column, value: &str) {
        match column {
            Column::Name => self.name = value.to_string(),
            Column::UserId => self.user_id = value.to_string(),
            Column::Username => self.username = value.to_string(),
            Column::LastActive => self.last_active = parse_date(value),
        }
    }
}

impl Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = vec![self.name.as_str(), self.user_id.as_str()];
        if !self.username.is_empty() {
            elements.push(self.username.as_str());
        }
        match self.last_active {
            Some(date) => write!(f, "[{} {}]", elements.join(" "), format_date(date)),
            None => write!(f, "[{}]", elements.join(" ")),
        }
    }
}
