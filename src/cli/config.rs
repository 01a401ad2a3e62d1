// config.rs - Configuration file support

use crate::data::Column;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Input suffix accepted when none is configured
pub const DEFAULT_SUFFIX: &str = ".csv";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Recognized column headers, in output order
    pub columns: Option<Vec<String>>,
    /// Suffix an argument must end with to be read as input
    pub suffix: Option<String>,
    /// Sort output rows by name, then user ID
    pub sort: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Resolve the configured header names into columns.
    ///
    /// Falls back to every known column. The user ID column is mandatory since it is
    /// the merge key.
    pub fn resolve_columns(&self) -> Result<Vec<Column>> {
        let Some(names) = &self.columns else {
            return Ok(Column::default_columns());
        };

        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let column = match Column::from_header(name) {
                Some(column) => column,
                None => bail!(
                    "Unknown column '{}'. Available: {}",
                    name,
                    Column::ALL.map(|c| c.header()).join(", ")
                ),
            };
            if columns.contains(&column) {
                bail!("Column '{}' is listed more than once", name);
            }
            columns.push(column);
        }

        if !columns.contains(&Column::UserId) {
            bail!("Column list must include '{}'", Column::UserId.header());
        }
        Ok(columns)
    }

    /// Configured input suffix, or `.csv`
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# userhist.toml - Configuration file for userhist
# Command line arguments will override these settings

# =============================================================================
# COLUMNS
# =============================================================================

# Recognized header names, matched exactly (case-sensitive).
# Output columns follow this order. "User ID" is required.
# Available: "Name", "User ID", "Username", "Last active"
columns = ["Name", "User ID", "Username", "Last active"]

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Only arguments ending with this suffix are read
suffix = ".csv"

# Sort output rows by name, then user ID
sort = false
"#
        .to_string()
    }
}
