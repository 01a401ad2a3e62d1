// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::data::Column;
use anyhow::Result;

/// Effective settings after combining the config file and CLI flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub columns: Vec<Column>,
    pub suffix: String,
    pub sort: bool,
}

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(&self, config: Config) -> Result<Settings> {
        let columns = config.resolve_columns()?;
        let suffix = config.suffix().to_string();

        // Flags (CLI switch wins, config only sets if not explicitly set)
        let sort = self.sort || config.sort.unwrap_or(false);

        Ok(Settings {
            columns,
            suffix,
            sort,
        })
    }

    /// Load configuration (if any) and merge with CLI args
    pub fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };
        self.merge_with_config(config)
    }
}
