// lib.rs - userhist library root

//! # userhist - Merge user-activity CSV exports
//!
//! Admin analytics exports of a chat workspace list one row per member with a
//! "Last active" date. Each export only knows what it saw, so this library merges any
//! number of them into a single list holding the most recently active snapshot of each
//! user.
//!
//! ## Pipeline
//!
//! - **Line parser**: splits a raw line into fields, honoring double-quoted fields
//! - **File processor**: locates recognized columns by header name, in any order
//! - **Merge reducer**: keeps the record with the latest date per user ID
//! - **Writer**: emits a fully quoted CSV in a fixed column order
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use userhist::prelude::*;
//! use std::path::PathBuf;
//!
//! let columns = Column::default_columns();
//! let inputs = vec![PathBuf::from("january.csv"), PathBuf::from("march.csv")];
//!
//! let aggregate = merge_files(&inputs, &columns);
//! let mut stdout = std::io::stdout().lock();
//! write_users(&mut stdout, &columns, aggregate.records(), true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{select_inputs, usage, Args, Config, Settings};
    pub use crate::core::{merge_files, merge_record, AggregateUserMap};
    pub use crate::data::loaders::{load_file, parse_csv_line, process_file};
    pub use crate::data::{format_date, parse_date, Column, UserMap, UserRecord};
    pub use crate::output::write_users;
}

// Re-export main types at the root level for convenience
pub use cli::{Args, Config, Settings};
pub use crate::core::AggregateUserMap;
pub use data::{Column, UserRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("userhist v{} - Merge user-activity CSV exports", VERSION)
}
