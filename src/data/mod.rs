// mod.rs - Data structures module

pub mod loaders;
pub mod record;

// Re-export main types for convenience
pub use loaders::{ColumnIndexMap, UserMap};
pub use record::{format_date, parse_date, Column, UserRecord, DATE_FORMAT};
