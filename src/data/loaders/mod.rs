// mod.rs - File loaders module

pub mod csv;

pub use csv::{build_column_index, load_file, parse_csv_line, process_file, ColumnIndexMap, UserMap};
