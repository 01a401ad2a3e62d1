// mod.rs - Core logic module

pub mod merge;

// Re-export main types for convenience
pub use merge::{merge_files, merge_record, AggregateUserMap};
