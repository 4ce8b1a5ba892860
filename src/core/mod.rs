pub mod config;
pub mod error;
pub mod types;

pub use types::{Record, RecordId, SelectionSet, SourceKind};
