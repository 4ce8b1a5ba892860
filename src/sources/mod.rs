//! Source list provider
//!
//! Supplies the ordered records that commands refer to by position, title
//! or author.

pub mod loader;

pub use loader::SourceList;
