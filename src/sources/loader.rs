//! Load research sources from JSON files

use crate::core::error::{Result, VoiceError};
use crate::core::types::Record;
use ahash::AHashSet;
use std::fs;
use std::path::Path;

/// Ordered list of selectable records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceList {
    records: Vec<Record>,
}

impl SourceList {
    /// Build a list, rejecting empty or duplicate ids
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = AHashSet::new();
        for (i, record) in records.iter().enumerate() {
            if record.id.as_str().trim().is_empty() {
                return Err(VoiceError::InvalidSources(format!(
                    "record {} has an empty id",
                    i + 1
                )));
            }
            if !seen.insert(&record.id) {
                return Err(VoiceError::InvalidSources(format!(
                    "duplicate id {:?}",
                    record.id.as_str()
                )));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a JSON array of records from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let list = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} sources from {:?}", list.len(), path);
        Ok(list)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record at a 1-based position
    pub fn at_position(&self, position: usize) -> Option<&Record> {
        position.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
