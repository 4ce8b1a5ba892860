//! Core type definitions used throughout the codebase

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a research record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Where a record was retrieved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "GWAS")]
    Gwas,
    #[serde(rename = "Semantic Scholar")]
    SemanticScholar,
}

/// A selectable research record
///
/// Records are owned by the source list provider and never mutated while a
/// command is being interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            title: title.into(),
            summary: summary.into(),
            markers: Vec::new(),
            authors: Vec::new(),
            kind: None,
            link: None,
        }
    }

    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Lowercased title, summary, markers and authors joined by spaces
    pub fn searchable_text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(std::iter::once(self.summary.as_str()))
            .chain(self.markers.iter().map(String::as_str))
            .chain(self.authors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Lowercased last whitespace-delimited token of each author
    pub fn author_surnames(&self) -> impl Iterator<Item = String> + '_ {
        self.authors
            .iter()
            .filter_map(|author| author.split_whitespace().last())
            .map(str::to_lowercase)
    }
}

/// Set of currently selected record ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: AHashSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding every record id
    pub fn from_records(records: &[Record]) -> Self {
        records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Returns false if the id was already selected
    pub fn insert(&mut self, id: RecordId) -> bool {
        self.ids.insert(id)
    }

    /// Returns false if the id was not selected
    pub fn remove(&mut self, id: &RecordId) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Records from `records` that are selected, in list order
    pub fn filter_records(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|r| self.contains(&r.id))
            .cloned()
            .collect()
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = RecordId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
