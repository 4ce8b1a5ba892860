//! Target resolution - finds the record a command refers to

use crate::command::vocabulary::{MIN_TITLE_WORD_LEN, ORDINALS};
use crate::core::types::Record;

/// A record picked out of the list by a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMatch<'a> {
    pub record: &'a Record,
    /// 0-based position in the record list
    pub index: usize,
    pub match_reason: MatchReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    Ordinal { word: &'static str },
    TitleWord { word: String },
    AuthorSurname { surname: String },
}

/// Resolves a normalized transcript to at most one record
pub struct TargetResolver<'a> {
    records: &'a [Record],
}

impl<'a> TargetResolver<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    /// Try ordinal words, then title words, then author surnames
    pub fn resolve(&self, transcript: &str) -> Option<TargetMatch<'a>> {
        self.by_ordinal(transcript)
            .or_else(|| self.by_title(transcript))
            .or_else(|| self.by_author(transcript))
    }

    fn by_ordinal(&self, transcript: &str) -> Option<TargetMatch<'a>> {
        for &(word, position) in ORDINALS {
            if !transcript.contains(word) {
                continue;
            }
            // Positions past the end fall through to the next word
            if let Some(record) = self.records.get(position - 1) {
                return Some(TargetMatch {
                    record,
                    index: position - 1,
                    match_reason: MatchReason::Ordinal { word },
                });
            }
        }
        None
    }

    fn by_title(&self, transcript: &str) -> Option<TargetMatch<'a>> {
        self.records.iter().enumerate().find_map(|(index, record)| {
            let title = record.title.to_lowercase();
            title
                .split_whitespace()
                .find(|w| w.chars().count() > MIN_TITLE_WORD_LEN && transcript.contains(w))
                .map(|word| TargetMatch {
                    record,
                    index,
                    match_reason: MatchReason::TitleWord {
                        word: word.to_string(),
                    },
                })
        })
    }

    fn by_author(&self, transcript: &str) -> Option<TargetMatch<'a>> {
        self.records.iter().enumerate().find_map(|(index, record)| {
            record
                .author_surnames()
                .find(|surname| transcript.contains(surname.as_str()))
                .map(|surname| TargetMatch {
                    record,
                    index,
                    match_reason: MatchReason::AuthorSurname { surname },
                })
        })
    }
}
