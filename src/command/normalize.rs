//! Transcript normalization

/// Lowercase and trim a raw transcript
///
/// Punctuation is kept; matching is plain substring containment.
pub fn normalize(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}
