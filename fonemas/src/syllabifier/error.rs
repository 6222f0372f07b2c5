//! Error types for syllabification.

use smol_str::SmolStr;

/// Errors a syllabifier can report for a single word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SyllabifierError {
    /// Nothing to syllabify
    #[error("Cannot syllabify an empty word")]
    Empty,

    /// The word has no vowel to build a syllable around
    #[error("No vowel nucleus in {0:?}")]
    NoNucleus(SmolStr),
}
