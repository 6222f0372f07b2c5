//! Error types for transcription.

use smol_str::SmolStr;

use crate::syllabifier::SyllabifierError;

/// Errors that abort a transcription.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TranscriptionError {
    /// The syllabifier rejected a word of the sentence
    #[error("Could not syllabify {word:?}")]
    Syllabify {
        /// The phonologized word handed to the syllabifier
        word: SmolStr,
        /// Why it was rejected
        #[source]
        source: SyllabifierError,
    },
}
