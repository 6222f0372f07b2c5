//! Syllable boundaries and lexical stress.
//!
//! The transducers only depend on the [`Syllabifier`] capability; the
//! built-in [`SpanishSyllabifier`] is the default implementation.
use smol_str::SmolStr;

pub use self::error::SyllabifierError;
pub use self::spanish::SpanishSyllabifier;
pub use crate::types::ExceptionLevel;

pub mod error;
mod spanish;

/// Position of the stressed syllable, counted from the start when
/// non-negative and from the end when negative (`-1` is the last syllable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StressIndex(isize);

impl StressIndex {
    pub const fn new(raw: isize) -> StressIndex {
        StressIndex(raw)
    }

    /// `n`th syllable from the end, `1` being the last one.
    pub const fn from_end(n: usize) -> StressIndex {
        StressIndex(-(n as isize))
    }

    pub const fn raw(self) -> isize {
        self.0
    }

    pub const fn shifted(self, by: isize) -> StressIndex {
        StressIndex(self.0 + by)
    }

    /// Forward index into a word of `len` syllables, if it lands inside it.
    pub fn resolve(self, len: usize) -> Option<usize> {
        let len = len as isize;
        let index = if self.0 < 0 { len + self.0 } else { self.0 };

        if index >= 0 && index < len {
            Some(index as usize)
        } else {
            None
        }
    }
}

/// Syllables of one word and where its stress falls. Concatenating the
/// syllables gives back the word exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllabification {
    pub syllables: Vec<SmolStr>,
    pub stress: StressIndex,
}

impl Syllabification {
    pub fn new(syllables: Vec<SmolStr>, stress: StressIndex) -> Syllabification {
        Syllabification { syllables, stress }
    }

    /// Forward index of the stressed syllable.
    pub fn stressed(&self) -> Option<usize> {
        self.stress.resolve(self.syllables.len())
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

pub trait Syllabifier: Send + Sync {
    /// Splits `word` into syllables and locates its stress. `exceptions` is
    /// passed through from the caller's configuration.
    fn syllabify(
        &self,
        word: &str,
        exceptions: ExceptionLevel,
    ) -> Result<Syllabification, SyllabifierError>;
}
