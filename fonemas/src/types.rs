use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Words and the flattened syllables of one representation.
///
/// `syllables` is the in-order concatenation of every word's syllables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Values {
    /// one transcribed string per input word
    pub words: Vec<SmolStr>,
    /// every syllable of every word, in order
    pub syllables: Vec<SmolStr>,
}

impl Values {
    /// creates a set of values from its parts
    pub fn new(words: Vec<SmolStr>, syllables: Vec<SmolStr>) -> Values {
        Values { words, syllables }
    }

    /// gets the transcribed words
    pub fn words(&self) -> &[SmolStr] {
        &self.words
    }

    /// gets the flattened syllables
    pub fn syllables(&self) -> &[SmolStr] {
        &self.syllables
    }

    /// true when no word was transcribed
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// How many exceptions the syllabifier applies on top of its base rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExceptionLevel {
    /// Plain onset maximization and hiatus rules.
    None = 0,
    /// Also honours prefix boundaries.
    Prefixes = 1,
    /// Also splits weak vowels after an obstruent and liquid onset.
    Hiatus = 2,
}

impl Default for ExceptionLevel {
    fn default() -> Self {
        ExceptionLevel::Prefixes
    }
}

/// An exception level outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid exception level {0}, expected 0, 1 or 2")]
pub struct InvalidExceptionLevel(pub u8);

impl TryFrom<u8> for ExceptionLevel {
    type Error = InvalidExceptionLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ExceptionLevel::None),
            1 => Ok(ExceptionLevel::Prefixes),
            2 => Ok(ExceptionLevel::Hiatus),
            n => Err(InvalidExceptionLevel(n)),
        }
    }
}

impl From<ExceptionLevel> for u8 {
    fn from(level: ExceptionLevel) -> u8 {
        level as u8
    }
}

impl std::str::FromStr for ExceptionLevel {
    type Err = InvalidExceptionLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(n) => ExceptionLevel::try_from(n),
            Err(_) => Err(InvalidExceptionLevel(u8::MAX)),
        }
    }
}

impl fmt::Display for ExceptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
