//! The transcription pipeline: cleaning, phonology, optional rehash,
//! phonetics and SAMPA.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::DEFAULT_SAMPA_STRESS;
use crate::normalizer::clean_sentence;
use crate::rehash::rehash;
use crate::syllabifier::{SpanishSyllabifier, Syllabifier};
use crate::types::{ExceptionLevel, Values};
use crate::{phonetics, phonology, sampa};

pub use self::error::TranscriptionError;

pub mod error;

static DEFAULT_SYLLABIFIER: SpanishSyllabifier = SpanishSyllabifier::new();

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// mark stress on words of a single syllable
    pub mono: bool,
    pub exceptions: ExceptionLevel,
    /// `e` before word-initial `s` + consonant
    pub epenthesis: bool,
    /// word-initial `h` is kept as `ʰ`
    pub aspiration: bool,
    /// move consonants onto following vowel-initial syllables
    pub rehash: bool,
    /// primary stress marker written in SAMPA
    pub stress: SmolStr,
}

impl Default for TranscriptionConfig {
    fn default() -> TranscriptionConfig {
        TranscriptionConfig {
            mono: false,
            exceptions: ExceptionLevel::default(),
            epenthesis: false,
            aspiration: false,
            rehash: false,
            stress: SmolStr::new(DEFAULT_SAMPA_STRESS),
        }
    }
}

/// The three representations of a transcription, without the sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub phonology: Values,
    pub phonetics: Values,
    pub sampa: Values,
}

/// A transcribed sentence. All stages run on construction; the result is
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// the cleaned input
    pub sentence: String,
    pub phonology: Values,
    pub phonetics: Values,
    pub sampa: Values,
}

impl Transcription {
    pub fn new(text: &str) -> Result<Transcription, TranscriptionError> {
        Transcription::with_config(text, &TranscriptionConfig::default())
    }

    pub fn with_config(
        text: &str,
        config: &TranscriptionConfig,
    ) -> Result<Transcription, TranscriptionError> {
        Transcription::with_syllabifier(text, config, &DEFAULT_SYLLABIFIER)
    }

    /// Transcribes `text` using a caller-provided syllabifier.
    pub fn with_syllabifier(
        text: &str,
        config: &TranscriptionConfig,
        syllabifier: &dyn Syllabifier,
    ) -> Result<Transcription, TranscriptionError> {
        let sentence = clean_sentence(text, config.epenthesis);

        let mut phonology = phonology::transcribe(&sentence, config, syllabifier)?;
        if config.rehash {
            phonology.syllables = rehash(phonology.syllables());
        }

        let phonetics = phonetics::transcribe(&phonology);
        let sampa = sampa::transliterate(&phonetics, &config.stress);

        Ok(Transcription {
            sentence,
            phonology,
            phonetics,
            sampa,
        })
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// All three representations at once.
    pub fn all(&self) -> TranscriptionResult {
        TranscriptionResult {
            phonology: self.phonology.clone(),
            phonetics: self.phonetics.clone(),
            sampa: self.sampa.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabifier::{StressIndex, Syllabification, SyllabifierError};

    fn strings(items: &[SmolStr]) -> Vec<&str> {
        items.iter().map(|s| s.as_str()).collect()
    }

    fn count(items: &[SmolStr], marker: char) -> usize {
        items
            .iter()
            .map(|s| s.chars().filter(|&c| c == marker).count())
            .sum()
    }

    #[test]
    fn casa() {
        let config = TranscriptionConfig {
            mono: true,
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_config("casa", &config).unwrap();

        assert_eq!(strings(t.phonology.words()), vec!["ˈkasa"]);
        assert_eq!(strings(t.phonology.syllables()), vec!["ˈka", "sa"]);
        assert_eq!(strings(t.sampa.words()), vec!["\"kasa"]);
    }

    #[test]
    fn averigueis() {
        let t = Transcription::new("Averigüéis").unwrap();

        assert_eq!(strings(t.phonology.words()), vec!["abeɾiˈgwejs"]);
        assert_eq!(strings(t.phonology.syllables()), vec!["a", "be", "ɾi", "ˈgwejs"]);
        assert_eq!(strings(t.phonetics.words()), vec!["aβeɾiˈɣwejs"]);
        assert_eq!(strings(t.phonetics.syllables()), vec!["a", "βe", "ɾi", "ˈɣwejs"]);
        assert_eq!(strings(t.sampa.words()), vec!["aBeri\"Gwejs"]);
        assert_eq!(strings(t.sampa.syllables()), vec!["a", "Be", "ri", "\"Gwejs"]);
    }

    #[test]
    fn sentence() {
        let t = Transcription::new("Tingi y su abuela huyeron y se escondieron.").unwrap();

        assert_eq!(
            strings(t.phonology.words()),
            vec!["ˈtinxi", "i", "su", "aˈbwela", "uˈʝeɾon", "i", "se", "eskonˈdjeɾon"]
        );
        assert_eq!(t.phonetics.words().len(), 8);
        assert_eq!(t.sampa.words().len(), 8);
    }

    #[test]
    fn word_count_is_kept() {
        for text in &["un beso", "Los otros se fueron", "rápidamente", "¿Qué?"] {
            let t = Transcription::new(text).unwrap();
            let n = t.phonology.words().len();
            assert_eq!(t.phonetics.words().len(), n, "{}", text);
            assert_eq!(t.sampa.words().len(), n, "{}", text);
        }
    }

    #[test]
    fn trill() {
        let t = Transcription::new("corrieron").unwrap();
        assert_eq!(strings(t.phonology.syllables()), vec!["ko", "ˈrje", "ɾon"]);

        let t = Transcription::new("perro grande").unwrap();
        assert_eq!(strings(t.phonology.words()), vec!["ˈpero", "ˈgɾande"]);
    }

    #[test]
    fn adverb_stress() {
        let t = Transcription::new("rápidamente").unwrap();
        assert_eq!(count(t.phonology.words(), 'ˈ'), 1);
        assert_eq!(count(t.phonology.words(), 'ˌ'), 1);
        assert_eq!(count(t.sampa.words(), '%'), 1);
    }

    #[test]
    fn monosyllables() {
        let t = Transcription::new("sol").unwrap();
        assert_eq!(count(t.phonology.words(), 'ˈ'), 0);
        assert_eq!(count(t.phonology.syllables(), 'ˈ'), 0);

        let config = TranscriptionConfig {
            mono: true,
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_config("sol", &config).unwrap();
        assert_eq!(count(t.phonology.words(), 'ˈ'), 1);
    }

    #[test]
    fn allophones() {
        let fricative = |text: &str, symbol: char| {
            let t = Transcription::new(text).unwrap();
            t.phonetics.words()[0].contains(symbol)
        };

        assert!(fricative("cabo", 'β'));
        assert!(fricative("cada", 'ð'));
        assert!(fricative("hago", 'ɣ'));
    }

    #[test]
    fn nasal_assimilation() {
        let t = Transcription::new("un beso").unwrap();
        assert_eq!(strings(t.phonetics.words()), vec!["um", "ˈbeso"]);
    }

    #[test]
    fn x_exceptions() {
        for text in &["mexico", "oaxaca", "texas"] {
            let t = Transcription::new(text).unwrap();
            let word = &t.phonology.words()[0];
            assert!(word.contains('x'), "{}", word);
            assert!(!word.contains("ks"), "{}", word);
        }

        let t = Transcription::new("taxi").unwrap();
        assert!(t.phonology.words()[0].contains("ks"));
    }

    #[test]
    fn sampa_marker() {
        let config = TranscriptionConfig {
            stress: "'".into(),
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_config("casa", &config).unwrap();
        assert_eq!(strings(t.sampa.words()), vec!["'kasa"]);
    }

    #[test]
    fn rehash_syllables() {
        let config = TranscriptionConfig {
            rehash: true,
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_config("sol ardiente", &config).unwrap();

        assert_eq!(strings(t.phonology.words()), vec!["sol", "aɾˈdjente"]);
        assert_eq!(strings(t.phonology.syllables()), vec!["so", "laɾ", "ˈdjen", "te"]);
        assert_eq!(strings(t.phonetics.syllables()), vec!["so", "laɾ", "ˈðjen", "te"]);
    }

    #[test]
    fn epenthesis() {
        let config = TranscriptionConfig {
            epenthesis: true,
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_config("spiritu", &config).unwrap();
        assert_eq!(t.sentence(), "espiritu");
        assert_eq!(strings(t.phonology.words()), vec!["espiˈɾitu"]);
    }

    #[test]
    fn empty_input() {
        let t = Transcription::new("¡!").unwrap();
        assert!(t.phonology.is_empty());
        assert!(t.phonetics.is_empty());
        assert!(t.sampa.is_empty());
    }

    #[test]
    fn all() {
        let t = Transcription::new("casa").unwrap();
        let all = t.all();
        assert_eq!(all.phonology, t.phonology);
        assert_eq!(all.phonetics, t.phonetics);
        assert_eq!(all.sampa, t.sampa);
    }

    struct WholeWords;

    impl Syllabifier for WholeWords {
        fn syllabify(
            &self,
            word: &str,
            _exceptions: ExceptionLevel,
        ) -> Result<Syllabification, SyllabifierError> {
            if word.is_empty() {
                return Err(SyllabifierError::Empty);
            }
            Ok(Syllabification::new(vec![word.into()], StressIndex::new(0)))
        }
    }

    #[test]
    fn custom_syllabifier() {
        let config = TranscriptionConfig {
            mono: true,
            ..TranscriptionConfig::default()
        };
        let t = Transcription::with_syllabifier("casa blanca", &config, &WholeWords).unwrap();
        assert_eq!(strings(t.phonology.words()), vec!["ˈkasa", "ˈblanka"]);
        assert_eq!(strings(t.phonology.syllables()), vec!["ˈkasa", "ˈblanka"]);
    }

    #[test]
    fn config_defaults() {
        let config: TranscriptionConfig = serde_json::from_str(r#"{"mono": true}"#).unwrap();
        assert!(config.mono);
        assert_eq!(config.exceptions, ExceptionLevel::Prefixes);
        assert_eq!(config.stress, "\"");

        assert!(serde_json::from_str::<TranscriptionConfig>(r#"{"exceptions": 3}"#).is_err());
    }
}
