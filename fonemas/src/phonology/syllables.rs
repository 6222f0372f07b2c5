use once_cell::sync::Lazy;
use smol_str::SmolStr;

use crate::constants::{DIPHTHONGS, PRIMARY_STRESS, SECONDARY_STRESS};
use crate::rewrite::{apply_pattern_rules, compile_table, PatternRule};
use crate::syllabifier::{ExceptionLevel, Syllabification, Syllabifier};
use crate::tokenizer::Tokenize;
use crate::transcription::TranscriptionError;
use crate::types::Values;

static GLIDES: Lazy<Vec<PatternRule>> = Lazy::new(|| compile_table(DIPHTHONGS));

const ADVERB_SUFFIX: &str = "mente";

/// Syllables of one word and the forward index of its stressed syllable.
/// Negative, end-relative indices are resolved as soon as the syllabifier
/// returns, so nothing past this point has to interpret them.
struct Word {
    syllables: Vec<SmolStr>,
    stressed: Option<usize>,
}

impl From<Syllabification> for Word {
    fn from(syllabification: Syllabification) -> Word {
        let stressed = syllabification.stressed();
        Word {
            syllables: syllabification.syllables,
            stressed,
        }
    }
}

/// Adverbs in `-mente` carry two stresses: the root keeps its own and the
/// suffix gets a secondary one. The root is syllabified alone; a root of a
/// single syllable is treated as unstressed and the primary stress goes to
/// `ˌmen`.
fn syllabify_adverb(
    word: &str,
    exceptions: ExceptionLevel,
    syllabifier: &dyn Syllabifier,
) -> Option<Result<Word, TranscriptionError>> {
    if word.chars().count() <= ADVERB_SUFFIX.len() || !word.ends_with(ADVERB_SUFFIX) {
        return None;
    }

    let root = &word[..word.len() - ADVERB_SUFFIX.len()];
    let result = syllabify(root, exceptions, syllabifier).map(|mut w| {
        let root_len = w.syllables.len();
        if root_len <= 1 {
            w.stressed = Some(root_len);
        }
        w.syllables.push(format!("{}men", SECONDARY_STRESS).into());
        w.syllables.push("te".into());
        w
    });

    Some(result)
}

fn syllabify(
    word: &str,
    exceptions: ExceptionLevel,
    syllabifier: &dyn Syllabifier,
) -> Result<Word, TranscriptionError> {
    syllabifier
        .syllabify(word, exceptions)
        .map(Word::from)
        .map_err(|source| TranscriptionError::Syllabify {
            word: word.into(),
            source,
        })
}

/// Glides, then the primary stress marker. A monosyllable only gets the
/// marker when `mono` is set, and then in both the word and its syllable;
/// without `mono` neither carries it.
fn mark(word: Word, mono: bool) -> Vec<SmolStr> {
    let Word {
        syllables,
        stressed,
    } = word;
    let len = syllables.len();

    syllables
        .into_iter()
        .enumerate()
        .map(|(i, syllable)| {
            let syllable = apply_pattern_rules(&syllable, &GLIDES);
            if Some(i) == stressed && (mono || len > 1) {
                format!("{}{}", PRIMARY_STRESS, syllable).into()
            } else {
                syllable.into()
            }
        })
        .collect()
}

/// Syllabifies every word of a rewritten sentence.
pub(super) fn split_words(
    sentence: &str,
    mono: bool,
    exceptions: ExceptionLevel,
    syllabifier: &dyn Syllabifier,
) -> Result<Values, TranscriptionError> {
    let mut words = Vec::with_capacity(sentence.word_count());
    let mut syllables = vec![];

    for word in sentence.words() {
        let syllabified = match syllabify_adverb(word, exceptions, syllabifier) {
            Some(result) => result?,
            None => syllabify(word, exceptions, syllabifier)?,
        };

        let marked = mark(syllabified, mono);
        words.push(marked.iter().map(SmolStr::as_str).collect::<String>().into());
        syllables.extend(marked);
    }

    Ok(Values::new(words, syllables))
}
