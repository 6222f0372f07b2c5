//! Orthography to phonological IPA.
//!
//! The cleaned sentence goes through an ordered rewrite cascade (exceptional
//! `x`, trills, aspiration, the consonant table, `y` and `g`), is split into
//! syllables word by word, and finally loses its written accents.
use hashbrown::HashSet;
use once_cell::sync::Lazy;
use smol_str::SmolStr;

use crate::constants::{
    CONSONANTS, G_RULES, PHONOLOGY_DIACRITICS, TRILL, VOWELS, X_EXCEPTIONS,
};
use crate::rewrite::{
    apply_context_rules, apply_pattern_rules, compile_table, replace_chars, replace_literals,
    Context, ContextRule, PatternRule,
};
use crate::syllabifier::Syllabifier;
use crate::tokenizer::map_words;
use crate::transcription::{TranscriptionConfig, TranscriptionError};
use crate::types::Values;

mod syllables;

static X_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| X_EXCEPTIONS.iter().copied().collect());

static TRILL_RULE: Lazy<PatternRule> = Lazy::new(|| {
    PatternRule::new(TRILL.0, TRILL.1).expect("trill pattern must compile")
});

static G_PATTERNS: Lazy<Vec<PatternRule>> = Lazy::new(|| compile_table(G_RULES));

/// xilófono, xochimilco
const INITIAL_X: ContextRule = ContextRule::new("x", "s").before(Context::WordEdge);

const ASPIRATION: ContextRule = ContextRule::new("h", "ʰ").before(Context::WordEdge);

static Y_RULES: &[ContextRule] = &[
    // the conjunction
    ContextRule::new("y", "i")
        .before(Context::WordEdge)
        .after(Context::WordEdge),
    // muy
    ContextRule::new("uy", "wi").after(Context::WordEdge),
    // hoy, rey
    ContextRule::new("y", "j").after(Context::WordEdge),
    ContextRule::new("y", "ʝ"),
    ContextRule::new("aʝ", "ái").after(Context::WordEdge),
    ContextRule::new("eʝ", "éi").after(Context::WordEdge),
    ContextRule::new("iʝ", "íi").after(Context::WordEdge),
    ContextRule::new("oʝ", "ói").after(Context::WordEdge),
    ContextRule::new("uʝ", "úi").after(Context::WordEdge),
    // no vowel to lean on
    ContextRule::new("ʝ", "i").after(Context::NoneOf(VOWELS)),
];

/// Words from the closed list keep their old velar `x`; any other
/// word-initial `x` is read `s`.
fn exceptional_x(sentence: &str) -> String {
    let sentence = map_words(sentence, |word| {
        if X_WORDS.contains(word) {
            Some(word.replace('x', "j"))
        } else {
            None
        }
    });

    INITIAL_X.apply(&sentence)
}

/// Rewrites a cleaned sentence up to the point where it can be syllabified.
pub(crate) fn rewrite(sentence: &str, aspiration: bool) -> String {
    let mut sentence = if sentence.contains('x') {
        exceptional_x(sentence)
    } else {
        sentence.to_owned()
    };

    sentence = TRILL_RULE.apply(&sentence).into_owned();

    if aspiration {
        sentence = ASPIRATION.apply(&sentence);
    }

    sentence = replace_literals(&sentence, CONSONANTS);

    if sentence.contains('y') {
        sentence = apply_context_rules(&sentence, Y_RULES);
    }

    if sentence.contains('g') {
        sentence = apply_pattern_rules(&sentence, &G_PATTERNS);
    }

    log::debug!("phonology rewrite: {:?}", sentence);
    sentence
}

/// Phonological transcription of a cleaned sentence.
///
/// Fails only when `syllabifier` rejects one of the words, in which case no
/// partial result is returned.
pub fn transcribe(
    sentence: &str,
    config: &TranscriptionConfig,
    syllabifier: &dyn Syllabifier,
) -> Result<Values, TranscriptionError> {
    let sentence = rewrite(sentence, config.aspiration);
    let values = syllables::split_words(&sentence, config.mono, config.exceptions, syllabifier)?;

    let strip = |items: &[SmolStr]| -> Vec<SmolStr> {
        items
            .iter()
            .map(|s| SmolStr::from(replace_chars(s, PHONOLOGY_DIACRITICS)))
            .collect()
    };

    Ok(Values::new(strip(values.words()), strip(values.syllables())))
}
