//! Sentence cleaning ahead of transcription.
use once_cell::sync::Lazy;

use crate::constants::{CLEANING_DIACRITICS, LETTERS, SYMBOLS, VOWELS};
use crate::rewrite::{apply_context_rules, replace_chars, Context, ContextRule};
use crate::tokenizer::case_handling::lower_case;

/// A letter written on its own is read by its name; a neighbouring letter of
/// any kind (accented vowels and ñ included) means it is part of a word.
static ISOLATED_LETTERS: Lazy<Vec<ContextRule>> = Lazy::new(|| {
    LETTERS
        .iter()
        .map(|&(letter, name)| {
            ContextRule::new(letter, name)
                .before(Context::NotLetter)
                .after(Context::NotLetter)
        })
        .collect()
});

/// Word-initial `s` + consonant gets a supporting `e` (spiritu → espiritu).
const EPENTHESIS: ContextRule = ContextRule::new("s", "es")
    .before(Context::WordEdge)
    .after(Context::LetterExcept(VOWELS));

/// Cleans raw text into the sentence the transducers work on. Never fails;
/// characters without a rule pass through unchanged.
pub fn clean_sentence(raw: &str, epenthesis: bool) -> String {
    let sentence = lower_case(raw);
    let sentence = apply_context_rules(&sentence, &ISOLATED_LETTERS);

    // A space, never nothing, so that "hola,mundo" stays two words.
    let sentence: String = sentence
        .chars()
        .map(|c| if SYMBOLS.contains(&c) { ' ' } else { c })
        .collect();

    let sentence = replace_chars(&sentence, CLEANING_DIACRITICS);

    let sentence = if epenthesis {
        EPENTHESIS.apply(&sentence)
    } else {
        sentence
    };

    log::debug!("clean: {:?} -> {:?}", raw, sentence);
    sentence
}
