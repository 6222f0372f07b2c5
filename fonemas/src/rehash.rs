//! Resyllabification across word boundaries.
//!
//! A consonant closing one syllable moves into the next one when that
//! syllable starts with a vowel: `sol ar` is spoken `so lar`.
use smol_str::SmolStr;

use crate::constants::REHASH_VOWELS;

#[inline(always)]
fn is_vowel(ch: char) -> bool {
    ch.to_lowercase().all(|c| REHASH_VOWELS.contains(c))
}

/// Moves syllable-final consonants onto following vowel-initial syllables.
///
/// One forward pass, so a moved consonant can leave its donor open and let
/// the next move cascade, but nothing is revisited. Syllable count and
/// total character count never change.
pub fn rehash(syllables: &[SmolStr]) -> Vec<SmolStr> {
    let mut result: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();

    for i in 1..result.len() {
        let starts_open = result[i].chars().next().map_or(false, is_vowel);
        if !starts_open || result[i - 1].chars().count() <= 1 {
            continue;
        }

        let last = match result[i - 1].chars().last() {
            Some(c) if !is_vowel(c) => c,
            _ => continue,
        };

        result[i - 1].pop();
        result[i].insert(0, last);
    }

    log::debug!("rehash: {:?} -> {:?}", syllables, result);
    result.into_iter().map(SmolStr::from).collect()
}
