//! Phonological to phonetic IPA: allophones and coarticulation.
use itertools::Itertools;
use once_cell::sync::Lazy;
use smol_str::SmolStr;

use crate::constants::{ALLOPHONES, COARTICULATIONS};
use crate::rewrite::{apply_pattern_rules, compile_table, PatternRule};
use crate::tokenizer::split_boundaries;
use crate::types::Values;

/// Voiced stops soften into fricatives unless they follow a nasal, a pause
/// or the start of the text. Between the trigger and the stop there may be
/// at most one boundary and one stress mark.
static ALLOPHONE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    ALLOPHONES
        .iter()
        .map(|&(stop, fricative)| {
            PatternRule::new(
                &format!(r"([^mnɲ\n\-\sˈ][\-\s]?ˈ?){}", stop),
                format!("${{1}}{}", fricative),
            )
            .expect("allophone pattern must compile")
        })
        .collect()
});

static COARTICULATION_RULES: Lazy<Vec<PatternRule>> =
    Lazy::new(|| compile_table(COARTICULATIONS));

fn substitute(text: &str) -> Vec<SmolStr> {
    let text = apply_pattern_rules(text, &ALLOPHONE_RULES);
    let text = apply_pattern_rules(&text, &COARTICULATION_RULES);

    split_boundaries(&text).map(SmolStr::from).collect()
}

/// Phonetic transcription of a phonological one. Words and syllables are
/// each processed as a single string so that rules see across boundaries.
pub fn transcribe(phonology: &Values) -> Values {
    let words = substitute(&phonology.words().iter().join(" "));
    let syllables = substitute(&phonology.syllables().iter().join("-"));

    log::debug!("phonetics: {:?}", words);
    Values::new(words, syllables)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(words: &[&str], syllables: &[&str]) -> Values {
        Values::new(
            words.iter().map(|s| SmolStr::from(*s)).collect(),
            syllables.iter().map(|s| SmolStr::from(*s)).collect(),
        )
    }

    fn words(words: &[&str]) -> Vec<String> {
        transcribe(&values(words, &[]))
            .words()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn fricatives() {
        assert_eq!(words(&["ˈkabo"]), vec!["ˈkaβo"]);
        assert_eq!(words(&["ˈkada"]), vec!["ˈkaða"]);
        assert_eq!(words(&["ˈago"]), vec!["ˈaɣo"]);
        assert_eq!(words(&["abeɾiˈgwejs"]), vec!["aβeɾiˈɣwejs"]);
    }

    #[test]
    fn stops_after_pause_and_nasal() {
        assert_eq!(words(&["ˈbeso"]), vec!["ˈbeso"]);
        assert_eq!(words(&["um", "ˈbeso"]), vec!["um", "ˈbeso"]);
        assert_eq!(words(&["un", "ˈbeso"]), vec!["um", "ˈbeso"]);
        assert_eq!(words(&["ˈande"]), vec!["ˈande"]);
    }

    #[test]
    fn across_words() {
        assert_eq!(words(&["la", "ˈboka"]), vec!["la", "ˈβoka"]);
        assert_eq!(words(&["los", "ˈdos"]), vec!["loz", "ˈðos"]);
    }

    #[test]
    fn voicing_before_voiced_consonants() {
        assert_eq!(words(&["djeθ", "ˈbeθes"]), vec!["djeð", "ˈβeθes"]);
        assert_eq!(words(&["ˈafgano"]), vec!["ˈavɣano"]);
        assert_eq!(words(&["ˈafta"]), vec!["ˈafta"]);
    }

    #[test]
    fn coarticulation() {
        assert_eq!(words(&["ˈmismo"]), vec!["ˈmizmo"]);
        assert_eq!(words(&["ˈθinko"]), vec!["ˈθiŋko"]);
        assert_eq!(words(&["ˈtengo"]), vec!["ˈteŋgo"]);
        assert_eq!(words(&["ˈenfasis"]), vec!["ˈeɱfasis"]);
        assert_eq!(words(&["ˈaldea"]), vec!["ˈaldea"]);
        assert_eq!(words(&["ˈanxel"]), vec!["ˈaŋxel"]);
        assert_eq!(words(&["ˈxuan"]), vec!["ˈχuan"]);
        assert_eq!(words(&["ˈxente"]), vec!["ˈxente"]);
    }

    #[test]
    fn syllables() {
        let result = transcribe(&values(&["ˈkabo"], &["ˈka", "bo"]));
        assert_eq!(result.syllables(), &["ˈka", "βo"]);

        let result = transcribe(&values(&["ˈkanto"], &["ˈkan", "to"]));
        assert_eq!(result.syllables(), &["ˈkan", "to"]);
    }

    #[test]
    fn word_count_is_kept() {
        let input = values(&["un", "ˈbeso", "de", "ˈmadɾe"], &["un", "ˈbe", "so", "de", "ˈma", "dɾe"]);
        let output = transcribe(&input);
        assert_eq!(output.words().len(), 4);
        assert_eq!(output.syllables().len(), 6);
    }

    #[test]
    fn empty() {
        assert!(transcribe(&Values::default()).is_empty());
    }
}
