//! IPA to SAMPA transliteration.
use smol_str::SmolStr;

use crate::constants::{IPA_TO_SAMPA, PRIMARY_STRESS};
use crate::types::Values;

fn transliterate_str(ipa: &str, stress: &str) -> SmolStr {
    let mut out = String::with_capacity(ipa.len());

    for ch in ipa.chars() {
        if ch == PRIMARY_STRESS {
            out.push_str(stress);
            continue;
        }

        match IPA_TO_SAMPA.iter().find(|(symbol, _)| *symbol == ch) {
            Some((_, sampa)) => out.push_str(sampa),
            None => out.push(ch),
        }
    }

    SmolStr::from(out)
}

/// Transliterates every word and syllable, writing `stress` for the primary
/// stress mark. Each character is looked up once, so the output of one
/// entry is never fed to another.
pub fn transliterate(ipa: &Values, stress: &str) -> Values {
    let convert = |items: &[SmolStr]| -> Vec<SmolStr> {
        items.iter().map(|s| transliterate_str(s, stress)).collect()
    };

    Values::new(convert(ipa.words()), convert(ipa.syllables()))
}
