use unic_ucd_category::GeneralCategory;

#[inline(always)]
pub fn lower_case(s: &str) -> String {
    s.chars().flat_map(|c| c.to_lowercase()).collect()
}

/// Letter in the Unicode sense, so accented vowels and ñ count.
#[inline(always)]
pub fn is_letter(ch: char) -> bool {
    GeneralCategory::of(ch).is_letter()
}

/// True at the text edge or on anything that is not a letter.
#[inline(always)]
pub fn is_not_letter(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => !is_letter(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower() {
        assert_eq!(lower_case("AVERIGÜÉIS"), "averigüéis");
        assert_eq!(lower_case("Ñandú"), "ñandú");
    }

    #[test]
    fn letters() {
        assert!(is_letter('a'));
        assert!(is_letter('é'));
        assert!(is_letter('ñ'));
        assert!(is_letter('θ'));
        assert!(!is_letter(' '));
        assert!(!is_letter('1'));
        assert!(!is_letter('¿'));
        assert!(is_not_letter(None));
        assert!(is_not_letter(Some('-')));
        assert!(!is_not_letter(Some('ü')));
    }
}
