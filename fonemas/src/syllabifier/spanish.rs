use smol_str::SmolStr;

use super::{ExceptionLevel, Syllabification, Syllabifier, SyllabifierError, StressIndex};
use crate::constants::DIAERESIS_PLACEHOLDER;

/// Obstruents that form a complex onset with a following liquid.
const ONSET_OBSTRUENTS: &str = "pbkgfdt";
const LIQUIDS: &str = "lɾ";

/// Vowels carrying a written accent; they attract stress.
const ACCENTED: &str = "áéíóú";

/// Final letters of words stressed on the penultimate syllable by default.
const PENULTIMATE_FINALS: &str = "aeiouns";

/// Prefixes whose boundary wins over onset maximization, with the letters
/// that may follow them.
static PREFIX_EXCEPTIONS: &[(&str, &str)] = &[("sub", "lɾ")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Strong,
    Weak,
    Consonant,
}

impl Kind {
    #[inline(always)]
    fn of(ch: char) -> Kind {
        match ch {
            // accented high vowels never glide, so they pattern with a, e, o
            'a' | 'e' | 'o' | 'á' | 'é' | 'ó' | 'í' | 'ú' => Kind::Strong,
            'i' | 'u' | 'ü' | 'j' | 'w' => Kind::Weak,
            _ => Kind::Consonant,
        }
    }

    #[inline(always)]
    fn is_vowel(self) -> bool {
        self != Kind::Consonant
    }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: usize,
    ch: char,
    kind: Kind,
    /// preceded by the diaeresis placeholder, which forces a hiatus
    marked: bool,
}

fn segments(word: &str) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(word.len());
    let mut chars = word.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if ch == DIAERESIS_PLACEHOLDER {
            if let Some(&(_, next)) = chars.peek() {
                if Kind::of(next).is_vowel() {
                    chars.next();
                    out.push(Segment {
                        start,
                        ch: next,
                        kind: Kind::of(next),
                        marked: true,
                    });
                    continue;
                }
            }
        }

        out.push(Segment {
            start,
            ch,
            kind: Kind::of(ch),
            marked: false,
        });
    }

    out
}

#[inline(always)]
fn is_onset_cluster(first: char, second: char) -> bool {
    ONSET_OBSTRUENTS.contains(first)
        && LIQUIDS.contains(second)
        && !(second == 'l' && (first == 'd' || first == 't'))
}

/// Onset maximization and hiatus rules for Spanish, working on the output of
/// the phonological rewrite cascade (IPA consonants, accented vowels, `j`/`w`
/// glides and `_` hiatus placeholders).
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanishSyllabifier;

impl SpanishSyllabifier {
    pub const fn new() -> SpanishSyllabifier {
        SpanishSyllabifier
    }

    /// Groups vowel segments into nuclei, returned as inclusive segment ranges.
    fn nuclei(&self, segs: &[Segment], exceptions: ExceptionLevel) -> Vec<(usize, usize)> {
        let mut nuclei: Vec<(usize, usize)> = vec![];

        for (i, seg) in segs.iter().enumerate() {
            if !seg.kind.is_vowel() {
                continue;
            }

            let joins = match nuclei.last() {
                Some(&(first, last)) if last + 1 == i => {
                    let nucleus = &segs[first..=last];
                    self.joins(segs, first, &segs[last], seg, nucleus, exceptions)
                }
                _ => false,
            };

            match nuclei.last_mut() {
                Some(nucleus) if joins => nucleus.1 = i,
                _ => nuclei.push((i, i)),
            }
        }

        nuclei
    }

    fn joins(
        &self,
        segs: &[Segment],
        first: usize,
        prev: &Segment,
        cur: &Segment,
        nucleus: &[Segment],
        exceptions: ExceptionLevel,
    ) -> bool {
        if cur.marked {
            return false;
        }

        match (prev.kind, cur.kind) {
            (Kind::Strong, Kind::Strong) => return false,
            (Kind::Weak, Kind::Weak) if prev.ch == cur.ch => return false,
            _ => {}
        }

        // one strong vowel per nucleus at most
        if cur.kind == Kind::Strong && nucleus.iter().any(|s| s.kind == Kind::Strong) {
            return false;
        }

        // cli-en-te, cri-ar: a lone weak vowel after an obstruent + liquid
        // onset keeps its own syllable
        if exceptions == ExceptionLevel::Hiatus
            && nucleus.len() == 1
            && prev.kind == Kind::Weak
            && cur.kind == Kind::Strong
            && first >= 2
            && is_onset_cluster(segs[first - 2].ch, segs[first - 1].ch)
        {
            return false;
        }

        true
    }

    /// First segment of the syllable that follows nucleus `k`.
    fn boundary(
        &self,
        word: &str,
        segs: &[Segment],
        nuclei: &[(usize, usize)],
        k: usize,
        exceptions: ExceptionLevel,
    ) -> usize {
        let end = nuclei[k].1;
        let next = nuclei[k + 1].0;
        let consonants = &segs[end + 1..next];
        let n = consonants.len();

        let mut boundary = match n {
            0 => next,
            1 => next - 1,
            _ if is_onset_cluster(consonants[n - 2].ch, consonants[n - 1].ch) => next - 2,
            _ => next - 1,
        };

        if exceptions != ExceptionLevel::None && k == 0 {
            for (prefix, followers) in PREFIX_EXCEPTIONS {
                if !word.starts_with(prefix) {
                    continue;
                }

                let p = prefix.chars().count();
                if boundary < p && p < next && followers.contains(segs[p].ch) {
                    boundary = p;
                }
            }
        }

        boundary
    }

    fn stress(&self, word: &str, syllables: &[SmolStr]) -> StressIndex {
        let len = syllables.len();

        if let Some(i) = syllables
            .iter()
            .rposition(|s| s.chars().any(|c| ACCENTED.contains(c)))
        {
            return StressIndex::from_end(len - i);
        }

        match word.chars().last() {
            Some(c) if len > 1 && PENULTIMATE_FINALS.contains(c) => StressIndex::from_end(2),
            _ => StressIndex::from_end(1),
        }
    }
}

impl Syllabifier for SpanishSyllabifier {
    fn syllabify(
        &self,
        word: &str,
        exceptions: ExceptionLevel,
    ) -> Result<Syllabification, SyllabifierError> {
        if word.is_empty() {
            return Err(SyllabifierError::Empty);
        }

        let segs = segments(word);
        let nuclei = self.nuclei(&segs, exceptions);

        if nuclei.is_empty() {
            return Err(SyllabifierError::NoNucleus(SmolStr::from(word)));
        }

        let mut starts = Vec::with_capacity(nuclei.len() + 1);
        starts.push(0);
        for k in 0..nuclei.len() - 1 {
            let boundary = self.boundary(word, &segs, &nuclei, k, exceptions);
            starts.push(segs[boundary].start);
        }
        starts.push(word.len());

        let syllables: Vec<SmolStr> = starts
            .windows(2)
            .map(|w| SmolStr::from(&word[w[0]..w[1]]))
            .collect();

        let stress = self.stress(word, &syllables);
        log::trace!("syllabify: {} -> {:?} stress {}", word, syllables, stress.raw());

        Ok(Syllabification::new(syllables, stress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(word: &str, level: ExceptionLevel) -> (Vec<String>, isize) {
        let s = SpanishSyllabifier::new().syllabify(word, level).unwrap();
        (
            s.syllables.iter().map(|x| x.to_string()).collect(),
            s.stress.raw(),
        )
    }

    fn syllables(word: &str) -> Vec<String> {
        split(word, ExceptionLevel::Prefixes).0
    }

    #[test]
    fn open_syllables() {
        assert_eq!(split("kasa", ExceptionLevel::Prefixes), (vec!["ka".into(), "sa".into()], -2));
        assert_eq!(syllables("abeɾigwéis"), vec!["a", "be", "ɾi", "gwéis"]);
        assert_eq!(syllables("uʝeɾon"), vec!["u", "ʝe", "ɾon"]);
    }

    #[test]
    fn consonant_clusters() {
        assert_eq!(syllables("eskondieɾon"), vec!["es", "kon", "die", "ɾon"]);
        assert_eq!(syllables("blanka"), vec!["blan", "ka"]);
        assert_eq!(syllables("konstɾuiɾ"), vec!["kons", "tɾuiɾ"]);
        assert_eq!(syllables("atlas"), vec!["at", "las"]);
        assert_eq!(syllables("spiɾitu"), vec!["spi", "ɾi", "tu"]);
        assert_eq!(syllables("taksi"), vec!["tak", "si"]);
    }

    #[test]
    fn hiatus() {
        assert_eq!(syllables("poeta"), vec!["po", "e", "ta"]);
        assert_eq!(syllables("tío"), vec!["tí", "o"]);
        assert_eq!(syllables("ra_ul"), vec!["ra", "_ul"]);
        assert_eq!(syllables("tiito"), vec!["ti", "i", "to"]);
    }

    #[test]
    fn exception_levels() {
        assert_eq!(
            split("subɾaʝaɾ", ExceptionLevel::None).0,
            vec!["su", "bɾa", "ʝaɾ"]
        );
        assert_eq!(
            split("subɾaʝaɾ", ExceptionLevel::Prefixes).0,
            vec!["sub", "ɾa", "ʝaɾ"]
        );
        assert_eq!(
            split("kliente", ExceptionLevel::Prefixes).0,
            vec!["klien", "te"]
        );
        assert_eq!(
            split("kliente", ExceptionLevel::Hiatus).0,
            vec!["kli", "en", "te"]
        );
    }

    #[test]
    fn stress() {
        assert_eq!(split("abeɾigwéis", ExceptionLevel::Prefixes).1, -1);
        assert_eq!(split("tío", ExceptionLevel::Prefixes).1, -2);
        assert_eq!(split("ɾápida", ExceptionLevel::Prefixes).1, -3);
        assert_eq!(split("papel", ExceptionLevel::Prefixes).1, -1);
        assert_eq!(split("eskondieɾon", ExceptionLevel::Prefixes).1, -2);
        assert_eq!(split("estoj", ExceptionLevel::Prefixes).1, -1);
        assert_eq!(split("sol", ExceptionLevel::Prefixes).1, -1);
    }

    #[test]
    fn concatenation_is_lossless() {
        for word in &["abeɾigwéis", "ʰola", "ra_ul", "konstɾuiɾ", "ubulopalatofaɾingoplastia"] {
            let s = SpanishSyllabifier::new()
                .syllabify(word, ExceptionLevel::Prefixes)
                .unwrap();
            assert_eq!(s.syllables.iter().map(|x| x.as_str()).collect::<String>(), *word);
        }
    }

    #[test]
    fn errors() {
        let syllabifier = SpanishSyllabifier::new();
        assert_eq!(
            syllabifier.syllabify("", ExceptionLevel::Prefixes),
            Err(SyllabifierError::Empty)
        );
        assert_eq!(
            syllabifier.syllabify("pst", ExceptionLevel::Prefixes),
            Err(SyllabifierError::NoNucleus("pst".into()))
        );
    }
}
