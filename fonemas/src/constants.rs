//! Static rule tables.
//!
//! Every table is an ordered slice. Several of them are order-significant: an
//! earlier rewrite can create or foreclose a later match, so entries must be
//! applied front to back and never through an unordered map.
//!
//! ```
//! use fonemas::constants::{CONSONANTS, IPA_TO_SAMPA};
//!
//! let x = CONSONANTS.iter().position(|(k, _)| *k == "x").unwrap();
//! let j = CONSONANTS.iter().position(|(k, _)| *k == "j").unwrap();
//! assert!(x < j);
//! assert!(IPA_TO_SAMPA.contains(&('θ', "T")));
//! ```

/// Primary stress marker.
pub const PRIMARY_STRESS: char = 'ˈ';

/// Secondary stress marker, only used on `-mente` adverbs.
pub const SECONDARY_STRESS: char = 'ˌ';

/// Placeholder left by the normalizer in front of a vowel that carried a
/// diaeresis. It forces a hiatus and is removed with the accents.
pub const DIAERESIS_PLACEHOLDER: char = '_';

/// Default SAMPA primary stress marker.
pub const DEFAULT_SAMPA_STRESS: &str = "\"";

/// Spoken names of letters standing on their own ("b" is read "be").
pub static LETTERS: &[(&str, &str)] = &[
    ("b", "be"),
    ("c", "θe"),
    ("ch", "ʧe"),
    ("d", "de"),
    ("f", "efe"),
    ("g", "ge"),
    ("h", "haʧe"),
    ("j", "jota"),
    ("k", "ka"),
    ("l", "ele"),
    ("ll", "eʎe"),
    ("m", "eme"),
    ("n", "ene"),
    ("p", "pe"),
    ("q", "ku"),
    ("r", "erre"),
    ("s", "ese"),
    ("t", "te"),
    ("v", "ube"),
    ("w", "ubedoble"),
    ("x", "ekis"),
    ("z", "θeta"),
];

/// Punctuation and quotes replaced by a space while cleaning.
pub static SYMBOLS: &[char] = &[
    '(', ')', '¿', '?', '¡', '!', '«', '»', '"', '\u{201c}', '\u{2018}', '\u{2019}', '[', ']',
    '—', '…', ',', ';', ':', '\'', '.', '–', '\u{201d}', '-',
];

/// Non-standard diacritics mapped onto Spanish forms while cleaning.
pub static CLEANING_DIACRITICS: &[(char, &str)] = &[
    ('à', "á"),
    ('è', "é"),
    ('ì', "í"),
    ('ò', "ó"),
    ('ù', "ú"),
    ('æ', "e"),
    ('ä', "_a"),
    ('ë', "_e"),
    ('ï', "_i"),
    ('ö', "_o"),
    ('ã', "á"),
    ('õ', "ó"),
    ('â', "a"),
    ('ê', "e"),
    ('î', "i"),
    ('ô', "o"),
    ('û', "u"),
    ('ç', "θ"),
];

/// Accent stripping applied once stress markers are in place.
pub static PHONOLOGY_DIACRITICS: &[(char, &str)] = &[
    ('á', "a"),
    ('à', "a"),
    ('ä', "a"),
    ('é', "e"),
    ('è', "e"),
    ('ë', "e"),
    ('ú', "u"),
    ('ù', "u"),
    ('ü', "u"),
    ('í', "i"),
    ('ì', "i"),
    ('ï', "i"),
    ('ó', "o"),
    ('ò', "o"),
    ('ö', "o"),
    (DIAERESIS_PLACEHOLDER, ""),
];

/// Orthography to phonology. Order matters: `x` must become `ks` before `j`
/// becomes `x`, the tap must be written before the trill placeholder is
/// resolved, and digraphs must be consumed before their single letters.
pub static CONSONANTS: &[(&str, &str)] = &[
    ("w", "b"),
    ("v", "b"),
    ("z", "θ"),
    ("ñ", "ɲ"),
    ("x", "ks"),
    ("j", "x"),
    ("r", "ɾ"),
    ("R", "r"),
    ("ce", "θe"),
    ("cé", "θé"),
    ("cë", "θë"),
    ("ci", "θi"),
    ("cí", "θí"),
    ("cï", "θï"),
    ("cj", "θj"),
    ("ch", "ʧ"),
    ("c", "k"),
    ("qu", "k"),
    ("ll", "ʎ"),
    ("ph", "f"),
    ("hie", "ʝe"),
    ("h", ""),
];

/// Trill contexts: after n, l or s, at the start of a word, and the `rr`
/// digraph. The match becomes a temporary `R` that the consonant table
/// resolves after every remaining `r` has become the tap.
pub static TRILL: (&str, &str) = (r"([nls])r|(^|\s)r|rr", "${1}${2}R");

/// Soft and hard `g`, and the silent or sounded `u` after it.
pub static G_RULES: &[(&str, &str)] = &[
    // g before a front vowel is the velar fricative
    (r"g([eiéíëï])", "x${1}"),
    // gue, gui: the u only marks the hard g
    (r"gu([eiéíëï])", "g${1}"),
    // güe, güi: the u is pronounced
    (r"gü([eiéí])", "gw${1}"),
    // gua, guo
    (r"gu([aoáó])", "gw${1}"),
];

/// High vowels next to another vowel of the same syllable become glides.
/// Falling diphthongs first, then rising ones.
pub static DIPHTHONGS: &[(&str, &str)] = &[
    (r"([aeoáéó])i", "${1}j"),
    (r"([aeioáéó])u", "${1}w"),
    (r"i([aeoáéó])", "j${1}"),
    (r"u([aeoiáéó])", "w${1}"),
];

/// Place names where `x` is the velar fricative (the jota sound).
pub static X_EXCEPTIONS: &[&str] = &[
    "mexico",
    "mexicos",
    "oaxaca",
    "texas",
    "mexicano",
    "mexicanos",
    "mexicana",
    "mexicanas",
    "oaxaqueño",
    "oaxaqueños",
    "oaxaqueña",
    "oaxaqueñas",
    "texano",
    "texanos",
    "texana",
    "texanas",
    "ximena",
    "ximenez",
    "mexia",
];

/// Stops and the fricative they soften into.
pub static ALLOPHONES: &[(char, char)] = &[('b', 'β'), ('d', 'ð'), ('g', 'ɣ')];

/// Coarticulation cascade, one sweep per rule, in this order. A run of
/// spaces, hyphens and stress marks may sit between the two sounds.
pub static COARTICULATIONS: &[(&str, &str)] = &[
    // voicing assimilation before voiced consonants
    (r"θ([\s\-ˈ]*)([bdgβðɣmnɲlʎrɾ])", "ð${1}${2}"),
    (r"s([\s\-ˈ]*)([bdgβðɣmnɲlʎrɾ])", "z${1}${2}"),
    (r"f([\s\-ˈ]*)([bdgβðɣmnɲʎ])", "v${1}${2}"),
    // fortition after nasals and laterals
    (r"([lmn])([\s\-ˈ]*)ð", "${1}${2}d"),
    // nasal place assimilation
    (r"n([\s\-ˈ]*)([bpm])", "m${1}${2}"),
    (r"n([\s\-ˈ]*)f", "ɱ${1}f"),
    (r"n([\s\-ˈ]*)k", "ŋ${1}k"),
    (r"n([\s\-ˈ]*)[gɣ]", "ŋ${1}g"),
    (r"n([\s\-ˈ]*)x", "ŋ${1}x"),
    // uvularization before back vowels and the labial glide
    (r"x([\s\-ˈ]*)([uow])", "χ${1}${2}"),
];

/// IPA to SAMPA. The primary stress entry is overridden by the caller's marker.
pub static IPA_TO_SAMPA: &[(char, &str)] = &[
    ('β', "B"),
    ('ð', "D"),
    ('ɣ', "G"),
    ('ʎ', "L"),
    ('r', "rr"),
    ('ɾ', "r"),
    ('ɱ', "M"),
    ('ŋ', "N"),
    ('ɲ', "J"),
    ('ʧ', "tS"),
    ('ʝ', "y"),
    ('χ', "4"),
    ('θ', "T"),
    (PRIMARY_STRESS, DEFAULT_SAMPA_STRESS),
    (SECONDARY_STRESS, "%"),
    ('ʰ', "h"),
];

/// Vowels (glides included) that can receive a migrating consonant in rehash.
pub const REHASH_VOWELS: &str = "aeioujwăĕŏ";

/// Plain and accented vowels, used by the y-rules and epenthesis.
pub const VOWELS: &str = "aeiouáéíóú";
