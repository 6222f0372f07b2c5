/*! Spanish phonological, phonetic and SAMPA transcription.

Turns Spanish text into three parallel representations, each one split
into words and syllables:

- phonology, an abstract IPA transcription with lexical stress marked,
- phonetics, the same transcription with allophones and coarticulation,
- SAMPA, an ASCII transliteration of the phonetic one.

Syllable boundaries and stress come from a [`Syllabifier`]; the built-in
[`SpanishSyllabifier`] is used unless another one is supplied.

# Usage examples

```
use fonemas::Transcription;

let t = Transcription::new("Averigüéis")?;
assert_eq!(t.phonology.words(), &["abeɾiˈgwejs"]);
assert_eq!(t.phonetics.words(), &["aβeɾiˈɣwejs"]);
assert_eq!(t.sampa.words(), &["aBeri\"Gwejs"]);
# Ok::<(), fonemas::TranscriptionError>(())
```

Options are passed through a [`TranscriptionConfig`]:

```
use fonemas::{Transcription, TranscriptionConfig};

let config = TranscriptionConfig {
    mono: true,
    stress: "'".into(),
    ..TranscriptionConfig::default()
};
let t = Transcription::with_config("sol", &config)?;
assert_eq!(t.sampa.words(), &["'sol"]);
# Ok::<(), fonemas::TranscriptionError>(())
```

A command line front-end lives in [`fonemas-bin`] in the same repository.

[`fonemas-bin`]: ../fonemas_bin/index.html

*/

#![warn(missing_docs)]
pub mod normalizer;
pub mod phonetics;
pub mod phonology;
pub mod rehash;
pub mod rewrite;
pub mod sampa;
pub mod syllabifier;
pub mod tokenizer;
pub mod transcription;

pub mod constants;
pub(crate) mod types;

pub use self::syllabifier::{SpanishSyllabifier, Syllabifier, SyllabifierError};
pub use self::transcription::{
    Transcription, TranscriptionConfig, TranscriptionError, TranscriptionResult,
};
pub use self::types::{ExceptionLevel, InvalidExceptionLevel, Values};

/// Installs `env_logger` for callers that have no logger of their own.
#[cfg(feature = "logging")]
pub fn enable_logging() {
    let _ = env_logger::try_init();
}
