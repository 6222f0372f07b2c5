//! Word splitting and character classes shared by the rewrite stages.
use std::str::SplitWhitespace;

pub mod case_handling;

pub trait Tokenize {
    /// Whitespace-separated words, empty tokens dropped.
    fn words(&self) -> SplitWhitespace<'_>;

    /// Number of words `words` yields.
    fn word_count(&self) -> usize {
        self.words().count()
    }
}

impl Tokenize for str {
    fn words(&self) -> SplitWhitespace<'_> {
        self.split_whitespace()
    }
}

/// True at the start or end of the text, or on whitespace.
#[inline(always)]
pub fn is_word_edge(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

/// Rebuilds `s` with every word passed through `f`; whitespace is kept as
/// is and `None` leaves the word untouched.
pub fn map_words<F>(s: &str, mut f: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(s.len());
    let mut start: Option<usize> = None;

    let mut flush = |out: &mut String, word: &str| match f(word) {
        Some(replacement) => out.push_str(&replacement),
        None => out.push_str(word),
    };

    for (i, ch) in s.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                flush(&mut out, &s[begin..i]);
            }
            out.push(ch);
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(begin) = start {
        flush(&mut out, &s[begin..]);
    }

    out
}

/// Splits on whitespace and hyphens, dropping empty tokens.
pub fn split_boundaries(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty())
}
