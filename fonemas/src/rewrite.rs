//! Ordered rewrite rules.
//!
//! Two kinds of rule drive every stage. [`PatternRule`] wraps a compiled
//! regular expression whose context is consumed through capture groups and
//! written back by the replacement. [`ContextRule`] rewrites a literal only
//! when the single characters around it satisfy a [`Context`]; it stands in
//! for lookbehind and lookahead, which the `regex` crate does not offer.
//! Both perform one left-to-right, non-overlapping sweep per application.
use std::borrow::Cow;

use regex::Regex;

use crate::tokenizer::case_handling::{is_letter, is_not_letter};
use crate::tokenizer::is_word_edge;

/// Constraint on the character next to a [`ContextRule`] target. `None`
/// stands for the start or end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Any,
    /// Text edge or whitespace.
    WordEdge,
    /// Text edge or anything that is not a letter.
    NotLetter,
    /// Text edge or a character outside the set.
    NoneOf(&'static str),
    /// A character from the set.
    OneOf(&'static str),
    /// A letter outside the set.
    LetterExcept(&'static str),
}

impl Context {
    #[inline(always)]
    pub fn accepts(&self, ch: Option<char>) -> bool {
        match *self {
            Context::Any => true,
            Context::WordEdge => is_word_edge(ch),
            Context::NotLetter => is_not_letter(ch),
            Context::NoneOf(set) => ch.map_or(true, |c| !set.contains(c)),
            Context::OneOf(set) => ch.map_or(false, |c| set.contains(c)),
            Context::LetterExcept(set) => ch.map_or(false, |c| is_letter(c) && !set.contains(c)),
        }
    }
}

/// Literal rewrite guarded by the characters immediately before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextRule {
    pub target: &'static str,
    pub replacement: &'static str,
    pub before: Context,
    pub after: Context,
}

impl ContextRule {
    pub const fn new(target: &'static str, replacement: &'static str) -> ContextRule {
        ContextRule {
            target,
            replacement,
            before: Context::Any,
            after: Context::Any,
        }
    }

    pub const fn before(mut self, context: Context) -> ContextRule {
        self.before = context;
        self
    }

    pub const fn after(mut self, context: Context) -> ContextRule {
        self.after = context;
        self
    }

    /// Replaces every match. The contexts look at the input text, never at
    /// replacements already written.
    pub fn apply(&self, text: &str) -> String {
        if self.target.is_empty() {
            return text.to_owned();
        }

        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        let mut i = 0;

        while i < text.len() {
            let tail = &text[i..];

            if tail.starts_with(self.target) && self.before.accepts(prev) {
                let next = tail[self.target.len()..].chars().next();
                if self.after.accepts(next) {
                    out.push_str(self.replacement);
                    prev = self.target.chars().last();
                    i += self.target.len();
                    continue;
                }
            }

            let ch = match tail.chars().next() {
                Some(ch) => ch,
                None => break,
            };
            out.push(ch);
            prev = Some(ch);
            i += ch.len_utf8();
        }

        out
    }
}

/// Applies each context rule once, in order.
pub fn apply_context_rules(text: &str, rules: &[ContextRule]) -> String {
    rules
        .iter()
        .fold(text.to_owned(), |acc, rule| rule.apply(&acc))
}

/// Regular expression rewrite; `$n` in the replacement refers to groups.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    replacement: Cow<'static, str>,
}

impl PatternRule {
    pub fn new<R>(pattern: &str, replacement: R) -> Result<PatternRule, regex::Error>
    where
        R: Into<Cow<'static, str>>,
    {
        Ok(PatternRule {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    #[inline(always)]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_ref())
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Compiles a constant rule table. Only called from `Lazy` initializers on
/// tables shipped with the crate.
pub(crate) fn compile_table(table: &[(&'static str, &'static str)]) -> Vec<PatternRule> {
    table
        .iter()
        .map(|&(pattern, replacement)| {
            PatternRule::new(pattern, replacement).expect("rule table pattern must compile")
        })
        .collect()
}

/// Applies each pattern rule once, in order.
pub fn apply_pattern_rules(text: &str, rules: &[PatternRule]) -> String {
    rules
        .iter()
        .fold(text.to_owned(), |acc, rule| rule.apply(&acc).into_owned())
}

/// Plain substring table, applied entry by entry.
pub fn replace_literals(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Single character table, applied entry by entry.
pub fn replace_chars(text: &str, table: &[(char, &str)]) -> String {
    table
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replace(*from, to))
}
