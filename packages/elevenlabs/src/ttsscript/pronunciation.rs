//! Term → phonetic substitution per language
//!
//! A [`PronunciationResolver`] reads two tables: the script's own table and a
//! compiler-local overlay. Lookups go overlay first, then script, per
//! `(term, language)` pair. Neither table is modified while resolving.
//!
//! Matching is case-sensitive and whole-term. When terms overlap (`API` and
//! `REST API`), the longest term starting at a position wins, and replaced text
//! is never scanned again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `term -> (language -> replacement)`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PronunciationTable(BTreeMap<String, BTreeMap<String, String>>);

impl PronunciationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the replacement for `term` in `language`
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        language: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.0
            .entry(term.into())
            .or_default()
            .insert(language.into(), replacement.into());
    }

    pub fn get(&self, term: &str, language: &str) -> Option<&str> {
        self.0
            .get(term)
            .and_then(|langs| langs.get(language))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, String>)> {
        self.0.iter()
    }

    fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String, String)> for PronunciationTable {
    fn from_iter<I: IntoIterator<Item = (String, String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (term, language, replacement) in iter {
            table.insert(term, language, replacement);
        }
        table
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PronunciationResolver<'a> {
    base: &'a PronunciationTable,
    overlay: &'a PronunciationTable,
}

impl<'a> PronunciationResolver<'a> {
    pub fn new(base: &'a PronunciationTable, overlay: &'a PronunciationTable) -> Self {
        Self { base, overlay }
    }

    /// Replacement for one term, overlay taking precedence
    pub fn lookup(&self, term: &str, language: &str) -> Option<&'a str> {
        self.overlay
            .get(term, language)
            .or_else(|| self.base.get(term, language))
    }

    /// Candidate terms for `language`, longest first then lexicographic
    fn candidates(&self, language: &str) -> Vec<(&'a str, &'a str)> {
        let mut terms: Vec<&'a str> = self.base.terms().chain(self.overlay.terms()).collect();
        terms.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        terms.dedup();

        terms
            .into_iter()
            .filter(|term| !term.is_empty())
            .filter_map(|term| self.lookup(term, language).map(|r| (term, r)))
            .collect()
    }

    pub fn resolve(&self, text: &str, language: &str) -> String {
        let candidates = self.candidates(language);
        if candidates.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut prev: Option<char> = None;
        let mut i = 0;

        'scan: while i < text.len() {
            let rest = &text[i..];
            for &(term, replacement) in &candidates {
                let after = rest.get(term.len()..).and_then(|tail| tail.chars().next());
                if rest.starts_with(term) && is_whole_term(term, prev, after) {
                    out.push_str(replacement);
                    prev = term.chars().last();
                    i += term.len();
                    continue 'scan;
                }
            }
            // rest is non-empty, so a char is always present
            if let Some(c) = rest.chars().next() {
                out.push(c);
                prev = Some(c);
                i += c.len_utf8();
            }
        }

        out
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A term edge that is a word character must not touch another word character
fn is_whole_term(term: &str, before: Option<char>, after: Option<char>) -> bool {
    let starts_word = term.chars().next().is_some_and(is_word_char);
    let ends_word = term.chars().last().is_some_and(is_word_char);

    let left_ok = !starts_word || !before.is_some_and(is_word_char);
    let right_ok = !ends_word || !after.is_some_and(is_word_char);
    left_ok && right_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str, &str)]) -> PronunciationTable {
        entries
            .iter()
            .map(|(t, l, r)| (t.to_string(), l.to_string(), r.to_string()))
            .collect()
    }

    #[test]
    fn replaces_whole_terms_only() {
        let base = table(&[("API", "en", "A P I")]);
        let overlay = PronunciationTable::new();
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(
            resolver.resolve("The API and APIs, API.", "en"),
            "The A P I and APIs, A P I."
        );
        assert_eq!(resolver.resolve("api", "en"), "api");
        assert_eq!(resolver.resolve("The API", "fr"), "The API");
    }

    #[test]
    fn longest_term_wins_on_overlap() {
        let base = table(&[("API", "en", "A P I"), ("REST API", "en", "rest A P I")]);
        let overlay = PronunciationTable::new();
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(
            resolver.resolve("A REST API is an API.", "en"),
            "A rest A P I is an A P I."
        );
    }

    #[test]
    fn overlay_beats_base() {
        let base = table(&[("SQL", "en", "S Q L")]);
        let overlay = table(&[("SQL", "en", "sequel")]);
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(resolver.resolve("SQL", "en"), "sequel");
        assert_eq!(resolver.lookup("SQL", "en"), Some("sequel"));
    }

    #[test]
    fn overlay_falls_back_per_language() {
        let base = table(&[("SQL", "de", "ess ku ell")]);
        let overlay = table(&[("SQL", "en", "sequel")]);
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(resolver.resolve("SQL", "de"), "ess ku ell");
    }

    #[test]
    fn symbol_edged_terms_match_next_to_words() {
        let base = table(&[("C++", "en", "C plus plus")]);
        let overlay = PronunciationTable::new();
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(resolver.resolve("I like C++!", "en"), "I like C plus plus!");
        assert_eq!(resolver.resolve("ABC++", "en"), "ABC++");
    }

    #[test]
    fn replacement_is_not_rescanned() {
        let base = table(&[("A", "en", "AB"), ("AB", "en", "X")]);
        let overlay = PronunciationTable::new();
        let resolver = PronunciationResolver::new(&base, &overlay);

        assert_eq!(resolver.resolve("A AB", "en"), "AB X");
    }
}
