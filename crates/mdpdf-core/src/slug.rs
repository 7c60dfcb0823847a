//! Heading anchor slugs
//!
//! Generates GitHub-style slugs from heading text, deduplicated across one
//! document: the second "Intro" becomes `intro-1`, the third `intro-2`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Everything a slug drops: anything but letters, combining marks, digits,
/// connector punctuation, spaces and hyphens
static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} -]").expect("slug pattern is valid")
});

/// Generate a GitHub-style slug from text.
///
/// Lowercases, drops punctuation, symbols and whitespace other than plain
/// spaces, and turns each space into a hyphen. Letters (with their
/// combining marks) and digits of any script are kept.
///
/// # Examples
///
/// ```
/// use mdpdf_core::slug::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Über uns"), "über-uns");
/// ```
pub fn slugify(text: &str) -> String {
    STRIP_RE
        .replace_all(&text.to_lowercase(), "")
        .replace(' ', "-")
}

/// Stateful slug generator for one document.
///
/// Remembers every slug it has issued so repeated heading text still yields
/// unique anchors. Create one per conversion and drop it afterwards.
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, unique among the slugs issued so far
    pub fn slug(&mut self, text: &str) -> String {
        let original = slugify(text);
        let mut result = original.clone();

        while self.occurrences.contains_key(&result) {
            let count = self.occurrences.entry(original.clone()).or_insert(0);
            *count += 1;
            result = format!("{}-{}", original, count);
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_with_punctuation() {
        assert_eq!(slugify("What's new? (v2.0)"), "whats-new-v20");
    }

    #[test]
    fn test_slugify_keeps_hyphens_and_underscores() {
        assert_eq!(slugify("snake_case and kebab-case"), "snake_case-and-kebab-case");
    }

    #[test]
    fn test_slugify_keeps_combining_marks() {
        assert_eq!(slugify("cafe\u{301} au lait"), "cafe\u{301}-au-lait");
        assert_eq!(slugify("हिन्दी भाषा"), "हिन्दी-भाषा");
    }

    #[test]
    fn test_slugify_drops_symbols_and_tabs() {
        assert_eq!(slugify("Launch 😀 day"), "launch--day");
        assert_eq!(slugify("a\tb"), "ab");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_duplicates_get_counter() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro"), "intro");
        assert_eq!(slugger.slug("Intro"), "intro-1");
        assert_eq!(slugger.slug("Intro"), "intro-2");
        assert_eq!(slugger.slug("Other"), "other");
    }

    #[test]
    fn test_duplicate_skips_existing_suffix() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a-2");
    }

    #[test]
    fn test_fresh_slugger_per_document() {
        let mut first = Slugger::new();
        assert_eq!(first.slug("Intro"), "intro");
        let mut second = Slugger::new();
        assert_eq!(second.slug("Intro"), "intro");
    }
}
