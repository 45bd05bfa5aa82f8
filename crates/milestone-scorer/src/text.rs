//! Text matching shared by the heuristic factors.

use regex::Regex;

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A compiled, case-insensitive keyword list.
pub struct KeywordMatcher {
    patterns: Vec<(&'static str, Regex)>,
}

impl KeywordMatcher {
    /// Each keyword must match as a whole word (or whole phrase).
    pub fn whole_word(keywords: &[&'static str]) -> Self {
        Self::compile(keywords, |kw| format!(r"(?i)\b{}\b", regex::escape(kw)))
    }

    /// Each keyword must match at the start of a word; `architect` matches `architecture`.
    pub fn word_prefix(keywords: &[&'static str]) -> Self {
        Self::compile(keywords, |kw| format!(r"(?i)\b{}", regex::escape(kw)))
    }

    fn compile(keywords: &[&'static str], pattern: impl Fn(&str) -> String) -> Self {
        let patterns = keywords
            .iter()
            .filter_map(|kw| Regex::new(&pattern(kw)).ok().map(|re| (*kw, re)))
            .collect();
        Self { patterns }
    }

    /// Keywords present in `text`, in list order. Each keyword counts once.
    pub fn matched<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, re)| re.is_match(text))
            .map(|(kw, _)| *kw)
    }

    pub fn count(&self, text: &str) -> usize {
        self.matched(text).count()
    }

    pub fn any(&self, text: &str) -> bool {
        self.patterns.iter().any(|(_, re)| re.is_match(text))
    }
}
