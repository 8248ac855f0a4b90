//! Sentence splitting and word tokens shared by extraction and critique.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

/// Split text into sentences on terminal punctuation and line breaks.
///
/// Fragments of two characters or fewer are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            push_sentence(&mut sentences, &current);
            current.clear();
            continue;
        }
        current.push(c);
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        // A real boundary is followed by whitespace or the end of input.
        if chars.peek().map_or(true, |next| next.is_whitespace()) {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }
    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.chars().count() > 2 {
        sentences.push(trimmed.to_string());
    }
}

/// Lowercased alphanumeric words.
pub fn word_tokens(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Jaccard overlap of the two texts' word sets. 0.0 when both are empty.
pub fn token_jaccard(a: &str, b: &str) -> f64 {
    let a: HashSet<String> = word_tokens(a).into_iter().collect();
    let b: HashSet<String> = word_tokens(b).into_iter().collect();
    set_jaccard(&a, &b)
}

pub(crate) fn set_jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
