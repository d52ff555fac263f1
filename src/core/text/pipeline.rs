//! Text normalization, tokenization and stemming.
//!
//! The pipeline is a pure function over in-memory text: normalize,
//! split into word tokens, then run every active language profile
//! independently (stopword filter + whitelist + Snowball stem).
//! Positions restart at 0 for each language pass, so phrase
//! adjacency is only meaningful within a single pass.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::text::language::{is_whitelisted, Language};
use crate::core::types::Token;

// Regex patterns compiled once at startup
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Normalize raw text: lowercase, collapse whitespace runs to a
/// single space, trim.
///
/// # Examples
///
/// ```
/// use recall::core::text::normalize_text;
///
/// assert_eq!(normalize_text("  Hello   WORLD\n\n  мир  "), "hello world мир");
/// ```
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = WHITESPACE_RE.replace_all(&lowered, " ");
    collapsed.trim().to_string()
}

/// Split normalized text into word tokens.
///
/// A token is a maximal run of word characters (letters, digits,
/// underscore); punctuation is discarded at the boundaries. There
/// is no minimum-length filter: single-character tokens survive.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run one language pass over raw tokens: whitelist, stopword
/// filter, stem. Order is preserved; dropped tokens leave no gap.
fn language_pass(tokens: &[String], language: Language) -> Vec<String> {
    let stemmer = language.stemmer();
    let stopwords = language.stopwords();

    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        if is_whitelisted(token) {
            out.push(token.clone());
            continue;
        }
        if stopwords.contains(token.as_str()) {
            continue;
        }
        out.push(stemmer.stem(token).into_owned());
    }
    out
}

/// Prepare document text for indexing.
///
/// Returns the concatenation of every active profile's stemmed
/// stream. Positions are assigned per pass, starting at 0 and
/// incrementing once per emitted token; the same source word can
/// therefore occupy the same position under two different language
/// passes.
pub fn prepare_for_index(text: &str, languages: &[Language]) -> Vec<Token> {
    let normalized = normalize_text(text);
    let tokens = tokenize(&normalized);

    let mut out = Vec::new();
    for language in languages {
        for (position, stem) in language_pass(&tokens, *language).into_iter().enumerate() {
            out.push(Token { stem, position });
        }
    }
    out
}

/// Prepare query text for matching.
///
/// Runs the same per-profile filtering and stemming as
/// [`prepare_for_index`] but yields bare stems. Original token
/// order is preserved and repeated words are NOT deduplicated:
/// repeating a query word legitimately raises its frequency
/// contribution.
pub fn prepare_for_query(text: &str, languages: &[Language]) -> Vec<String> {
    let normalized = normalize_text(text);
    let tokens = tokenize(&normalized);

    let mut out = Vec::new();
    for language in languages {
        out.extend(language_pass(&tokens, *language));
    }
    out
}
