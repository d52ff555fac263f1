//! Language profiles: stopword tables and stemming algorithms.
//!
//! A language profile bundles a stopword set with a Snowball
//! stemming algorithm. A project activates one or more profiles;
//! every note and every query runs through each active profile
//! independently, so a multilingual collection can be queried in
//! any configured language.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::core::error::RecallError;

/// Short technical terms indexed verbatim regardless of stopword
/// status. Whitelisted tokens are never stemmed.
static TECH_WHITELIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "c", "go", "js", "ts", "ai", "py", "sql", "css", "html", "jsx", "c#",
    ]
    .into_iter()
    .collect()
});

static EN_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["the", "and", "or", "to", "of", "in", "on", "for", "with"]
        .into_iter()
        .collect()
});

static ES_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["el", "la", "las", "los", "de", "en", "por"]
        .into_iter()
        .collect()
});

static RU_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["на", "по", "из", "под", "над", "из-за", "ко"]
        .into_iter()
        .collect()
});

/// A supported language profile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Spanish
    Es,
    /// Russian
    Ru,
}

impl Language {
    /// All supported profiles, in canonical order
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es, Language::Ru]
    }

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ru => "ru",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Ru => "Russian",
        }
    }

    /// Stopword set for this profile
    pub fn stopwords(&self) -> &'static HashSet<&'static str> {
        match self {
            Language::En => &EN_STOPWORDS,
            Language::Es => &ES_STOPWORDS,
            Language::Ru => &RU_STOPWORDS,
        }
    }

    /// Snowball stemmer for this profile
    pub fn stemmer(&self) -> Stemmer {
        let algorithm = match self {
            Language::En => Algorithm::English,
            Language::Es => Algorithm::Spanish,
            Language::Ru => Algorithm::Russian,
        };
        Stemmer::create(algorithm)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = RecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "ru" => Ok(Language::Ru),
            other => Err(RecallError::ConfigError(format!(
                "unsupported language '{other}' (supported: en, es, ru)"
            ))),
        }
    }
}

/// Check whether a token bypasses stopword filtering and stemming
pub fn is_whitelisted(token: &str) -> bool {
    TECH_WHITELIST.contains(token)
}
