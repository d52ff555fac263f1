//! Language-aware text pipeline.
//!
//! Normalization, tokenization, per-language stopword filtering
//! and Snowball stemming. Pure functions over in-memory text; the
//! active profile set is always passed in by the caller.

pub mod language;
pub mod pipeline;

pub use language::{is_whitelisted, Language};
pub use pipeline::{normalize_text, prepare_for_index, prepare_for_query, tokenize};
