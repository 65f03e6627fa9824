//! Token normalization for corpus ingestion.
//!
//! This module provides the single normalization rule applied to every raw
//! token before it enters the graph. Normalization handles the part-of-speech
//! tag suffixes found in Google Ngram corpora and reduces tokens to a
//! lowercase ASCII alphabet.
//!
//! # Examples
//!
//! ```
//! use wordwalk::analysis::normalize;
//!
//! assert_eq!(normalize("Running_VERB"), "running");
//! assert_eq!(normalize("dog_END_"), "");
//! assert_eq!(normalize("don't"), "dont");
//! ```

/// Tag suffixes that cause the whole token to be dropped.
///
/// A dropped token forms no relation; callers must treat the empty result
/// as "no token".
const SKIP_SUFFIXES: &[&str] = &["_END_", "_PRT"];

/// Part-of-speech tag suffixes that are stripped from the token.
const STRIP_SUFFIXES: &[&str] = &[
    "_NOUN", "_CONJ", "_ADV", "_PRON", "_VERB", "_ADP", "_DET", "_ADJ", "_NUM",
];

/// Normalize a raw token into its canonical form.
///
/// Rules, applied in order:
///
/// 1. If the token ends with a skip suffix (sentence boundary or particle
///    tag), return the empty string. The caller must not form a relation
///    for it.
/// 2. If it ends with a part-of-speech tag suffix, remove the suffix
///    (first match only).
/// 3. Lowercase ASCII letters, keep ASCII digits and hyphens, and drop
///    every other character (including non-ASCII) by omission.
///
/// The result contains only `[a-z0-9-]` characters, or is empty. This
/// function never fails; unrecognized input degrades to an empty or shorter
/// string.
pub fn normalize(token: &str) -> String {
    for suffix in SKIP_SUFFIXES {
        if token.ends_with(suffix) {
            return String::new();
        }
    }

    let mut token = token;
    for suffix in STRIP_SUFFIXES {
        if let Some(stripped) = token.strip_suffix(suffix) {
            token = stripped;
            break;
        }
    }

    let mut normalized = String::with_capacity(token.len());
    for ch in token.chars() {
        match ch {
            'A'..='Z' => normalized.push(ch.to_ascii_lowercase()),
            'a'..='z' | '0'..='9' | '-' => normalized.push(ch),
            _ => {}
        }
    }

    normalized
}
