//! Text segmentation.
//!
//! Sentences are whatever lies between runs of `.`, `!` and `?`; words are
//! whitespace-delimited tokens. Abbreviations, decimals and URLs are not
//! special-cased.

use regex::Regex;
use std::sync::LazyLock;

/// One or more sentence terminators, treated as a single boundary.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Fragments this short (after trimming) are punctuation debris, not sentences.
const MIN_SENTENCE_CHARS: usize = 2;

/// Split text into sentences on runs of `.`, `!` and `?`.
///
/// Each fragment is trimmed and kept only when it is longer than one
/// character. Text with no terminator at all yields a single sentence
/// (the trimmed input), provided it is long enough.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect()
}

/// Split text into whitespace-delimited words, punctuation included.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count whitespace-delimited words without collecting them.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
