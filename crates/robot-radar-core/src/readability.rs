//! Readability scoring using Flesch-Kincaid Grade Level.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`
//!
//! Sentences come from [`text::split_sentences`], words are whitespace
//! tokens, and syllables are counted per token by
//! [`dictionaries::syllable_dict`](crate::dictionaries::syllable_dict)
//! (scheme [`SYLLABLE_HEURISTIC_VERSION`]).
//!
//! The grade is consumed through the [`GradeLevel`] trait so the detector can
//! be run against another readability formula without touching its scoring.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::dictionaries::syllable_dict::SYLLABLE_HEURISTIC_VERSION;

use crate::dictionaries::syllable_dict;
use crate::text;

/// A readability formula that maps text to a US school grade level.
pub trait GradeLevel {
    /// Short identifier for the formula, recorded alongside results.
    fn name(&self) -> &'static str;

    /// Grade level of `text`. Text without words or sentences scores `0.0`.
    fn grade(&self, text: &str) -> f64;
}

/// The standard Flesch-Kincaid Grade Level formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleschKincaid;

impl GradeLevel for FleschKincaid {
    fn name(&self) -> &'static str {
        "flesch-kincaid"
    }

    fn grade(&self, text: &str) -> f64 {
        flesch_kincaid_grade(text)
    }
}

/// Counts and grade from a Flesch-Kincaid pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid Grade Level score.
    pub grade: f64,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Number of words detected.
    pub words: usize,
    /// Total syllable count.
    pub syllables: usize,
}

/// Run Flesch-Kincaid over `text`.
///
/// Returns `None` when the text has no words or no sentences, since the
/// formula divides by both.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(text: &str) -> Option<ReadabilityReport> {
    let sentences = text::split_sentences(text).len();
    let words = text::word_count(text);

    if words == 0 || sentences == 0 {
        return None;
    }

    let syllables: usize = text
        .split_whitespace()
        .map(syllable_dict::count_syllables)
        .sum();

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;

    tracing::trace!(grade, sentences, words, syllables, "readability computed");

    Some(ReadabilityReport {
        grade,
        sentences,
        words,
        syllables,
    })
}

/// Flesch-Kincaid grade of `text`, or `0.0` when it cannot be scored.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    check_readability(text).map_or(0.0, |report| report.grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_readability() {
        let report = check_readability("The cat sat on the mat. The dog ran fast.").unwrap();
        assert!(report.grade < 10.0);
        assert_eq!(report.sentences, 2);
        assert_eq!(report.words, 10);
        assert_eq!(report.syllables, 10);
    }

    #[test]
    fn known_grade_for_monosyllables() {
        // 10 words, 2 sentences, 10 syllables: 0.39*5 + 11.8*1 - 15.59
        let grade = flesch_kincaid_grade("The cat sat on the mat. The dog ran fast.");
        assert!((grade - (-1.84)).abs() < 1e-9);
    }

    #[test]
    fn dense_prose_scores_high() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = check_readability(text).unwrap();
        assert!(report.grade > 12.0, "grade was {}", report.grade);
    }

    #[test]
    fn empty_input_has_no_report() {
        assert!(check_readability("").is_none());
        assert!(check_readability("?!.").is_none());
        assert_eq!(flesch_kincaid_grade(""), 0.0);
    }

    #[test]
    fn trait_object_delegates() {
        let formula: &dyn GradeLevel = &FleschKincaid;
        assert_eq!(formula.name(), "flesch-kincaid");
        let text = "I love chocolate cake. It is delicious.";
        assert_eq!(formula.grade(text), flesch_kincaid_grade(text));
    }
}
