//! Heuristic AI-writing detection.
//!
//! Scores text on how "robotic" its surface statistics look. This is an
//! explainable rule set, not a trained classifier, and the score is not a
//! calibrated probability. Three signals feed it:
//!
//! - **Burstiness**: population standard deviation of words per sentence.
//!   People mix short and long sentences; generated prose tends toward an
//!   even rhythm, so low deviation raises the score.
//! - **Grade level**: Flesch-Kincaid grade in the 8–12 band (polished,
//!   high-school register) raises the score.
//! - **Complexity**: a low share of long words (more than 6 characters)
//!   raises the score.
//!
//! Starting from a base of 40, the bonuses are added and the total clamped
//! to `[5, 98]`. Every number involved lives in [`ScoringPolicy`], whose
//! defaults are the named constants below.
//!
//! # Example
//!
//! ```
//! use robot_radar_core::detector;
//!
//! let text = "The sun is hot. The sky is blue. ".repeat(8);
//! let report = detector::analyze(&text).expect("enough words");
//! assert!(report.score >= 70);
//!
//! assert!(detector::analyze("Too short to judge.").is_none());
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::{FleschKincaid, GradeLevel};
use crate::stats;
use crate::text;
use crate::verdict::Verdict;

/// Fewest whitespace-delimited words worth scoring.
pub const DEFAULT_MIN_WORDS: usize = 30;

/// Score every text starts from.
pub const BASE_SCORE: i32 = 40;

/// Sentence-length deviation below this is "uniform".
pub const UNIFORM_RHYTHM_BELOW: f64 = 4.0;
/// Bonus for a uniform rhythm.
pub const UNIFORM_RHYTHM_BONUS: i32 = 30;

/// Sentence-length deviation below this (but not uniform) is "steady".
pub const STEADY_RHYTHM_BELOW: f64 = 7.0;
/// Bonus for a steady rhythm.
pub const STEADY_RHYTHM_BONUS: i32 = 15;

/// Lowest grade in the polished band (inclusive).
pub const GRADE_BAND_MIN: f64 = 8.0;
/// Highest grade in the polished band (inclusive).
pub const GRADE_BAND_MAX: f64 = 12.0;
/// Bonus for a grade inside the band.
pub const GRADE_BAND_BONUS: i32 = 10;

/// Words with more characters than this count as complex.
pub const COMPLEX_WORD_CHARS: usize = 6;
/// Complex-word fraction below this counts as plain vocabulary.
pub const PLAIN_VOCABULARY_BELOW: f64 = 0.15;
/// Bonus for plain vocabulary.
pub const PLAIN_VOCABULARY_BONUS: i32 = 10;

/// Lowest reportable score.
pub const MIN_SCORE: i32 = 5;
/// Highest reportable score.
pub const MAX_SCORE: i32 = 98;

/// The tunable numbers behind the score.
///
/// Deserializes with every field optional, so a config file can override a
/// single threshold and keep the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Fewest words worth scoring; shorter text yields no report.
    pub min_words: usize,
    /// Starting score.
    pub base_score: i32,
    /// Deviation threshold for a uniform rhythm.
    pub uniform_rhythm_below: f64,
    /// Bonus for a uniform rhythm.
    pub uniform_rhythm_bonus: i32,
    /// Deviation threshold for a steady rhythm.
    pub steady_rhythm_below: f64,
    /// Bonus for a steady rhythm.
    pub steady_rhythm_bonus: i32,
    /// Inclusive lower edge of the grade band.
    pub grade_band_min: f64,
    /// Inclusive upper edge of the grade band.
    pub grade_band_max: f64,
    /// Bonus for a grade inside the band.
    pub grade_band_bonus: i32,
    /// Words longer than this many characters are complex.
    pub complex_word_chars: usize,
    /// Complex-word fraction (0–1) under which vocabulary is plain.
    pub plain_vocabulary_below: f64,
    /// Bonus for plain vocabulary.
    pub plain_vocabulary_bonus: i32,
    /// Clamp floor.
    pub min_score: i32,
    /// Clamp ceiling.
    pub max_score: i32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            base_score: BASE_SCORE,
            uniform_rhythm_below: UNIFORM_RHYTHM_BELOW,
            uniform_rhythm_bonus: UNIFORM_RHYTHM_BONUS,
            steady_rhythm_below: STEADY_RHYTHM_BELOW,
            steady_rhythm_bonus: STEADY_RHYTHM_BONUS,
            grade_band_min: GRADE_BAND_MIN,
            grade_band_max: GRADE_BAND_MAX,
            grade_band_bonus: GRADE_BAND_BONUS,
            complex_word_chars: COMPLEX_WORD_CHARS,
            plain_vocabulary_below: PLAIN_VOCABULARY_BELOW,
            plain_vocabulary_bonus: PLAIN_VOCABULARY_BONUS,
            min_score: MIN_SCORE,
            max_score: MAX_SCORE,
        }
    }
}

impl ScoringPolicy {
    /// Combine raw metrics into a clamped score.
    ///
    /// Variance and vocabulary are compared unrounded; the grade arrives
    /// already rounded to one decimal (see [`Metrics`]). The floor is
    /// applied before the ceiling, so a misconfigured policy with
    /// `min_score > max_score` yields `max_score` instead of panicking.
    pub fn score(&self, metrics: &Metrics) -> i32 {
        let mut score = self.base_score;

        if metrics.sentence_variance < self.uniform_rhythm_below {
            score += self.uniform_rhythm_bonus;
        } else if metrics.sentence_variance < self.steady_rhythm_below {
            score += self.steady_rhythm_bonus;
        }

        if (self.grade_band_min..=self.grade_band_max).contains(&metrics.flesch_grade) {
            score += self.grade_band_bonus;
        }

        if metrics.complex_word_ratio < self.plain_vocabulary_below {
            score += self.plain_vocabulary_bonus;
        }

        score.max(self.min_score).min(self.max_score)
    }
}

/// Statistics the score is computed from.
///
/// The grade is rounded to one decimal, as readability tools report it, so
/// a grade of 12.04 sits inside an 8-12 band. The other two are unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Population standard deviation of words per sentence.
    pub sentence_variance: f64,
    /// Readability grade of the whole text, one decimal.
    pub flesch_grade: f64,
    /// Complex words over all words, as a fraction in `[0, 1]`.
    pub complex_word_ratio: f64,
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionReport {
    /// Heuristic AI likelihood, clamped to the policy's range (5–98 by default).
    pub score: i32,
    /// Display tier for `score`.
    pub verdict: Verdict,
    /// Readability grade, one decimal.
    pub flesch_grade: f64,
    /// Standard deviation of sentence lengths in words, one decimal.
    pub sentence_variance: f64,
    /// Percentage (0–100) of complex words, one decimal.
    pub complex_word_ratio: f64,
    /// Whitespace-delimited words in the text.
    pub word_count: usize,
    /// Sentences that survived segmentation.
    pub sentence_count: usize,
}

/// Scores text with a policy and a readability formula.
#[derive(Debug, Clone, Default)]
pub struct Detector<G = FleschKincaid> {
    policy: ScoringPolicy,
    grade_level: G,
}

impl Detector {
    /// Detector with the given policy and Flesch-Kincaid grading.
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            grade_level: FleschKincaid,
        }
    }
}

impl<G: GradeLevel> Detector<G> {
    /// Swap in another readability formula.
    pub fn with_grade_level<H: GradeLevel>(self, grade_level: H) -> Detector<H> {
        Detector {
            policy: self.policy,
            grade_level,
        }
    }

    /// The policy in use.
    pub const fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score `text`, or `None` if it is too short or has no sentences.
    #[tracing::instrument(
        skip_all,
        fields(text_len = text.len(), grade_level = self.grade_level.name())
    )]
    pub fn analyze(&self, text: &str) -> Option<DetectionReport> {
        let words = text::split_words(text);
        let word_count = words.len();
        if word_count < self.policy.min_words {
            tracing::debug!(word_count, min_words = self.policy.min_words, "too short to score");
            return None;
        }

        let sentences = text::split_sentences(text);
        if sentences.is_empty() {
            tracing::debug!(word_count, "no sentences survived segmentation");
            return None;
        }

        let sentence_lengths: Vec<f64> = sentences
            .iter()
            .map(|s| text::word_count(s) as f64)
            .collect();
        let sentence_variance = stats::population_std_dev(&sentence_lengths)?;

        let complex_words = words
            .iter()
            .filter(|w| w.chars().count() > self.policy.complex_word_chars)
            .count();

        let metrics = Metrics {
            sentence_variance,
            flesch_grade: stats::round1(self.grade_level.grade(text)),
            complex_word_ratio: complex_words as f64 / word_count as f64,
        };
        let score = self.policy.score(&metrics);

        tracing::debug!(
            score,
            sentence_variance = metrics.sentence_variance,
            flesch_grade = metrics.flesch_grade,
            complex_word_ratio = metrics.complex_word_ratio,
            word_count,
            sentence_count = sentences.len(),
            "text scored"
        );

        Some(DetectionReport {
            score,
            verdict: Verdict::from_score(score),
            flesch_grade: metrics.flesch_grade,
            sentence_variance: stats::round1(metrics.sentence_variance),
            complex_word_ratio: stats::round1(metrics.complex_word_ratio * 100.0),
            word_count,
            sentence_count: sentences.len(),
        })
    }
}

/// Score `text` with the default policy.
///
/// Returns `None` when the text has fewer than 30 words or no sentence
/// longer than one character.
pub fn analyze(text: &str) -> Option<DetectionReport> {
    analyze_with_policy(text, &ScoringPolicy::default())
}

/// Score `text` with a custom policy and Flesch-Kincaid grading.
pub fn analyze_with_policy(text: &str, policy: &ScoringPolicy) -> Option<DetectionReport> {
    Detector::new(policy.clone()).analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::Sample;

    /// 40 sentences of five one-syllable words each.
    fn uniform_text() -> String {
        [
            "The cat sat on mats.",
            "A dog ran to us.",
            "We ate bread and jam.",
            "She saw a red bird.",
        ]
        .iter()
        .cycle()
        .take(40)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    fn metrics(sentence_variance: f64, flesch_grade: f64, complex_word_ratio: f64) -> Metrics {
        Metrics {
            sentence_variance,
            flesch_grade,
            complex_word_ratio,
        }
    }

    #[test]
    fn short_text_has_no_report() {
        assert!(analyze("This is only five words.").is_none());
        assert!(analyze("").is_none());
    }

    #[test]
    fn thirty_words_is_the_minimum() {
        let text = "word ".repeat(29) + "end.";
        assert_eq!(text::word_count(&text), 30);
        assert!(analyze(&text).is_some());

        let text = "word ".repeat(28) + "end.";
        assert!(analyze(&text).is_none());
    }

    #[test]
    fn punctuation_only_tokens_have_no_sentences() {
        let text = vec!["?!"; 35].join(" ");
        assert!(analyze(&text).is_none());

        // Tokens separated by terminators leave only one-character fragments
        let text = vec!["a."; 35].join(" ");
        assert!(analyze(&text).is_none());
    }

    #[test]
    fn uniform_sentences_score_as_ai() {
        let text = uniform_text();
        let report = analyze(&text).unwrap();
        assert!(report.sentence_variance < 4.0, "{report:?}");
        assert!(report.complex_word_ratio < 15.0, "{report:?}");
        assert!(report.score >= 70, "{report:?}");
        assert_eq!(report.verdict, Verdict::LikelyAi);
        assert_eq!(report.sentence_count, 40);
        assert_eq!(report.word_count, 200);
    }

    #[test]
    fn human_sample_is_burstier_and_scores_lower() {
        let uniform = analyze(&uniform_text()).unwrap();
        let human_text = Sample::Human.text();
        let human = analyze(human_text).unwrap();

        assert_eq!(human.word_count, human_text.split_whitespace().count());
        assert!(human.sentence_variance > uniform.sentence_variance);
        assert!(human.score < uniform.score);
        assert_eq!(human.sentence_variance, 7.8);
        assert_eq!(human.complex_word_ratio, 13.6);
        assert_eq!(human.sentence_count, 7);
    }

    #[test]
    fn run_on_sentence_is_one_sentence() {
        let text = "this sentence keeps going and going without any terminal \
                    punctuation because the writer never learned where to stop and so \
                    it runs on and on past thirty one words in total";
        assert_eq!(text::word_count(text), 31);
        assert_eq!(text::split_sentences(text), vec![text.trim()]);

        let report = analyze(text).unwrap();
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.sentence_variance, 0.0);
        assert_eq!(report.word_count, 31);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let text = Sample::Ai.text();
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn score_accumulates_bonuses() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.score(&metrics(2.0, 10.0, 0.10)), 90);
        assert_eq!(policy.score(&metrics(5.0, 10.0, 0.10)), 75);
        assert_eq!(policy.score(&metrics(9.0, 10.0, 0.10)), 60);
        assert_eq!(policy.score(&metrics(9.0, 3.0, 0.50)), 40);
    }

    #[test]
    fn threshold_edges() {
        let policy = ScoringPolicy::default();
        // Variance thresholds are strict
        assert_eq!(policy.score(&metrics(4.0, 0.0, 1.0)), 55);
        assert_eq!(policy.score(&metrics(7.0, 0.0, 1.0)), 40);
        // Grade band is inclusive on both ends
        assert_eq!(policy.score(&metrics(9.0, 8.0, 1.0)), 50);
        assert_eq!(policy.score(&metrics(9.0, 12.0, 1.0)), 50);
        assert_eq!(policy.score(&metrics(9.0, 12.01, 1.0)), 40);
        // Complexity threshold is strict
        assert_eq!(policy.score(&metrics(9.0, 0.0, 0.15)), 40);
    }

    #[test]
    fn score_is_clamped() {
        let generous = ScoringPolicy {
            base_score: 95,
            ..ScoringPolicy::default()
        };
        assert_eq!(generous.score(&metrics(1.0, 10.0, 0.0)), MAX_SCORE);

        let harsh = ScoringPolicy {
            base_score: -20,
            ..ScoringPolicy::default()
        };
        assert_eq!(harsh.score(&metrics(9.0, 0.0, 1.0)), MIN_SCORE);
    }

    #[test]
    fn inverted_clamp_does_not_panic() {
        let policy = ScoringPolicy {
            min_score: 90,
            max_score: 10,
            ..ScoringPolicy::default()
        };
        assert_eq!(policy.score(&metrics(9.0, 0.0, 1.0)), 10);
    }

    #[test]
    fn custom_min_words() {
        let policy = ScoringPolicy {
            min_words: 5,
            ..ScoringPolicy::default()
        };
        let report = analyze_with_policy("One two three four five.", &policy).unwrap();
        assert_eq!(report.word_count, 5);
    }

    #[test]
    fn alternate_grade_level() {
        let text = uniform_text();
        let detector = Detector::new(ScoringPolicy::default()).with_grade_level(FixedGrade(10.0));
        let report = detector.analyze(&text).unwrap();
        assert_eq!(report.flesch_grade, 10.0);
        assert_eq!(report.score, 90);
    }

    struct FixedGrade(f64);

    impl GradeLevel for FixedGrade {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn grade(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn grade_band_uses_one_decimal_grade() {
        let text = uniform_text();
        let score_for = |grade| {
            Detector::new(ScoringPolicy::default())
                .with_grade_level(FixedGrade(grade))
                .analyze(&text)
                .unwrap()
        };

        let near_top = score_for(12.04);
        assert_eq!(near_top.flesch_grade, 12.0);
        assert_eq!(near_top.score, 90);

        let near_bottom = score_for(7.96);
        assert_eq!(near_bottom.flesch_grade, 8.0);
        assert_eq!(near_bottom.score, 90);

        assert_eq!(score_for(12.06).score, 80);
        assert_eq!(score_for(7.94).score, 80);
    }

    #[test]
    fn complex_ratio_rounds_like_other_readability_tools() {
        // 1 of 80 words is complex: 1.25% rounds to the even digit
        let text = format!("{} elephants.", vec!["cat"; 79].join(" "));
        let report = analyze(&text).unwrap();
        assert_eq!(report.word_count, 80);
        assert_eq!(report.complex_word_ratio, 1.2);
    }

    #[test]
    fn report_serializes_with_verdict() {
        let report = analyze(&uniform_text()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "likely-ai");
        assert!(json["score"].as_i64().is_some());
        assert!(json["word_count"].as_u64().is_some());
    }
}
