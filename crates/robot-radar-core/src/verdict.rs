//! Display classification of a detection score.
//!
//! The detector owns the score; presenters own how it is worded. Both
//! mappings here are pure functions of the score so every front end (CLI,
//! MCP, JSON consumers) words a given score the same way.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scores above this are reported as likely AI-generated.
pub const LIKELY_AI_ABOVE: i32 = 70;

/// Scores at or below this are reported as likely human.
pub const LIKELY_HUMAN_AT_OR_BELOW: i32 = 40;

/// Scores above this get the "high AI patterns" recommendation.
pub const RECOMMENDATION_SPLIT: i32 = 50;

/// Three-tier reading of a detection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// Score above 70.
    LikelyAi,
    /// Score in 41..=70.
    Suspicious,
    /// Score of 40 or less.
    LikelyHuman,
}

impl Verdict {
    /// Classify a score.
    pub const fn from_score(score: i32) -> Self {
        if score > LIKELY_AI_ABOVE {
            Self::LikelyAi
        } else if score > LIKELY_HUMAN_AT_OR_BELOW {
            Self::Suspicious
        } else {
            Self::LikelyHuman
        }
    }

    /// Upper-case banner shown next to the score.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LikelyAi => "LIKELY AI-GENERATED",
            Self::Suspicious => "SUSPICIOUS / MIXED",
            Self::LikelyHuman => "LIKELY HUMAN",
        }
    }

    /// Kebab-case identifier, matching the serialized form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyAi => "likely-ai",
            Self::Suspicious => "suspicious",
            Self::LikelyHuman => "likely-human",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Two-way advice keyed off the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// Score above 50.
    HighAiPatterns,
    /// Score of 50 or less.
    NaturalWriting,
}

impl Recommendation {
    /// Pick the recommendation for a score.
    pub const fn from_score(score: i32) -> Self {
        if score > RECOMMENDATION_SPLIT {
            Self::HighAiPatterns
        } else {
            Self::NaturalWriting
        }
    }

    /// One-line summary.
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::HighAiPatterns => "High AI Patterns Detected",
            Self::NaturalWriting => "Natural Writing Detected",
        }
    }

    /// Follow-up advice for the writer.
    pub const fn advice(&self) -> &'static str {
        match self {
            Self::HighAiPatterns => "Your content lacks human variance.",
            Self::NaturalWriting => "Great flow. Want a second opinion?",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}
