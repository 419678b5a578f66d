//! Built-in sample texts for trying the detector.
//!
//! One sample reads like model output (even rhythm, encyclopedic tone), the
//! other like a person venting (fragments, a long ramble, a question).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

const AI_SAMPLE: &str = "Artificial intelligence is a rapidly evolving field of computer science. \
It involves creating systems that can perform tasks requiring human intelligence. \
These tasks include visual perception, speech recognition, and decision-making. \
Machine learning is a subset of AI that focuses on data analysis.";

const HUMAN_SAMPLE: &str = "I honestly hate waking up early. It's the worst. Yesterday? \
I broke a coffee mug. Snap. Just like that. It hit the floor and I just stood there \
staring at it for five minutes because, honestly, what else can you do at 6 AM?";

/// A built-in sample, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Sample {
    /// Uniform, encyclopedic prose.
    Ai,
    /// Casual, bursty prose.
    Human,
}

impl Sample {
    /// Every sample, in display order.
    pub const ALL: [Self; 2] = [Self::Ai, Self::Human];

    /// Lowercase name used for lookup.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Human => "human",
        }
    }

    /// The sample text.
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Ai => AI_SAMPLE,
            Self::Human => HUMAN_SAMPLE,
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(Self::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sample {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SampleError::Unknown {
                name: s.to_string(),
                available: Self::available(),
            })
    }
}
