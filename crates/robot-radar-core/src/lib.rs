//! Core library for robot-radar.
//!
//! Estimates how likely a text is to be machine-written from surface
//! statistics: sentence-length burstiness, Flesch-Kincaid grade, and the
//! share of long words. The estimate is a transparent heuristic, not a
//! trained classifier.
//!
//! # Modules
//!
//! - [`detector`] - The scorer and its tunable [`ScoringPolicy`]
//! - [`verdict`] - Wording for a score (three tiers, two recommendations)
//! - [`readability`] - Flesch-Kincaid grade level
//! - [`text`] - Sentence and word segmentation
//! - [`stats`] - Mean and population standard deviation
//! - [`samples`] - Built-in sample texts
//! - [`markdown`] - Markdown-to-prose reduction
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use robot_radar_core::{Sample, Verdict, detector};
//!
//! let report = detector::analyze(Sample::Ai.text()).expect("sample is long enough");
//! println!("{} ({})", report.score, Verdict::from_score(report.score));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod detector;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod samples;
pub mod stats;
pub mod text;
pub mod verdict;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use detector::{DetectionReport, Detector, ScoringPolicy, analyze, analyze_with_policy};
pub use error::{ConfigError, ConfigResult, SampleError};
pub use samples::Sample;
pub use verdict::{Recommendation, Verdict};
