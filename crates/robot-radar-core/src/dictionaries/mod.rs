//! Word dictionaries for text statistics.
//!
//! Currently a single table of syllable exceptions backing the
//! Flesch-Kincaid estimate.

pub mod syllable_dict;
