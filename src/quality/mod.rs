// ABOUTME: Heuristic content quality assessment for generated social posts
// ABOUTME: Combines lexicon matching, engagement signals, and readability statistics into scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # Content Quality Scoring
//!
//! Deterministic, purely lexical/statistical quality assessment of generated
//! text. The scorer never fails: degenerate input (empty string, extremely
//! long text, non-ASCII) produces boundary scores instead of errors.
//!
//! All heuristics here are intentionally shallow. There is no semantic or
//! grammatical understanding; a phrase match is a substring match, an
//! engagement signal is a character-class test.

pub mod lexicons;
mod readability;
mod scorer;

pub use readability::{flesch_reading_ease, sentence_variety};
pub use scorer::{score, REGENERATION_THRESHOLD};

use serde::{Deserialize, Serialize};

/// Quality scores across assessment dimensions, each clamped to [0,10]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Weighted composite of the other dimensions, rounded to one decimal
    pub overall: f64,
    /// Penalized by AI-slop and jargon hits
    pub authenticity: f64,
    /// Driven by engagement-signal count, penalized when generic
    pub engagement: f64,
    /// Flesch Reading Ease mapped onto [0,10]
    pub clarity: f64,
    /// Sentence-variety statistic mapped onto [0,10]
    pub platform_fit: f64,
}

impl QualityScore {
    /// All-zero score used for degenerate input
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            overall: 0.0,
            authenticity: 0.0,
            engagement: 0.0,
            clarity: 0.0,
            platform_fit: 0.0,
        }
    }
}

/// Issues found during quality assessment, ordered by discovery
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityIssues {
    /// Problems severe enough to justify a corrective regeneration
    pub critical: Vec<String>,
    /// Problems worth reporting but not regenerating over
    pub warnings: Vec<String>,
    /// Improvement hints surfaced to the caller
    pub suggestions: Vec<String>,
}

/// Raw metrics backing the composite scores
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    /// Flesch Reading Ease, [0,100]
    pub readability_score: f64,
    /// Coefficient of variation of per-sentence word counts
    pub sentence_variety: f64,
    /// Unique AI-slop phrases matched
    pub slop_count: usize,
    /// Number of engagement signals present (0-5)
    pub engagement_elements: usize,
}

/// Complete result of a quality assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentQualityResult {
    /// Dimension scores
    pub score: QualityScore,
    /// Issues found
    pub issues: QualityIssues,
    /// Raw metrics
    pub metrics: QualityMetrics,
}
