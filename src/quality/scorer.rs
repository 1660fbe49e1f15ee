// ABOUTME: Deterministic quality scorer combining lexicon, engagement, and readability signals
// ABOUTME: Pure function from text to scores, issues, and metrics; never fails on any input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! The quality scorer.
//!
//! `score` is a pure function: no I/O, no shared state, deterministic for a
//! given input. Composite weights: authenticity 0.3, engagement 0.3, clarity
//! 0.2, platform fit 0.2.

use super::lexicons::{
    ACTION_VERBS, GENERIC_OPENERS, HOOK_OPENERS, JARGON_PHRASES, SLOP_PHRASES,
    SPECIFIC_EXAMPLE_MARKERS,
};
use super::{
    flesch_reading_ease, sentence_variety, ContentQualityResult, QualityIssues, QualityMetrics,
    QualityScore,
};
use regex::Regex;
use std::sync::LazyLock;

/// Character length above which digit-free, example-free text counts as generic
const GENERIC_LENGTH_THRESHOLD: usize = 100;

/// Overall score below which a critical issue triggers regeneration
pub const REGENERATION_THRESHOLD: f64 = 5.0;

static LIST_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*\u{2022}]|\d+[.)])\s+").ok());

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Collect lexicon phrases present in the lowercased text, each at most once
fn matched_phrases(lower: &str, lexicon: &[&'static str]) -> Vec<&'static str> {
    lexicon
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .copied()
        .collect()
}

/// Count the independent engagement signals present in the text
fn engagement_signals(text: &str, lower: &str) -> (usize, bool, bool) {
    let has_question = text.contains('?');
    let has_number = text.chars().any(|c| c.is_ascii_digit());
    let has_list = LIST_MARKER
        .as_ref()
        .is_some_and(|re| re.is_match(text));
    let has_hook = lower
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|first| {
            let first = first.trim_start();
            HOOK_OPENERS.iter().any(|opener| first.starts_with(opener))
        });
    let has_action_verb = ACTION_VERBS.iter().any(|verb| lower.contains(verb));

    let count = usize::from(has_question)
        + usize::from(has_number)
        + usize::from(has_list)
        + usize::from(has_hook)
        + usize::from(has_action_verb);

    (count, has_question, has_number)
}

/// Whether the text reads as generic filler
fn is_generic(text: &str, lower: &str, has_number: bool) -> bool {
    if GENERIC_OPENERS.iter().any(|opener| lower.contains(opener)) {
        return true;
    }

    let has_example = SPECIFIC_EXAMPLE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker));

    !has_number && !has_example && text.len() > GENERIC_LENGTH_THRESHOLD
}

/// Score a piece of text
///
/// Pure and total: degenerate input (empty string, pathologically long
/// string) produces boundary scores rather than an error.
#[must_use]
pub fn score(text: &str) -> ContentQualityResult {
    if text.trim().is_empty() {
        return ContentQualityResult {
            score: QualityScore::zero(),
            issues: QualityIssues {
                critical: vec!["Content is empty".to_owned()],
                warnings: Vec::new(),
                suggestions: Vec::new(),
            },
            metrics: QualityMetrics::default(),
        };
    }

    let lower = text.to_lowercase();

    let slop_hits = matched_phrases(&lower, SLOP_PHRASES);
    let jargon_hits = matched_phrases(&lower, JARGON_PHRASES);
    let (engagement_count, has_question, has_number) = engagement_signals(text, &lower);
    let readability = flesch_reading_ease(text);
    let variety = sentence_variety(text);
    let generic = is_generic(text, &lower, has_number);

    let authenticity =
        2.0f64.mul_add(-(slop_hits.len() as f64), 10.0 - jargon_hits.len() as f64);
    let authenticity = authenticity.clamp(0.0, 10.0);

    let mut engagement = (3.0 * engagement_count as f64).clamp(0.0, 10.0);
    if generic {
        engagement = (engagement - 3.0).clamp(0.0, 10.0);
    }

    let clarity = (readability / 10.0).clamp(0.0, 10.0);
    let platform_fit = 10.0f64.mul_add(variety, 5.0).clamp(0.0, 10.0);

    let overall = round1(
        0.2f64.mul_add(
            platform_fit,
            0.2f64.mul_add(clarity, 0.3f64.mul_add(authenticity, 0.3 * engagement)),
        ),
    );

    let mut issues = QualityIssues::default();

    if generic {
        issues
            .critical
            .push("Content reads as generic filler with no specific details or numbers".to_owned());
    }
    for phrase in &slop_hits {
        issues
            .warnings
            .push(format!("Overused AI phrase: \"{phrase}\""));
    }
    for phrase in &jargon_hits {
        issues
            .warnings
            .push(format!("Corporate jargon: \"{phrase}\""));
    }
    if !has_question {
        issues
            .suggestions
            .push("Add a question to invite replies".to_owned());
    }
    if !has_number {
        issues
            .suggestions
            .push("Include a specific number or statistic".to_owned());
    }
    if variety < 0.2 {
        issues
            .suggestions
            .push("Vary sentence length to improve rhythm".to_owned());
    }

    ContentQualityResult {
        score: QualityScore {
            overall,
            authenticity,
            engagement,
            clarity,
            platform_fit,
        },
        issues,
        metrics: QualityMetrics {
            readability_score: readability,
            sentence_variety: variety,
            slop_count: slop_hits.len(),
            engagement_elements: engagement_count,
        },
    }
}
