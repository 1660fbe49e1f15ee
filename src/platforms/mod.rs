// ABOUTME: Platform strategy abstraction for per-platform content rules
// ABOUTME: Defines the strategy trait, shared text helpers, and validation/optimization result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # Platform Strategies
//!
//! Each supported platform implements [`PlatformStrategy`]: constraints,
//! prompt template, optimization, validation, and post-processing. Variants
//! are pure additions; a new platform plugs in without touching existing
//! ones. Strategies are stateless unit structs shared as statics, so
//! concurrent requests never contend on them.

mod linkedin;
pub mod registry;
mod twitter;

pub use linkedin::LinkedInStrategy;
pub use registry::{lookup, Platform};
pub use twitter::TwitterStrategy;

use crate::models::{ContentContext, EstimatedEngagement};
use crate::quality::lexicons::{JARGON_PHRASES, SLOP_PHRASES};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Compile-time platform constraints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConstraints {
    /// Hard character limit
    pub max_length: usize,
    /// Minimum useful length
    pub min_length: usize,
    /// Hard maximum hashtag count
    pub max_hashtags: usize,
    /// Whether the platform has a native thread concept
    pub supports_threads: bool,
    /// Whether the platform supports media attachments
    pub supports_media: bool,
}

/// Result of platform validation
///
/// Never constructed as an error: failing validation is data, with
/// `is_valid = false` iff at least one entry landed in `errors`. Warnings
/// never affect validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// False iff at least one error was raised
    pub is_valid: bool,
    /// Blocking problems
    pub errors: Vec<String>,
    /// Non-blocking problems
    pub warnings: Vec<String>,
    /// Deduction/bonus score starting from 10, clamped to [0,10]
    pub score: f64,
}

/// Metadata computed on the final optimized text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    /// Platform identifier
    pub platform: String,
    /// Character count including any re-appended hashtag line
    pub character_count: usize,
    /// Word count including any re-appended hashtag line
    pub word_count: usize,
    /// Length-band engagement classification
    pub estimated_engagement: EstimatedEngagement,
}

/// Result of platform optimization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedContent {
    /// Final text, hashtags re-attached
    pub content: String,
    /// Hashtags in order of appearance or synthesis, length bounded by the
    /// platform's `max_hashtags`
    pub hashtags: Vec<String>,
    /// Counts and engagement classification for the final text
    pub metadata: ContentMetadata,
    /// Platform-specific improvement suggestions
    pub suggestions: Vec<String>,
}

/// Per-platform content rules
///
/// Implementations must be pure: the same inputs always give the same
/// outputs, and `post_process` must be idempotent.
pub trait PlatformStrategy: Send + Sync {
    /// Platform identifier ("twitter", "linkedin")
    fn name(&self) -> &'static str;

    /// Platform constraints
    fn constraints(&self) -> PlatformConstraints;

    /// Render the deterministic generation prompt for a request context
    fn generate_prompt(&self, context: &ContentContext) -> String;

    /// Restructure text for the platform: hashtag extraction/synthesis,
    /// reflow, counts, engagement classification, suggestions
    fn optimize(&self, text: &str, context: &ContentContext) -> OptimizedContent;

    /// Check text against platform rules, producing errors/warnings and a
    /// deduction score
    fn validate(&self, text: &str) -> ValidationResult;

    /// Clean raw generator output (role labels, wrapping quotes,
    /// punctuation runs). Idempotent.
    fn post_process(&self, text: &str) -> String;
}

// ============================================================================
// Shared text helpers
// ============================================================================

/// Words dropped when synthesizing hashtags from a topic
const HASHTAG_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "your", "about", "what", "when", "have",
    "will", "into", "over", "them", "they", "are", "was", "were", "how",
];

static HASHTAG_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").ok());

static ROLE_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:tweet|post|thread|linkedin post|caption)\s*:\s*").ok());

static EXCLAMATION_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"!{2,}").ok());

static QUESTION_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\?{2,}").ok());

/// Extract hashtags in order of appearance and return the body with them
/// stripped
pub(crate) fn extract_hashtags(text: &str) -> (Vec<String>, String) {
    let Some(re) = HASHTAG_TOKEN.as_ref() else {
        return (Vec::new(), text.to_owned());
    };

    let hashtags: Vec<String> = re.find_iter(text).map(|m| m.as_str().to_owned()).collect();
    if hashtags.is_empty() {
        return (Vec::new(), text.to_owned());
    }

    let body = re.replace_all(text, "");
    // Collapse the doubled spaces left behind by removed tags
    let body = body
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n");

    (hashtags, body.trim().to_owned())
}

/// Build hashtag candidates from topic words: drop short/common words,
/// title-case the remainder, attach the hash marker
pub(crate) fn synthesize_hashtags(topic: &str, cap: usize) -> Vec<String> {
    topic
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| word.len() > 3 && !HASHTAG_STOP_WORDS.contains(&word.as_str()))
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("#{}{}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .filter(|tag| tag.len() > 1)
        .take(cap)
        .collect()
}

/// Strip leading role labels like "Tweet:" or "Post:", repeatedly so the
/// operation is idempotent
pub(crate) fn strip_role_label(text: &str) -> String {
    let Some(re) = ROLE_LABEL.as_ref() else {
        return text.to_owned();
    };

    let mut current = text.to_owned();
    loop {
        let stripped = re.replace(&current, "").into_owned();
        if stripped == current {
            return current;
        }
        current = stripped;
    }
}

/// Strip wrapping quote characters, repeatedly so the operation is idempotent
pub(crate) fn strip_wrapping_quotes(text: &str) -> String {
    let mut current = text.trim();
    loop {
        let stripped = ['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}']
            .iter()
            .find_map(|&q| {
                let closing = match q {
                    '\u{201c}' => '\u{201d}',
                    '\u{2018}' => '\u{2019}',
                    other => other,
                };
                if current.len() >= 2 && current.starts_with(q) && current.ends_with(closing) {
                    Some(current[q.len_utf8()..current.len() - closing.len_utf8()].trim())
                } else {
                    None
                }
            });
        match stripped {
            Some(inner) => current = inner,
            None => return current.to_owned(),
        }
    }
}

/// Collapse repeated terminal punctuation (`!!!` to `!`, `???` to `?`)
pub(crate) fn collapse_punctuation_runs(text: &str) -> String {
    let text = EXCLAMATION_RUN
        .as_ref()
        .map_or_else(|| text.to_owned(), |re| re.replace_all(text, "!").into_owned());
    QUESTION_RUN
        .as_ref()
        .map_or_else(|| text.clone(), |re| re.replace_all(&text, "?").into_owned())
}

/// Count unique slop and jargon phrases present in the lowercased text
pub(crate) fn lexicon_hits(lower: &str) -> Vec<&'static str> {
    SLOP_PHRASES
        .iter()
        .chain(JARGON_PHRASES.iter())
        .filter(|phrase| lower.contains(*phrase))
        .copied()
        .collect()
}

/// Render the avoid-phrase list for prompt templates
pub(crate) fn render_avoid_list(extra: &[&str]) -> String {
    let mut phrases: Vec<&str> = SLOP_PHRASES
        .iter()
        .chain(JARGON_PHRASES.iter())
        .copied()
        .collect();
    phrases.extend_from_slice(extra);
    phrases.join(", ")
}
