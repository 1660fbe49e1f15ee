// ABOUTME: Twitter platform strategy with 280-character limit and thread support
// ABOUTME: Handles thread segmentation, inline hashtag placement, and tweet validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Twitter strategy.
//!
//! Threads are rendered as 3-5 segments separated by [`THREAD_SEPARATOR`];
//! validation applies the character limit per segment when the separator is
//! present.

use super::{
    collapse_punctuation_runs, extract_hashtags, lexicon_hits, render_avoid_list,
    strip_role_label, strip_wrapping_quotes, synthesize_hashtags, ContentMetadata,
    OptimizedContent, PlatformConstraints, PlatformStrategy, ValidationResult,
};
use crate::models::{ContentContext, EstimatedEngagement, PostFormat};

/// Separator between thread segments in generated output
pub const THREAD_SEPARATOR: &str = "---";

/// Maximum number of segments kept in a thread
const MAX_THREAD_SEGMENTS: usize = 5;

const CONSTRAINTS: PlatformConstraints = PlatformConstraints {
    max_length: 280,
    min_length: 50,
    max_hashtags: 2,
    supports_threads: true,
    supports_media: true,
};

/// Length band classified as high estimated engagement
const OPTIMAL_LENGTH: std::ops::RangeInclusive<usize> = 100..=250;

/// Phrases the prompt tells the generator to avoid, beyond the shared lexicons
const EXTRA_AVOID: &[&str] = &["thread incoming", "a thread \u{1f9f5}"];

/// Stateless Twitter strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterStrategy;

impl TwitterStrategy {
    fn classify_engagement(length: usize) -> EstimatedEngagement {
        if OPTIMAL_LENGTH.contains(&length) {
            EstimatedEngagement::High
        } else if length >= CONSTRAINTS.min_length && length <= CONSTRAINTS.max_length {
            EstimatedEngagement::Medium
        } else {
            EstimatedEngagement::Low
        }
    }

    /// Normalize a thread: trim segments, drop empties, keep at most five
    fn normalize_thread(text: &str) -> String {
        let segments: Vec<&str> = text
            .split(THREAD_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .take(MAX_THREAD_SEGMENTS)
            .collect();
        segments.join(&format!("\n{THREAD_SEPARATOR}\n"))
    }
}

impl PlatformStrategy for TwitterStrategy {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn constraints(&self) -> PlatformConstraints {
        CONSTRAINTS
    }

    fn generate_prompt(&self, context: &ContentContext) -> String {
        let audience = context
            .target_audience
            .as_deref()
            .unwrap_or("a general audience");
        let emoji_rule = if context.include_emojis {
            "Up to two emojis are fine if they add meaning."
        } else {
            "Do not use emojis."
        };
        let hashtag_rule = if context.include_hashtags {
            "End with at most 2 relevant hashtags."
        } else {
            "Do not include hashtags."
        };
        let cta = context.call_to_action.as_deref().map_or_else(String::new, |cta| {
            format!("Close with this call-to-action: {cta}\n")
        });

        match context.format {
            PostFormat::Single => format!(
                "Write a single tweet about: {topic}\n\
                 Tone: {tone}. Audience: {audience}.\n\
                 Hard limit: 280 characters. Aim for 100-250.\n\
                 {hashtag_rule} {emoji_rule}\n\
                 {cta}\
                 Be specific and concrete. Avoid these phrases: {avoid}.",
                topic = context.topic,
                tone = context.tone.as_str(),
                avoid = render_avoid_list(EXTRA_AVOID),
            ),
            PostFormat::Thread => format!(
                "Write a Twitter thread about: {topic}\n\
                 Tone: {tone}. Audience: {audience}.\n\
                 Write 3 to 5 tweets. Separate tweets with a line containing only \"{separator}\".\n\
                 Each tweet must stay under 280 characters. The first tweet is the hook.\n\
                 {hashtag_rule} {emoji_rule}\n\
                 {cta}\
                 Be specific and concrete. Avoid these phrases: {avoid}.",
                topic = context.topic,
                tone = context.tone.as_str(),
                separator = THREAD_SEPARATOR,
                avoid = render_avoid_list(EXTRA_AVOID),
            ),
        }
    }

    fn optimize(&self, text: &str, context: &ContentContext) -> OptimizedContent {
        let (mut hashtags, body) = extract_hashtags(text);

        if hashtags.is_empty() && context.include_hashtags {
            hashtags = synthesize_hashtags(&context.topic, CONSTRAINTS.max_hashtags);
        }
        hashtags.truncate(CONSTRAINTS.max_hashtags);

        let mut content = if context.format == PostFormat::Thread && body.contains(THREAD_SEPARATOR)
        {
            Self::normalize_thread(&body)
        } else {
            body
        };

        if !hashtags.is_empty() {
            content = format!("{content} {}", hashtags.join(" "));
        }

        let character_count = content.chars().count();
        let word_count = content.split_whitespace().count();

        let mut suggestions = Vec::new();
        if character_count < *OPTIMAL_LENGTH.start() {
            suggestions.push("Tweet is short; add a concrete detail or example".to_owned());
        }
        if !content.contains('?') {
            suggestions.push("Ask a question to invite replies".to_owned());
        }
        if !content.chars().any(|c| c.is_ascii_digit()) {
            suggestions.push("Add a specific number to ground the claim".to_owned());
        }
        if context.call_to_action.is_none() {
            suggestions.push("Consider a call-to-action to drive engagement".to_owned());
        }

        OptimizedContent {
            content,
            metadata: ContentMetadata {
                platform: self.name().to_owned(),
                character_count,
                word_count,
                estimated_engagement: Self::classify_engagement(character_count),
            },
            hashtags,
            suggestions,
        }
    }

    fn validate(&self, text: &str) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut score = 10.0f64;

        // Threads are validated per segment; single posts as a whole.
        let over_limit = if text.contains(THREAD_SEPARATOR) {
            text.split(THREAD_SEPARATOR)
                .map(str::trim)
                .any(|segment| segment.chars().count() > CONSTRAINTS.max_length)
        } else {
            text.chars().count() > CONSTRAINTS.max_length
        };

        if over_limit {
            errors.push(format!(
                "Content exceeds the {} character limit",
                CONSTRAINTS.max_length
            ));
            score -= 3.0;
        } else {
            let length = text.chars().count();
            if length < CONSTRAINTS.min_length {
                warnings.push(format!(
                    "Content is under {} characters and may look low-effort",
                    CONSTRAINTS.min_length
                ));
                score -= 1.0;
            }

            let lower = text.to_lowercase();
            for phrase in lexicon_hits(&lower) {
                warnings.push(format!("Contains overused phrase: \"{phrase}\""));
                score -= 1.0;
            }

            let (hashtags, _) = extract_hashtags(text);
            if hashtags.len() > CONSTRAINTS.max_hashtags {
                warnings.push(format!(
                    "More than {} hashtags reads as spam on Twitter",
                    CONSTRAINTS.max_hashtags
                ));
                score -= 1.0;
            }

            let has_number = text.chars().any(|c| c.is_ascii_digit());
            if has_number {
                score += 0.5;
            }
            if !text.contains('?') && !has_number {
                warnings.push("No question or number; engagement may suffer".to_owned());
                score -= 0.5;
            }
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            score: score.clamp(0.0, 10.0),
        }
    }

    fn post_process(&self, text: &str) -> String {
        let text = strip_role_label(text);
        let text = strip_wrapping_quotes(&text);
        collapse_punctuation_runs(&text).trim().to_owned()
    }
}
