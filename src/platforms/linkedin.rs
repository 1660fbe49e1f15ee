// ABOUTME: LinkedIn platform strategy with long-form limits and paragraph reflow
// ABOUTME: Handles hook-window checks, hashtag band recommendations, and feed formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! LinkedIn strategy.
//!
//! LinkedIn truncates the feed preview after roughly 210 characters ("see
//! more"), so the hook window gets its own validation check. Wall-of-text
//! posts are reflowed into short paragraphs before hashtags are re-appended
//! as a trailing line.

use super::{
    collapse_punctuation_runs, extract_hashtags, lexicon_hits, render_avoid_list,
    strip_role_label, strip_wrapping_quotes, synthesize_hashtags, ContentMetadata,
    OptimizedContent, PlatformConstraints, PlatformStrategy, ValidationResult,
};
use crate::models::{ContentContext, EstimatedEngagement};
use crate::quality::lexicons::HOOK_OPENERS;
use regex::Regex;
use std::sync::LazyLock;

const CONSTRAINTS: PlatformConstraints = PlatformConstraints {
    max_length: 3000,
    min_length: 150,
    max_hashtags: 7,
    supports_threads: false,
    supports_media: true,
};

/// Recommended hashtag band; outside it is a warning, above `max_hashtags`
/// also costs score
const RECOMMENDED_HASHTAGS: std::ops::RangeInclusive<usize> = 3..=5;

/// Feed preview cutoff ("see more")
const HOOK_WINDOW: usize = 210;

/// Length band classified as high estimated engagement
const OPTIMAL_LENGTH: std::ops::RangeInclusive<usize> = 1300..=2000;

/// Reflow triggers when the body has fewer line breaks than this
const MIN_LINE_BREAKS: usize = 4;

/// Reflow targets roughly this many sentences per paragraph
const SENTENCES_PER_PARAGRAPH: usize = 2;

/// Reflow starts a new paragraph past this many characters
const PARAGRAPH_CHAR_BUDGET: usize = 200;

/// Fallback professional tags used to pad synthesis up to the recommended
/// minimum
const DEFAULT_TAGS: &[&str] = &[
    "#Leadership",
    "#ProfessionalDevelopment",
    "#Innovation",
    "#WorkCulture",
];

/// Phrases the prompt tells the generator to avoid, beyond the shared lexicons
const EXTRA_AVOID: &[&str] = &["i'm humbled", "i'm thrilled to announce", "humbled and honored"];

static SPACE_BEFORE_PUNCT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[ \t]+([,.!?;:])").ok());

static EXCESS_BLANK_LINES: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\n{3,}").ok());

/// Stateless LinkedIn strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedInStrategy;

impl LinkedInStrategy {
    fn classify_engagement(length: usize) -> EstimatedEngagement {
        if OPTIMAL_LENGTH.contains(&length) {
            EstimatedEngagement::High
        } else if length >= CONSTRAINTS.min_length && length <= CONSTRAINTS.max_length {
            EstimatedEngagement::Medium
        } else {
            EstimatedEngagement::Low
        }
    }

    /// Split text into sentences, keeping terminal punctuation attached
    fn split_sentences(text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                // Swallow the rest of a punctuation run
                while chars.peek().is_some_and(|&next| matches!(next, '.' | '!' | '?')) {
                    current.push(chars.next().unwrap_or('.'));
                }
                let sentence = current.trim().to_owned();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                current.clear();
            }
        }

        let rest = current.trim();
        if !rest.is_empty() {
            sentences.push(rest.to_owned());
        }
        sentences
    }

    /// Re-chunk a wall of text into short paragraphs separated by blank lines
    ///
    /// Applies only when the text has fewer than [`MIN_LINE_BREAKS`] existing
    /// line breaks; already-formatted posts pass through untouched.
    fn reflow(text: &str) -> String {
        if text.matches('\n').count() >= MIN_LINE_BREAKS {
            return text.to_owned();
        }

        let sentences = Self::split_sentences(text);
        if sentences.len() <= SENTENCES_PER_PARAGRAPH {
            return text.to_owned();
        }

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_len = 0usize;

        for sentence in sentences {
            let sentence_len = sentence.chars().count();
            let too_long = current_len + sentence_len > PARAGRAPH_CHAR_BUDGET;
            if !current.is_empty() && (current.len() >= SENTENCES_PER_PARAGRAPH || too_long) {
                paragraphs.push(current.join(" "));
                current.clear();
                current_len = 0;
            }
            current_len += sentence_len;
            current.push(sentence);
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        paragraphs.join("\n\n")
    }

    /// Whether the pre-"see more" window carries an attention hook
    fn has_strong_hook(text: &str) -> bool {
        let window: String = text.chars().take(HOOK_WINDOW).collect();
        let lower = window.to_lowercase();
        window.contains('?')
            || window.chars().any(|c| c.is_ascii_digit())
            || HOOK_OPENERS
                .iter()
                .any(|opener| lower.trim_start().starts_with(opener))
    }
}

impl PlatformStrategy for LinkedInStrategy {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn constraints(&self) -> PlatformConstraints {
        CONSTRAINTS
    }

    fn generate_prompt(&self, context: &ContentContext) -> String {
        let audience = context
            .target_audience
            .as_deref()
            .unwrap_or("professionals in the field");
        let emoji_rule = if context.include_emojis {
            "Sparse emojis are acceptable as visual anchors."
        } else {
            "Do not use emojis."
        };
        let hashtag_rule = if context.include_hashtags {
            "End with 3-5 relevant hashtags on their own line."
        } else {
            "Do not include hashtags."
        };
        let cta = context.call_to_action.as_deref().map_or_else(String::new, |cta| {
            format!("Close with this call-to-action: {cta}\n")
        });

        format!(
            "Write a LinkedIn post about: {topic}\n\
             Tone: {tone}. Audience: {audience}.\n\
             Length: 1300-2000 characters, hard limit 3000.\n\
             The first 210 characters must hook the reader; they are all the feed shows.\n\
             Use short paragraphs with blank lines between them.\n\
             {hashtag_rule} {emoji_rule}\n\
             {cta}\
             Ground every claim in a concrete example or number. Avoid these phrases: {avoid}.",
            topic = context.topic,
            tone = context.tone.as_str(),
            avoid = render_avoid_list(EXTRA_AVOID),
        )
    }

    fn optimize(&self, text: &str, context: &ContentContext) -> OptimizedContent {
        let (mut hashtags, body) = extract_hashtags(text);

        if hashtags.is_empty() && context.include_hashtags {
            hashtags = synthesize_hashtags(&context.topic, *RECOMMENDED_HASHTAGS.end());
            // Pad thin topics up to the recommended minimum, skipping duplicates
            for default in DEFAULT_TAGS {
                if hashtags.len() >= *RECOMMENDED_HASHTAGS.start() {
                    break;
                }
                if !hashtags
                    .iter()
                    .any(|tag| tag.eq_ignore_ascii_case(default))
                {
                    hashtags.push((*default).to_owned());
                }
            }
        }
        hashtags.truncate(CONSTRAINTS.max_hashtags);

        let needs_reflow = body.matches('\n').count() < MIN_LINE_BREAKS;
        let mut content = Self::reflow(&body);

        if !hashtags.is_empty() {
            content = format!("{content}\n\n{}", hashtags.join(" "));
        }

        let character_count = content.chars().count();
        let word_count = content.split_whitespace().count();

        let mut suggestions = Vec::new();
        if character_count < *OPTIMAL_LENGTH.start() {
            suggestions
                .push("Post is short for LinkedIn; expand with a story or example".to_owned());
        }
        if !content.contains('?') {
            suggestions.push("Ask a question to prompt comments".to_owned());
        }
        if !content.chars().any(|c| c.is_ascii_digit()) {
            suggestions.push("Add a concrete number or result".to_owned());
        }
        if context.call_to_action.is_none() {
            suggestions.push("Close with a call-to-action inviting discussion".to_owned());
        }
        if needs_reflow {
            suggestions
                .push("Single-paragraph drafts were reflowed; review the paragraph breaks".to_owned());
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

        let length = text.chars().count();
        if length > CONSTRAINTS.max_length {
            errors.push(format!(
                "Content exceeds the {} character limit",
                CONSTRAINTS.max_length
            ));
            score -= 3.0;
        } else {
            if length < CONSTRAINTS.min_length {
                errors.push(format!(
                    "Content is under the {} character minimum for feed visibility",
                    CONSTRAINTS.min_length
                ));
                score -= 2.0;
            }

            let lower = text.to_lowercase();
            for phrase in lexicon_hits(&lower) {
                warnings.push(format!("Contains overused phrase: \"{phrase}\""));
                score -= 0.5;
            }

            let (hashtags, _) = extract_hashtags(text);
            if hashtags.len() > CONSTRAINTS.max_hashtags {
                warnings.push(format!(
                    "More than {} hashtags hurts reach on LinkedIn",
                    CONSTRAINTS.max_hashtags
                ));
                score -= 1.0;
            } else if !hashtags.is_empty() && !RECOMMENDED_HASHTAGS.contains(&hashtags.len()) {
                warnings.push(format!(
                    "Hashtag count outside the recommended {}-{} band",
                    RECOMMENDED_HASHTAGS.start(),
                    RECOMMENDED_HASHTAGS.end()
                ));
            }

            if !Self::has_strong_hook(text) {
                warnings.push(format!(
                    "First {HOOK_WINDOW} characters carry no hook; readers may not expand the post"
                ));
                score -= 0.5;
            }

            if !text.contains('?') {
                warnings.push("No question anywhere; comment rate may suffer".to_owned());
                score -= 1.0;
            }

            if text.chars().any(|c| c.is_ascii_digit()) {
                score += 1.0;
            }

            let line_breaks = text.matches('\n').count();
            if (MIN_LINE_BREAKS..=30).contains(&line_breaks) {
                score += 0.5;
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
        let text = collapse_punctuation_runs(&text);
        let text = EXCESS_BLANK_LINES
            .as_ref()
            .map_or_else(|| text.clone(), |re| re.replace_all(&text, "\n\n").into_owned());
        let text = SPACE_BEFORE_PUNCT
            .as_ref()
            .map_or_else(|| text.clone(), |re| re.replace_all(&text, "$1").into_owned());
        text.trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflow_leaves_formatted_text_alone() {
        let formatted = "One.\n\nTwo.\n\nThree.\n\nFour.";
        assert_eq!(LinkedInStrategy::reflow(formatted), formatted);
    }

    #[test]
    fn test_reflow_chunks_wall_of_text() {
        let wall = "First sentence here. Second sentence here. Third sentence here. \
                    Fourth sentence here. Fifth sentence here.";
        let reflowed = LinkedInStrategy::reflow(wall);
        assert!(reflowed.contains("\n\n"));
        // Two sentences per paragraph
        assert!(reflowed.starts_with("First sentence here. Second sentence here.\n\n"));
    }

    #[test]
    fn test_hook_detection() {
        assert!(LinkedInStrategy::has_strong_hook(
            "Why do 9 out of 10 migrations stall?"
        ));
        let vague = "There are many things to say about working. ".repeat(10);
        assert!(!LinkedInStrategy::has_strong_hook(&vague));
    }

    #[test]
    fn test_post_process_normalizes_spacing() {
        let strategy = LinkedInStrategy;
        let cleaned = strategy.post_process("Post: Great results , team !!\n\n\n\nMore soon .");
        assert_eq!(cleaned, "Great results, team!\n\nMore soon.");
    }
}
