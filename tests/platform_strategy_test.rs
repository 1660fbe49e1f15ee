// ABOUTME: Integration tests for the Twitter and LinkedIn platform strategies
// ABOUTME: Covers optimization, validation deductions, post-processing idempotency, and prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use postsmith::models::{ContentContext, EstimatedEngagement, PostFormat, Tone};
use postsmith::platforms::{lookup, LinkedInStrategy, PlatformStrategy, TwitterStrategy};

fn context(topic: &str, include_hashtags: bool) -> ContentContext {
    ContentContext {
        topic: topic.to_owned(),
        tone: Tone::Conversational,
        target_audience: None,
        include_hashtags,
        include_emojis: false,
        call_to_action: None,
        format: PostFormat::Single,
    }
}

// ============================================================================
// Post-processing
// ============================================================================

#[test]
fn test_twitter_post_process_idempotent() {
    let strategy = TwitterStrategy;
    let inputs = [
        "Tweet: \"Big news!!! We shipped v2??\"",
        "  plain text already clean  ",
        "Tweet: Tweet: doubled label",
        "'single quoted!!!'",
        "",
    ];

    for input in inputs {
        let once = strategy.post_process(input);
        let twice = strategy.post_process(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn test_linkedin_post_process_idempotent() {
    let strategy = LinkedInStrategy;
    let inputs = [
        "Post: Great quarter , everyone !!\n\n\n\nWe grew 12% .",
        "\"Wrapped in quotes?? Yes!!\"",
        "Already\n\nclean text.",
    ];

    for input in inputs {
        let once = strategy.post_process(input);
        let twice = strategy.post_process(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn test_post_process_strips_label_and_quotes() {
    let strategy = TwitterStrategy;
    let cleaned = strategy.post_process("Tweet: \"We cut deploy time by 80%!!!\"");
    assert_eq!(cleaned, "We cut deploy time by 80%!");
}

// ============================================================================
// Optimization
// ============================================================================

#[test]
fn test_twitter_optimize_caps_hashtags() {
    let strategy = TwitterStrategy;
    let ctx = context("rust tooling", true);
    let optimized = strategy.optimize("Great release #One #Two #Three #Four", &ctx);

    assert!(optimized.hashtags.len() <= strategy.constraints().max_hashtags);
    assert_eq!(optimized.hashtags, vec!["#One", "#Two"]);
}

#[test]
fn test_twitter_optimize_synthesizes_from_topic() {
    let strategy = TwitterStrategy;
    let ctx = context("rust async runtime internals", true);
    let optimized = strategy.optimize("Shipping beta 2 today", &ctx);

    assert_eq!(optimized.hashtags, vec!["#Rust", "#Async"]);
    assert!(optimized.content.ends_with("#Rust #Async"));
    assert_eq!(
        optimized.metadata.character_count,
        optimized.content.chars().count()
    );
    assert_eq!(
        optimized.metadata.word_count,
        optimized.content.split_whitespace().count()
    );
}

#[test]
fn test_twitter_optimize_without_hashtags_requested() {
    let strategy = TwitterStrategy;
    let ctx = context("rust tooling", false);
    let optimized = strategy.optimize("Shipping beta 2 today", &ctx);

    assert!(optimized.hashtags.is_empty());
    assert_eq!(optimized.content, "Shipping beta 2 today");
}

#[test]
fn test_twitter_engagement_bands() {
    let strategy = TwitterStrategy;
    let ctx = context("testing", false);

    let optimal = strategy.optimize(&"a".repeat(150), &ctx);
    assert_eq!(
        optimal.metadata.estimated_engagement,
        EstimatedEngagement::High
    );

    let short = strategy.optimize(&"a".repeat(60), &ctx);
    assert_eq!(
        short.metadata.estimated_engagement,
        EstimatedEngagement::Medium
    );

    let tiny = strategy.optimize("hey", &ctx);
    assert_eq!(tiny.metadata.estimated_engagement, EstimatedEngagement::Low);
}

#[test]
fn test_linkedin_optimize_wall_of_text_scenario() {
    let strategy = LinkedInStrategy;
    let ctx = context("career growth", true);

    // A ~2500 character single paragraph with no line breaks
    let sentence = "We keep hearing that careers are linear, but every promotion I have \
                    seen came from a sideways move that taught someone a new skill. ";
    let wall = sentence.repeat(19);
    assert!(wall.chars().count() > 2400);
    assert!(!wall.contains('\n'));

    let optimized = strategy.optimize(&wall, &ctx);

    // Hashtags synthesized from the topic and padded into the recommended band
    assert!(
        (3..=5).contains(&optimized.hashtags.len()),
        "got {:?}",
        optimized.hashtags
    );
    assert!(optimized.hashtags.contains(&"#Career".to_owned()));

    // At least one paragraph break inserted
    assert!(optimized.content.contains("\n\n"));

    // Engagement classification consistent with the final length band
    let length = optimized.metadata.character_count;
    let expected = if (1300..=2000).contains(&length) {
        EstimatedEngagement::High
    } else if (150..=3000).contains(&length) {
        EstimatedEngagement::Medium
    } else {
        EstimatedEngagement::Low
    };
    assert_eq!(optimized.metadata.estimated_engagement, expected);

    // Hashtag line re-appended at the end, counted in the totals
    assert!(optimized.content.ends_with(&optimized.hashtags.join(" ")));
    assert_eq!(length, optimized.content.chars().count());
}

#[test]
fn test_linkedin_optimize_respects_hard_hashtag_cap() {
    let strategy = LinkedInStrategy;
    let ctx = context("hiring", true);
    let tagged =
        "We are hiring. #One #Two #Three #Four #Five #Six #Seven #Eight #Nine";
    let optimized = strategy.optimize(tagged, &ctx);

    assert_eq!(optimized.hashtags.len(), strategy.constraints().max_hashtags);
}

#[test]
fn test_linkedin_optimize_preserves_existing_formatting() {
    let strategy = LinkedInStrategy;
    let ctx = context("engineering culture", false);
    let formatted = "Hook line.\n\nPoint one.\n\nPoint two.\n\nPoint three.\n\nClosing question?";
    let optimized = strategy.optimize(formatted, &ctx);

    assert_eq!(optimized.content, formatted);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_twitter_over_limit_scenario() {
    let strategy = TwitterStrategy;
    let result = strategy.validate(&"a".repeat(300));

    assert!(!result.is_valid);
    assert!(result
        .errors
        .iter()
        .any(|e| e.contains("280 character limit")));
    assert!((result.score - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_over_limit_always_invalid_on_both_platforms() {
    let twitter = TwitterStrategy;
    let linkedin = LinkedInStrategy;

    assert!(!twitter.validate(&"x".repeat(281)).is_valid);
    assert!(!linkedin.validate(&"x".repeat(3001)).is_valid);
}

#[test]
fn test_twitter_under_minimum_is_warning_only() {
    let strategy = TwitterStrategy;
    let result = strategy.validate("Short but legal tweet?");

    assert!(result.is_valid);
    assert!(!result.warnings.is_empty());
    assert!(result.score < 10.0);
}

#[test]
fn test_linkedin_under_minimum_is_error() {
    let strategy = LinkedInStrategy;
    let result = strategy.validate("Too short for the feed.");

    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("150")));
}

#[test]
fn test_twitter_slop_deductions() {
    let strategy = TwitterStrategy;
    let clean = strategy.validate("We cut p99 latency from 900ms to 210ms. How? Batching.");
    let sloppy =
        strategy.validate("Unlock synergy and leverage this game-changer for your paradigm!");

    assert!(clean.score > sloppy.score);
    assert!(sloppy.warnings.iter().any(|w| w.contains("synergy")));
}

#[test]
fn test_linkedin_hook_window_warning() {
    let strategy = LinkedInStrategy;

    // Long enough to pass the minimum, but the first 210 chars carry no hook
    let flabby = "There is a certain quality to teams that consistently deliver software, \
                  and it is rarely about raw talent or heroics. It tends to come from \
                  habits, from calm planning, and from people trusting each other enough \
                  to flag problems early and often.";
    let result = strategy.validate(flabby);

    assert!(result.is_valid);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("210 characters")));
}

#[test]
fn test_linkedin_numeric_bonus_and_break_bonus() {
    let strategy = LinkedInStrategy;

    let base = "Something about what made the difference for our team this quarter, and how \
                we noticed it early enough to act on the signal across every squad involved \
                in delivery over the last several release cycles of the platform group.";
    let improved = "What made the difference for our 4 squads this quarter?\n\nWe tracked 3 \
                    signals.\n\nCycle time fell 22%.\n\nEscaped bugs fell by half.\n\nWhich \
                    signal would you track first?";

    let base_score = strategy.validate(base).score;
    let improved_score = strategy.validate(improved).score;
    assert!(improved_score > base_score);
}

#[test]
fn test_hashtag_band_warnings() {
    let twitter = TwitterStrategy;
    let spammy = "Check the release notes now #a #b #c plus more detail to clear the minimum";
    let result = twitter.validate(spammy);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("hashtags")));
}

// ============================================================================
// Prompts and registry
// ============================================================================

#[test]
fn test_prompts_are_deterministic_and_platform_specific() {
    let ctx = context("rust web services", true);

    let twitter_prompt = TwitterStrategy.generate_prompt(&ctx);
    assert_eq!(twitter_prompt, TwitterStrategy.generate_prompt(&ctx));
    assert!(twitter_prompt.contains("280"));
    assert!(twitter_prompt.contains("Avoid these phrases"));
    assert!(twitter_prompt.contains("rust web services"));

    let linkedin_prompt = LinkedInStrategy.generate_prompt(&ctx);
    assert!(linkedin_prompt.contains("210"));
    assert!(linkedin_prompt.contains("LinkedIn"));
    assert_ne!(twitter_prompt, linkedin_prompt);
}

#[test]
fn test_twitter_thread_prompt_differs_from_single() {
    let mut ctx = context("scaling postgres", false);
    let single = TwitterStrategy.generate_prompt(&ctx);

    ctx.format = PostFormat::Thread;
    let thread = TwitterStrategy.generate_prompt(&ctx);

    assert_ne!(single, thread);
    assert!(thread.contains("3 to 5 tweets"));
    assert!(thread.contains("---"));
}

#[test]
fn test_registry_lookup_and_fallback() {
    assert_eq!(lookup("twitter").name(), "twitter");
    assert_eq!(lookup("LINKEDIN").name(), "linkedin");
    // Unknown platforms resolve to the documented default
    assert_eq!(lookup("threads").name(), "twitter");
}

#[test]
fn test_constraint_tables() {
    let twitter = TwitterStrategy.constraints();
    assert_eq!(twitter.max_length, 280);
    assert_eq!(twitter.min_length, 50);
    assert_eq!(twitter.max_hashtags, 2);
    assert!(twitter.supports_threads);

    let linkedin = LinkedInStrategy.constraints();
    assert_eq!(linkedin.max_length, 3000);
    assert_eq!(linkedin.min_length, 150);
    assert_eq!(linkedin.max_hashtags, 7);
    assert!(!linkedin.supports_threads);
}
