// ABOUTME: Common data models for content generation requests and responses
// ABOUTME: Defines the content context, tone/format enums, and the JSON wire envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Common data models for content generation
//!
//! The wire envelope uses camelCase field names; internal types use the
//! crate's snake_case conventions and derive serde both ways.

use crate::generator::TokenUsage;
use serde::{Deserialize, Serialize};

/// Voice the generated post should be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Polished business voice
    Professional,
    /// Relaxed, informal voice
    Casual,
    /// Approachable, reader-directed voice
    #[default]
    Conversational,
    /// Formal register
    Formal,
    /// Light, joking voice
    Humorous,
}

impl Tone {
    /// String form used inside prompt templates
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Conversational => "conversational",
            Self::Formal => "formal",
            Self::Humorous => "humorous",
        }
    }
}

/// Structural shape of the requested post
///
/// The meaning is platform-dependent: Twitter renders a thread as 3-5
/// separator-delimited segments, platforms without thread support treat
/// `Thread` as `Single`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    /// One standalone post
    #[default]
    Single,
    /// A multi-segment thread
    Thread,
}

/// Immutable per-request description of the content to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentContext {
    /// Subject of the post
    pub topic: String,
    /// Requested voice
    pub tone: Tone,
    /// Audience the post should address
    pub target_audience: Option<String>,
    /// Whether hashtags should be present in the optimized output
    pub include_hashtags: bool,
    /// Whether the generator may use emojis
    pub include_emojis: bool,
    /// Explicit call-to-action to work into the post
    pub call_to_action: Option<String>,
    /// Structural shape of the post
    pub format: PostFormat,
}

/// Heuristic engagement classification derived from platform length bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedEngagement {
    /// Outside the platform's workable length range
    Low,
    /// Within limits but outside the optimal band
    Medium,
    /// Within the platform's optimal length band
    High,
}

// ============================================================================
// Request/Response Envelope
// ============================================================================

/// Request body for `POST /api/content/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Target platform identifier ("twitter", "linkedin")
    pub platform: String,
    /// Subject of the post
    pub topic: String,
    /// Requested voice (defaults to conversational)
    #[serde(default)]
    pub tone: Option<Tone>,
    /// Audience the post should address
    #[serde(default)]
    pub target_audience: Option<String>,
    /// Whether hashtags should be synthesized/kept (defaults to true)
    #[serde(default)]
    pub include_hashtags: Option<bool>,
    /// Whether the generator may use emojis (defaults to false)
    #[serde(default)]
    pub include_emojis: Option<bool>,
    /// Explicit call-to-action to work into the post
    #[serde(default)]
    pub call_to_action: Option<String>,
    /// Structural shape of the post (defaults to single)
    #[serde(default)]
    pub format: Option<PostFormat>,
    /// Sampling temperature override
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Completion token budget override
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Build the immutable content context, applying defaults
    #[must_use]
    pub fn context(&self) -> ContentContext {
        ContentContext {
            topic: self.topic.clone(),
            tone: self.tone.unwrap_or_default(),
            target_audience: self.target_audience.clone(),
            include_hashtags: self.include_hashtags.unwrap_or(true),
            include_emojis: self.include_emojis.unwrap_or(false),
            call_to_action: self.call_to_action.clone(),
            format: self.format.unwrap_or_default(),
        }
    }
}

/// Generation metadata returned alongside the content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// Model that produced the final text
    pub model: String,
    /// Provider name
    pub provider: String,
    /// Token usage across all generation attempts
    pub tokens_used: TokenUsage,
    /// Cost estimate in USD
    pub cost: f64,
    /// Overall quality score of the final text, [0,10]
    pub quality_score: f64,
    /// Character count of the final text (hashtag line included)
    pub character_count: usize,
    /// Word count of the final text (hashtag line included)
    pub word_count: usize,
    /// Heuristic engagement classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_engagement: Option<EstimatedEngagement>,
}

/// Validation bundle returned alongside the content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseValidation {
    /// False iff at least one platform validation error was raised
    pub is_valid: bool,
    /// Platform validation score, [0,10]
    pub score: f64,
    /// Platform and quality warnings, concatenated in order, not deduplicated
    pub warnings: Vec<String>,
    /// Optimization and quality suggestions, concatenated in order, not deduplicated
    pub suggestions: Vec<String>,
}

/// Response body for `POST /api/content/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    /// Final optimized post text
    pub content: String,
    /// Platform the post was optimized for
    pub platform: String,
    /// Hashtags attached to the post, in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    /// Generation metadata
    pub metadata: ResponseMetadata,
    /// Validation bundle
    pub validation: ResponseValidation,
}
