// ABOUTME: Text generator abstraction for the external LLM provider boundary
// ABOUTME: Defines the generator contract, request options, and usage/cost accounting types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # Text Generator Service Provider Interface
//!
//! This module defines the contract the orchestrator holds toward the
//! external language-model provider. The core treats generation as a strictly
//! sequential boundary: build a prompt, await one response, post-process -
//! with at most two attempts per request (the optional quality-triggered
//! regeneration). Retry, timeout, and cancellation policy belong to the
//! provider implementation, never to the pipeline.

mod openai_compatible;

pub use openai_compatible::OpenAiCompatibleProvider;

use crate::errors::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling and decoding options for a single generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Frequency penalty
    pub frequency_penalty: f32,
    /// Presence penalty
    pub presence_penalty: f32,
    /// Optional stop sequences
    pub stop_sequences: Option<Vec<String>>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1000,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            stop_sequences: None,
        }
    }
}

impl GenerationOptions {
    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Token usage statistics for one or more generation attempts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt(s)
    pub prompt: u32,
    /// Tokens in the completion(s)
    pub completion: u32,
    /// Total tokens used
    pub total: u32,
}

impl TokenUsage {
    /// Fold another attempt's usage into this one
    pub fn accumulate(&mut self, other: &Self) {
        self.prompt += other.prompt;
        self.completion += other.completion;
        self.total += other.total;
    }
}

/// Result of a single generation attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    /// Raw generated text, before any post-processing
    pub content: String,
    /// Model that produced the text
    pub model_id: String,
    /// Token usage for this attempt
    pub tokens_used: TokenUsage,
    /// Cost estimate in USD for this attempt
    pub cost_estimate: f64,
}

/// Contract for external text generation providers
///
/// Implement this trait to plug a new provider into the pipeline. Failures
/// map to `ExternalService*` error codes and propagate to the caller; the
/// pipeline adds no retry loop of its own.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique provider identifier (e.g. "openai-compatible")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Model used when a request does not override it
    fn default_model(&self) -> &str;

    /// Perform a single generation
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Generation, AppError>;

    /// Check that the provider is reachable and credentials are valid
    async fn health_check(&self) -> Result<bool, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_accumulate() {
        let mut usage = TokenUsage {
            prompt: 100,
            completion: 50,
            total: 150,
        };
        usage.accumulate(&TokenUsage {
            prompt: 80,
            completion: 40,
            total: 120,
        });
        assert_eq!(usage.prompt, 180);
        assert_eq!(usage.completion, 90);
        assert_eq!(usage.total, 270);
    }

    #[test]
    fn test_options_builders() {
        let options = GenerationOptions::default()
            .with_temperature(0.2)
            .with_max_tokens(256);
        assert!((options.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(options.max_tokens, 256);
    }
}
