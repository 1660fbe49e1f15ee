// ABOUTME: OpenAI-compatible text generation provider over HTTPS
// ABOUTME: Maps chat-completion responses and per-status errors into the generator contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # OpenAI-Compatible Provider
//!
//! Implementation of the [`TextGenerator`] trait against any
//! OpenAI-compatible chat-completions endpoint (OpenAI itself, or local
//! servers such as Ollama and vLLM behind the same API shape).
//!
//! ## Configuration
//!
//! - `POSTSMITH_LLM_BASE_URL`: API endpoint (default: `https://api.openai.com/v1`)
//! - `POSTSMITH_LLM_API_KEY`: API key (required)
//! - `POSTSMITH_LLM_MODEL`: model name (default: `gpt-4o-mini`)

use super::{Generation, GenerationOptions, TextGenerator, TokenUsage};
use crate::config::GeneratorConfig;
use crate::errors::{AppError, ErrorCode};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

/// Cost per million tokens (input, output) by model prefix
///
/// Ordered longest-prefix-first so dated snapshots ("gpt-4o-mini-2024-07-18")
/// price like their base model. Unknown models fall back to `DEFAULT_PRICING`.
const MODEL_PRICING: &[(&str, f64, f64)] = &[
    ("gpt-4o-mini", 0.15, 0.60),
    ("gpt-4o", 2.50, 10.00),
    ("gpt-4.1-mini", 0.40, 1.60),
    ("gpt-4.1", 2.00, 8.00),
    ("o4-mini", 1.10, 4.40),
];

/// Fallback pricing per million tokens for unknown models
const DEFAULT_PRICING: (f64, f64) = (0.50, 1.50);

// ============================================================================
// API Request/Response Types (OpenAI chat-completions format)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatCompletionMessage>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ChatCompletionMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    usage: Option<ChatCompletionUsage>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Text generator backed by an OpenAI-compatible chat-completions endpoint
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: GeneratorConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a provider from explicit configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error when `POSTSMITH_LLM_API_KEY` is unset.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(GeneratorConfig::from_env()?))
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Estimate the USD cost of an attempt from its token usage
    fn estimate_cost(model: &str, usage: &TokenUsage) -> f64 {
        let (input_rate, output_rate) = MODEL_PRICING
            .iter()
            .find(|(prefix, _, _)| model.starts_with(prefix))
            .map_or(DEFAULT_PRICING, |&(_, input, output)| (input, output));

        f64::from(usage.completion).mul_add(
            output_rate / 1_000_000.0,
            f64::from(usage.prompt) * (input_rate / 1_000_000.0),
        )
    }

    /// Map an upstream error body and status onto an `AppError`
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(response) = serde_json::from_str::<ApiErrorResponse>(body) {
            let error_type = response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 | 403 => AppError::external_auth(
                    "generator",
                    format!("API authentication failed: {}", response.error.message),
                ),
                429 => AppError::new(
                    ErrorCode::ExternalRateLimited,
                    format!("generator: rate limit exceeded: {}", response.error.message),
                ),
                500..=599 => AppError::external_unavailable(
                    "generator",
                    format!("{} - {}", error_type, response.error.message),
                ),
                _ => AppError::external_service(
                    "generator",
                    format!("{} - {}", error_type, response.error.message),
                ),
            }
        } else {
            AppError::external_service(
                "generator",
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI-compatible API"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, prompt, options), fields(model = %self.config.model))]
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Generation, AppError> {
        debug!("Sending chat completion request ({} chars)", prompt.len());

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatCompletionMessage {
                role: "user",
                content: prompt.to_owned(),
            }],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: options.top_p,
            frequency_penalty: options.frequency_penalty,
            presence_penalty: options.presence_penalty,
            stop: options.stop_sequences.clone(),
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to generator API: {}", e);
                AppError::external_service("generator", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read generator API response: {}", e);
            AppError::external_service("generator", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse generator API response: {}", e);
            AppError::external_service("generator", format!("Failed to parse response: {e}"))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("generator", "API returned no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        let tokens_used = completion.usage.map_or_else(TokenUsage::default, |u| {
            TokenUsage {
                prompt: u.prompt,
                completion: u.completion,
                total: u.total,
            }
        });

        debug!(
            "Received completion: {} chars, finish_reason: {:?}",
            content.len(),
            choice.finish_reason
        );

        Ok(Generation {
            content,
            cost_estimate: Self::estimate_cost(&completion.model, &tokens_used),
            model_id: completion.model,
            tokens_used,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        debug!("Performing generator API health check");

        let response = self
            .client
            .get(self.api_url("models"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| {
                error!("Generator health check failed: {}", e);
                AppError::external_service("generator", format!("Health check failed: {e}"))
            })?;

        let healthy = response.status().is_success();
        if !healthy {
            warn!(
                "Generator health check failed with status: {}",
                response.status()
            );
        }

        Ok(healthy)
    }
}
