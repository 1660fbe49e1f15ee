// ABOUTME: Per-request generation pipeline driving prompt, generation, scoring, and optimization
// ABOUTME: Explicit state machine with a structurally-bounded single corrective regeneration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! # Generation Orchestrator
//!
//! Sequences one request through the pipeline:
//!
//! ```text
//! PROMPTING -> GENERATING -> POST_PROCESSING -> SCORING
//!     -> (REGENERATING, at most once) -> OPTIMIZING -> FINAL_VALIDATING -> DONE
//! ```
//!
//! The regeneration transition fires iff the overall score is below the
//! threshold AND at least one critical issue was raised. `Regenerating`
//! transitions straight to `Optimizing`, win or lose, so the at-most-one-retry
//! guarantee is visible in the state graph rather than buried in a flag.
//!
//! Nothing here is persisted: the machine lives for one request.

use crate::errors::{AppError, AppResult};
use crate::generator::{GenerationOptions, TextGenerator, TokenUsage};
use crate::models::{
    ContentContext, GenerationRequest, GenerationResponse, ResponseMetadata, ResponseValidation,
};
use crate::platforms::{self, OptimizedContent, PlatformStrategy, ValidationResult};
use crate::quality::{self, ContentQualityResult, REGENERATION_THRESHOLD};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Stages of the per-request pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Render the platform prompt
    Prompting,
    /// Await the external generator
    Generating,
    /// Clean raw generator output
    PostProcessing,
    /// Score the cleaned draft
    Scoring,
    /// One corrective generation cycle
    Regenerating,
    /// Platform optimization of the final draft
    Optimizing,
    /// Final scoring and platform validation
    FinalValidating,
    /// Response assembled
    Done,
}

impl PipelineStage {
    /// Stage name for tracing
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prompting => "prompting",
            Self::Generating => "generating",
            Self::PostProcessing => "post_processing",
            Self::Scoring => "scoring",
            Self::Regenerating => "regenerating",
            Self::Optimizing => "optimizing",
            Self::FinalValidating => "final_validating",
            Self::Done => "done",
        }
    }
}

/// Working data threaded through the pipeline stages
#[derive(Default)]
struct PipelineData {
    prompt: String,
    raw: String,
    text: String,
    model_id: String,
    usage: TokenUsage,
    cost: f64,
    draft_quality: Option<ContentQualityResult>,
    optimized: Option<OptimizedContent>,
    final_quality: Option<ContentQualityResult>,
    validation: Option<ValidationResult>,
    regenerated: bool,
}

/// Sequences prompt construction, generation, scoring, optional regeneration,
/// optimization, and final validation into one response
pub struct GenerationOrchestrator {
    generator: Arc<dyn TextGenerator>,
    defaults: GenerationOptions,
}

impl GenerationOrchestrator {
    /// Create an orchestrator over a generator, with default sampling options
    /// applied when a request does not override them
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, defaults: GenerationOptions) -> Self {
        Self {
            generator,
            defaults,
        }
    }

    /// Resolve per-request generation options against the configured defaults
    fn options_for(&self, request: &GenerationRequest) -> GenerationOptions {
        let mut options = self.defaults.clone();
        if let Some(temperature) = request.temperature {
            options.temperature = temperature;
        }
        if let Some(max_tokens) = request.max_tokens {
            options.max_tokens = max_tokens;
        }
        options
    }

    /// Original prompt plus the critical-issue list as corrective feedback
    fn corrective_prompt(prompt: &str, critical: &[String]) -> String {
        let issues = critical
            .iter()
            .map(|issue| format!("- {issue}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{prompt}\n\nThe previous draft had these problems:\n{issues}\n\
             Rewrite the post and fix every problem. \
             Use real numbers, concrete examples, and plain language."
        )
    }

    /// Run one request through the pipeline
    ///
    /// # Errors
    ///
    /// Propagates generator failures (`ExternalService*`); content validation
    /// failures are returned as data, never as an error.
    #[instrument(skip(self, request), fields(platform = %request.platform))]
    pub async fn run(&self, request: &GenerationRequest) -> AppResult<GenerationResponse> {
        let context = request.context();
        let strategy = platforms::lookup(&request.platform);
        let options = self.options_for(request);

        let mut data = PipelineData::default();
        let mut stage = PipelineStage::Prompting;

        while stage != PipelineStage::Done {
            debug!(stage = stage.as_str(), "pipeline stage");
            stage = self
                .step(stage, strategy, &context, &options, &mut data)
                .await?;
        }

        info!(
            platform = strategy.name(),
            regenerated = data.regenerated,
            tokens = data.usage.total,
            "generation pipeline complete"
        );

        Self::assemble(strategy, self.generator.name(), data)
    }

    /// Execute one stage and return the next
    async fn step(
        &self,
        stage: PipelineStage,
        strategy: &'static dyn PlatformStrategy,
        context: &ContentContext,
        options: &GenerationOptions,
        data: &mut PipelineData,
    ) -> AppResult<PipelineStage> {
        match stage {
            PipelineStage::Prompting => {
                data.prompt = strategy.generate_prompt(context);
                Ok(PipelineStage::Generating)
            }
            PipelineStage::Generating => {
                let generation = self.generator.generate(&data.prompt, options).await?;
                data.usage.accumulate(&generation.tokens_used);
                data.cost += generation.cost_estimate;
                data.model_id = generation.model_id;
                data.raw = generation.content;
                Ok(PipelineStage::PostProcessing)
            }
            PipelineStage::PostProcessing => {
                data.text = strategy.post_process(&data.raw);
                Ok(PipelineStage::Scoring)
            }
            PipelineStage::Scoring => {
                let quality = quality::score(&data.text);
                let regenerate = quality.score.overall < REGENERATION_THRESHOLD
                    && !quality.issues.critical.is_empty();
                data.draft_quality = Some(quality);
                if regenerate {
                    Ok(PipelineStage::Regenerating)
                } else {
                    Ok(PipelineStage::Optimizing)
                }
            }
            PipelineStage::Regenerating => {
                // Exactly one corrective cycle; the result is used win or lose.
                data.regenerated = true;
                let critical = data
                    .draft_quality
                    .as_ref()
                    .map(|q| q.issues.critical.clone())
                    .unwrap_or_default();
                let prompt = Self::corrective_prompt(&data.prompt, &critical);
                let generation = self.generator.generate(&prompt, options).await?;
                data.usage.accumulate(&generation.tokens_used);
                data.cost += generation.cost_estimate;
                data.model_id = generation.model_id;
                data.text = strategy.post_process(&generation.content);
                Ok(PipelineStage::Optimizing)
            }
            PipelineStage::Optimizing => {
                data.optimized = Some(strategy.optimize(&data.text, context));
                Ok(PipelineStage::FinalValidating)
            }
            PipelineStage::FinalValidating => {
                let optimized = data
                    .optimized
                    .as_ref()
                    .ok_or_else(|| AppError::internal("pipeline reached validation without content"))?;
                data.final_quality = Some(quality::score(&optimized.content));
                data.validation = Some(strategy.validate(&optimized.content));
                Ok(PipelineStage::Done)
            }
            PipelineStage::Done => Ok(PipelineStage::Done),
        }
    }

    /// Assemble the response envelope from the completed pipeline data
    ///
    /// Platform-level and quality-level warnings/suggestions are concatenated
    /// in order and not deduplicated.
    fn assemble(
        strategy: &'static dyn PlatformStrategy,
        provider: &str,
        data: PipelineData,
    ) -> AppResult<GenerationResponse> {
        let optimized = data
            .optimized
            .ok_or_else(|| AppError::internal("pipeline finished without optimized content"))?;
        let final_quality = data
            .final_quality
            .ok_or_else(|| AppError::internal("pipeline finished without a quality report"))?;
        let validation = data
            .validation
            .ok_or_else(|| AppError::internal("pipeline finished without validation"))?;

        let mut warnings = validation.errors.clone();
        warnings.extend(validation.warnings.clone());
        warnings.extend(final_quality.issues.warnings.clone());

        let mut suggestions = optimized.suggestions.clone();
        suggestions.extend(final_quality.issues.suggestions.clone());

        Ok(GenerationResponse {
            content: optimized.content,
            platform: strategy.name().to_owned(),
            hashtags: if optimized.hashtags.is_empty() {
                None
            } else {
                Some(optimized.hashtags)
            },
            metadata: ResponseMetadata {
                model: data.model_id,
                provider: provider.to_owned(),
                tokens_used: data.usage,
                cost: data.cost,
                quality_score: final_quality.score.overall,
                character_count: optimized.metadata.character_count,
                word_count: optimized.metadata.word_count,
                estimated_engagement: Some(optimized.metadata.estimated_engagement),
            },
            validation: ResponseValidation {
                is_valid: validation.is_valid,
                score: validation.score,
                warnings,
                suggestions,
            },
        })
    }
}
