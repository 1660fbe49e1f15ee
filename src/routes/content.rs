// ABOUTME: Content route handlers for post generation and platform discovery
// ABOUTME: Validates request envelopes before handing them to the generation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Content generation routes
//!
//! Request validation lives here, at the boundary: the pipeline itself never
//! raises on content, only on provider failures.

use crate::errors::AppError;
use crate::models::{GenerationRequest, GenerationResponse};
use crate::platforms::{registry, PlatformConstraints};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Longest topic accepted by the API
const MAX_TOPIC_LENGTH: usize = 500;

/// Largest completion budget a request may ask for
const MAX_REQUEST_TOKENS: u32 = 4096;

/// A platform and its constraints, for the discovery endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Platform identifier
    pub id: String,
    /// Constraint table
    #[serde(flatten)]
    pub constraints: PlatformConstraints,
}

/// Response for the platform discovery endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformListResponse {
    /// Supported platforms
    pub platforms: Vec<PlatformInfo>,
}

/// Content routes handler
pub struct ContentRoutes;

impl ContentRoutes {
    /// Create all content routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/content/generate", post(Self::generate))
            .route("/api/content/platforms", get(Self::list_platforms))
            .with_state(resources)
    }

    /// Reject malformed envelopes before the pipeline runs
    fn validate_request(request: &GenerationRequest) -> Result<(), AppError> {
        if request.topic.trim().is_empty() {
            return Err(AppError::missing_field("topic"));
        }
        if request.topic.chars().count() > MAX_TOPIC_LENGTH {
            return Err(AppError::out_of_range(format!(
                "topic must be at most {MAX_TOPIC_LENGTH} characters"
            )));
        }
        if let Some(temperature) = request.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::out_of_range(
                    "temperature must be between 0.0 and 2.0",
                ));
            }
        }
        if let Some(max_tokens) = request.max_tokens {
            if max_tokens == 0 || max_tokens > MAX_REQUEST_TOKENS {
                return Err(AppError::out_of_range(format!(
                    "maxTokens must be between 1 and {MAX_REQUEST_TOKENS}"
                )));
            }
        }
        Ok(())
    }

    /// `POST /api/content/generate`
    async fn generate(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GenerationRequest>,
    ) -> Result<Json<GenerationResponse>, AppError> {
        Self::validate_request(&request)?;

        info!(
            platform = %request.platform,
            topic_len = request.topic.len(),
            "content generation requested"
        );

        let response = resources.orchestrator.run(&request).await?;
        Ok(Json(response))
    }

    /// `GET /api/content/platforms`
    async fn list_platforms(
        State(_resources): State<Arc<ServerResources>>,
    ) -> Json<PlatformListResponse> {
        let platforms = registry::all()
            .iter()
            .map(|platform| {
                let strategy = platform.strategy();
                PlatformInfo {
                    id: strategy.name().to_owned(),
                    constraints: strategy.constraints(),
                }
            })
            .collect();

        Json(PlatformListResponse { platforms })
    }
}
