// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and generator credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Environment-based configuration management for production deployment
//!
//! All configuration is environment-only: there is no config file. Missing
//! provider credentials are a startup error, never a runtime surprise.

use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port when `HTTP_PORT` is not set
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default OpenAI-compatible API endpoint
const DEFAULT_GENERATOR_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model when `POSTSMITH_LLM_MODEL` is not set
const DEFAULT_GENERATOR_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature for generation requests
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token budget
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings for the external text generator endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// API key for the endpoint
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Default sampling temperature when a request does not specify one
    pub temperature: f32,
    /// Default completion token budget when a request does not specify one
    pub max_tokens: u32,
}

impl GeneratorConfig {
    /// Load generator settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigMissing` error when `POSTSMITH_LLM_API_KEY` is unset.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("POSTSMITH_LLM_API_KEY").map_err(|_| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "Missing POSTSMITH_LLM_API_KEY environment variable",
            )
        })?;

        Ok(Self {
            base_url: env::var("POSTSMITH_LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GENERATOR_BASE_URL.to_owned()),
            api_key,
            model: env::var("POSTSMITH_LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENERATOR_MODEL.to_owned()),
            temperature: env::var("POSTSMITH_DEFAULT_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: env::var("POSTSMITH_DEFAULT_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
        })
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// External generator settings
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Load the full server configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when required generator credentials are missing.
    pub fn from_env() -> AppResult<Self> {
        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        );

        Ok(Self {
            http_port,
            environment,
            generator: GeneratorConfig::from_env()?,
        })
    }

    /// One-line configuration summary for startup logging (no secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} environment={} generator_url={} model={}",
            self.http_port, self.environment, self.generator.base_url, self.generator.model
        )
    }
}
