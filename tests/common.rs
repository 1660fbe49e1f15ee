// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted stub generator, and resource assembly helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Postsmith Project
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `postsmith`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use postsmith::{
    config::{Environment, GeneratorConfig, ServerConfig},
    errors::AppError,
    generator::{Generation, GenerationOptions, TextGenerator, TokenUsage},
    resources::ServerResources,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Generic filler the quality scorer flags as critical with a failing score
pub const GENERIC_FILLER: &str = "In today's fast-paced world, we all know synergy and \
    leverage unlock a paradigm of low-hanging fruit. It goes without saying that we must \
    delve into the tapestry of thought leadership.";

/// Concrete, engaging draft that passes scoring without regeneration
pub const SOLID_DRAFT: &str = "How do we cut build times by 40%? We profiled the pipeline \
    and split the test suite. Caching dropped CI from 22 minutes to 9. Try the same split \
    on your slowest stage. What would you automate first?";

/// Scripted generator for pipeline tests
///
/// Returns `responses[n]` for the n-th call (clamped to the last entry) and
/// counts invocations so tests can assert the at-most-one-retry policy.
pub struct StubGenerator {
    responses: Vec<String>,
    calls: AtomicUsize,
    fail: bool,
}

impl StubGenerator {
    /// Stub that always answers with the same text
    pub fn always(text: &str) -> Self {
        Self {
            responses: vec![text.to_owned()],
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Stub that answers with each text in turn, repeating the last
    pub fn scripted(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|&r| r.to_owned()).collect(),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Stub whose every call fails with a provider error
    pub fn failing() -> Self {
        Self {
            responses: Vec::new(),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    /// Number of generate calls observed so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Generator"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn generate(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<Generation, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AppError::external_service("stub", "scripted failure"));
        }

        let content = self
            .responses
            .get(call.min(self.responses.len().saturating_sub(1)))
            .cloned()
            .unwrap_or_default();

        Ok(Generation {
            content,
            model_id: "stub-model".to_owned(),
            tokens_used: TokenUsage {
                prompt: 100,
                completion: 50,
                total: 150,
            },
            cost_estimate: 0.001,
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Server configuration that never touches the environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        generator: GeneratorConfig {
            base_url: "http://localhost:9".to_owned(),
            api_key: "test-key".to_owned(),
            model: "stub-model".to_owned(),
            temperature: 0.7,
            max_tokens: 1000,
        },
    }
}

/// Assemble server resources over a stub generator
pub fn test_resources(stub: Arc<StubGenerator>) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(test_config(), stub))
}
