// ABOUTME: Shared dependency container handed to route constructors
// ABOUTME: Holds configuration and the orchestrator over the configured generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Focused dependency injection for route handlers.
//!
//! One `ServerResources` is built at startup, wrapped in an `Arc`, and shared
//! by every handler. Everything inside is immutable after construction.

use crate::config::ServerConfig;
use crate::generator::{GenerationOptions, TextGenerator};
use crate::orchestrator::GenerationOrchestrator;
use std::sync::Arc;

/// Shared server dependencies
pub struct ServerResources {
    /// Loaded server configuration
    pub config: ServerConfig,
    /// The per-request pipeline over the configured generator
    pub orchestrator: GenerationOrchestrator,
}

impl ServerResources {
    /// Assemble resources from configuration and a generator implementation
    #[must_use]
    pub fn new(config: ServerConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let defaults = GenerationOptions::default()
            .with_temperature(config.generator.temperature)
            .with_max_tokens(config.generator.max_tokens);

        Self {
            orchestrator: GenerationOrchestrator::new(generator, defaults),
            config,
        }
    }
}
