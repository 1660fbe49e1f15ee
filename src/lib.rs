// ABOUTME: Main library entry point for the Postsmith content generation service
// ABOUTME: Exposes the scoring pipeline, platform strategies, and HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

#![deny(unsafe_code)]

//! # Postsmith
//!
//! A platform-aware social post generation service. Postsmith turns a raw
//! topic into a platform-compliant, quality-scored post: an external language
//! model drafts the text, and a deterministic heuristic pipeline scores it,
//! optionally requests one corrective regeneration, optimizes it for the
//! target platform, and validates the result.
//!
//! ## Architecture
//!
//! - **Quality**: pure lexical/statistical scoring (readability, slop/jargon
//!   detection, engagement signals, sentence variety)
//! - **Platforms**: polymorphic per-platform strategies (Twitter, LinkedIn)
//!   behind a fixed registry with a documented fallback
//! - **Generator**: the external LLM provider boundary
//! - **Orchestrator**: the per-request pipeline state machine
//! - **Routes**: the axum HTTP surface
//!
//! ## Example
//!
//! ```rust,no_run
//! use postsmith::config::ServerConfig;
//! use postsmith::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Postsmith configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Text generator abstraction and the OpenAI-compatible provider
pub mod generator;

/// Production logging and structured output
pub mod logging;

/// Common data models for requests, responses, and content context
pub mod models;

/// Per-request generation pipeline state machine
pub mod orchestrator;

/// Platform strategies, constraints, and the strategy registry
pub mod platforms;

/// Heuristic content quality scoring
pub mod quality;

/// Focused dependency injection for route handlers
pub mod resources;

/// HTTP routes for content generation and health checks
pub mod routes;
