// ABOUTME: HTTP route assembly for the Postsmith API surface
// ABOUTME: Merges content and health routers over the shared server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! HTTP routes
//!
//! Routers are grouped per concern and merged at startup. Handlers return
//! `Result<_, AppError>`; the error type renders itself as a JSON error body.

pub mod content;
pub mod health;

pub use content::ContentRoutes;
pub use health::HealthRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ContentRoutes::routes(resources))
}
