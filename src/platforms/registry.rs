// ABOUTME: Platform identifier parsing and strategy lookup with documented fallback
// ABOUTME: Unknown platform ids resolve to the Twitter strategy, logged, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

//! Strategy registry.
//!
//! Dispatch is an enumerated platform identifier over a fixed table of
//! stateless strategy statics. Lookup is case-insensitive; an unknown id
//! falls back to Twitter with a warning rather than failing the request.

use super::{LinkedInStrategy, PlatformStrategy, TwitterStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

static TWITTER: TwitterStrategy = TwitterStrategy;
static LINKEDIN: LinkedInStrategy = LinkedInStrategy;

/// Supported platform identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Twitter / X
    Twitter,
    /// LinkedIn
    Linkedin,
}

impl Platform {
    /// Parse a platform id, case-insensitively
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "twitter" | "x" => Some(Self::Twitter),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    /// The strategy for this platform
    #[must_use]
    pub fn strategy(self) -> &'static dyn PlatformStrategy {
        match self {
            Self::Twitter => &TWITTER,
            Self::Linkedin => &LINKEDIN,
        }
    }
}

/// Look up the strategy for a platform id
///
/// Unknown ids resolve to the Twitter strategy as an explicit, logged
/// default; this never fails.
#[must_use]
pub fn lookup(platform_id: &str) -> &'static dyn PlatformStrategy {
    Platform::parse(platform_id).map_or_else(
        || {
            warn!(platform = %platform_id, "Unknown platform id, falling back to twitter");
            Platform::Twitter.strategy()
        },
        Platform::strategy,
    )
}

/// All supported platforms, for the discovery endpoint
#[must_use]
pub fn all() -> &'static [Platform] {
    &[Platform::Twitter, Platform::Linkedin]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("TWITTER").name(), "twitter");
        assert_eq!(lookup("LinkedIn").name(), "linkedin");
    }

    #[test]
    fn test_unknown_platform_falls_back_to_twitter() {
        assert_eq!(lookup("mastodon").name(), "twitter");
        assert_eq!(lookup("").name(), "twitter");
    }
}
