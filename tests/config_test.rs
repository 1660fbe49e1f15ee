// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Env-mutating tests are serialized to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Postsmith Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use postsmith::config::{Environment, ServerConfig};
use postsmith::errors::ErrorCode;
use serial_test::serial;
use std::env;

fn clear_postsmith_env() {
    for var in [
        "HTTP_PORT",
        "ENVIRONMENT",
        "POSTSMITH_LLM_BASE_URL",
        "POSTSMITH_LLM_API_KEY",
        "POSTSMITH_LLM_MODEL",
        "POSTSMITH_DEFAULT_TEMPERATURE",
        "POSTSMITH_DEFAULT_MAX_TOKENS",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_missing_api_key_fails_at_startup() {
    clear_postsmith_env();

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert!(error.message.contains("POSTSMITH_LLM_API_KEY"));
}

#[test]
#[serial]
fn test_defaults_applied_when_only_key_is_set() {
    clear_postsmith_env();
    env::set_var("POSTSMITH_LLM_API_KEY", "sk-test");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.generator.base_url, "https://api.openai.com/v1");
    assert_eq!(config.generator.model, "gpt-4o-mini");

    clear_postsmith_env();
}

#[test]
#[serial]
fn test_full_environment_parsed() {
    clear_postsmith_env();
    env::set_var("HTTP_PORT", "9005");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("POSTSMITH_LLM_BASE_URL", "http://localhost:11434/v1");
    env::set_var("POSTSMITH_LLM_API_KEY", "local");
    env::set_var("POSTSMITH_LLM_MODEL", "qwen2.5:14b-instruct");
    env::set_var("POSTSMITH_DEFAULT_TEMPERATURE", "0.4");
    env::set_var("POSTSMITH_DEFAULT_MAX_TOKENS", "2048");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9005);
    assert!(config.environment.is_production());
    assert_eq!(config.generator.base_url, "http://localhost:11434/v1");
    assert_eq!(config.generator.model, "qwen2.5:14b-instruct");
    assert!((config.generator.temperature - 0.4).abs() < f32::EPSILON);
    assert_eq!(config.generator.max_tokens, 2048);
    assert!(config.summary().contains("9005"));

    clear_postsmith_env();
}

#[test]
#[serial]
fn test_invalid_numeric_env_falls_back_to_defaults() {
    clear_postsmith_env();
    env::set_var("POSTSMITH_LLM_API_KEY", "sk-test");
    env::set_var("HTTP_PORT", "not-a-port");
    env::set_var("POSTSMITH_DEFAULT_TEMPERATURE", "warm");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8081);
    assert!((config.generator.temperature - 0.7).abs() < f32::EPSILON);

    clear_postsmith_env();
}
