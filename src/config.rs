// ABOUTME: Environment-only configuration for the personalized-advice provider
// ABOUTME: No config files; every knob is an environment variable with a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Environment-based configuration.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `GEMINI_API_KEY` | Advice provider API key; advice is skipped without it | unset |
//! | `GLUCOVIVA_LLM_MODEL` | Text-generation model | `gemini-2.5-flash` |
//! | `GLUCOVIVA_ADVICE_TIMEOUT_SECS` | Advice race timeout in seconds | `9` |

use std::env;
use std::time::Duration;

use crate::constants::advice;

/// Environment variable holding the advice provider API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the text-generation model
pub const LLM_MODEL_ENV: &str = "GLUCOVIVA_LLM_MODEL";
/// Environment variable overriding the advice timeout (seconds)
pub const ADVICE_TIMEOUT_ENV: &str = "GLUCOVIVA_ADVICE_TIMEOUT_SECS";

/// Settings for personalized-advice generation
#[derive(Debug, Clone)]
pub struct AdviceSettings {
    /// Provider API key; `None` disables advice generation entirely
    pub api_key: Option<String>,
    /// Text-generation model name
    pub model: String,
    /// How long the save path waits for the provider before degrading to an
    /// empty advice string
    pub timeout: Duration,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: advice::DEFAULT_MODEL.into(),
            timeout: Duration::from_secs(advice::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AdviceSettings {
    /// Read settings from the environment.
    ///
    /// A missing API key is not an error: the save flow simply skips advice
    /// generation. An unparsable timeout falls back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        let model =
            env::var(LLM_MODEL_ENV).unwrap_or_else(|_| advice::DEFAULT_MODEL.into());
        let timeout_secs = env::var(ADVICE_TIMEOUT_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(advice::DEFAULT_TIMEOUT_SECS);
        Self {
            api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
