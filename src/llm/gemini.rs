// ABOUTME: Google Gemini advice provider implementation
// ABOUTME: Single-turn generateContent call against the Generative AI API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! # Gemini Provider
//!
//! Implementation of [`AdviceProvider`] for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with an API key from Google
//! AI Studio. `GLUCOVIVA_LLM_MODEL` overrides the default model.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use glucoviva_core::errors::{AppError, AppResult};

use super::AdviceProvider;
use crate::config::AdviceSettings;

/// Base URL for the Generative Language API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Gemini-backed advice provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    /// Create a provider with an explicit API key and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a provider from environment configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> AppResult<Self> {
        let settings = AdviceSettings::from_env();
        let api_key = settings
            .api_key
            .ok_or_else(|| AppError::config_missing("GEMINI_API_KEY is not set"))?;
        Ok(Self::new(api_key, settings.model))
    }

    /// Model this provider generates with
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl AdviceProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_owned(),
                }],
            }],
        };

        debug!(model = %self.model, "requesting advice generation");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| AppError::external_service(format!("gemini request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "gemini returned {status}: {body}"
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|err| AppError::external_service(format!("gemini response unreadable: {err}")))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_tolerates_missing_fields() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Nice work."}]}},{"content":null}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).expect("deserialize");
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(text, "Nice work.");

        let empty: GenerateResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(empty.candidates.is_empty());
    }
}
