// ABOUTME: Advice provider abstraction for pluggable text-generation backends
// ABOUTME: Defines the provider contract and the timeout-protected generation helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! # Advice Provider Service Provider Interface
//!
//! The engine treats generated advice as an opaque string supplied by an
//! external text-generation service. Providers implement [`AdviceProvider`];
//! the save path calls them only through [`generate_with_timeout`], which
//! guarantees the flow never blocks past the configured timeout and never
//! fails because the provider did.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use glucoviva::llm::{generate_with_timeout, AdviceProvider, GeminiProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = GeminiProvider::from_env().expect("GEMINI_API_KEY set");
//!     let advice =
//!         generate_with_timeout(&provider, "Act as a nutrition coach...", Duration::from_secs(9))
//!             .await;
//!     // Empty on timeout or provider failure; never an error.
//!     println!("{advice}");
//! }
//! ```

mod gemini;
/// Prompt builders for advice generation
pub mod prompts;

pub use gemini::GeminiProvider;

use std::time::Duration;

use async_trait::async_trait;
use glucoviva_core::errors::AppResult;
use tracing::warn;

/// Contract for text-generation backends producing advice strings
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    /// Short provider identifier for logs
    fn name(&self) -> &'static str;

    /// Generate free-text advice for the given prompt
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails.
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Race `provider` against `timeout` and degrade to an empty string.
///
/// The save path must never block indefinitely on the advice collaborator,
/// and a provider failure must never fail the save; both cases log a warning
/// and return `""`.
pub async fn generate_with_timeout(
    provider: &dyn AdviceProvider,
    prompt: &str,
    timeout: Duration,
) -> String {
    match tokio::time::timeout(timeout, provider.generate(prompt)).await {
        Ok(Ok(text)) => text.trim().to_owned(),
        Ok(Err(err)) => {
            warn!(provider = provider.name(), error = %err, "advice generation failed");
            String::new()
        }
        Err(_) => {
            warn!(
                provider = provider.name(),
                timeout_ms = timeout.as_millis() as u64,
                "advice generation timed out"
            );
            String::new()
        }
    }
}
