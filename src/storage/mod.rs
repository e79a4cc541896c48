// ABOUTME: Key-value storage boundary with pluggable backends
// ABOUTME: Values are opaque JSON strings; serialization stays with the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Storage abstraction layer.
//!
//! The engine's persistence is a plain string key-value store (the stand-in
//! for browser local storage). Backends implement [`StorageProvider`]; the
//! key schema lives in [`crate::constants::storage_keys`]. The store never
//! interprets values, and the engine never caches reads across calls: every
//! flow re-reads current state, computes, and writes back.

/// In-memory storage implementation
pub mod memory;

pub use memory::MemoryStorage;

use async_trait::async_trait;
use glucoviva_core::errors::AppResult;

/// Storage provider trait for pluggable backend implementations
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Fetch the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
