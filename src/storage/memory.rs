// ABOUTME: In-memory storage backend over a shared hash map
// ABOUTME: Reference implementation standing in for browser local storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use glucoviva_core::errors::AppResult;
use tokio::sync::RwLock;

use super::StorageProvider;

/// In-memory key-value store.
///
/// Cloning shares the underlying map, so one store can back a logbook and a
/// test harness inspecting the written state at the same time.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove_round_trip() {
        let store = MemoryStorage::new();
        assert_eq!(store.get("missing").await.expect("get"), None);

        store.set("meals-log", "[]").await.expect("set");
        assert_eq!(
            store.get("meals-log").await.expect("get").as_deref(),
            Some("[]")
        );

        store.remove("meals-log").await.expect("remove");
        assert_eq!(store.get("meals-log").await.expect("get"), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStorage::new();
        let view = store.clone();
        store.set("active-goal", "{}").await.expect("set");
        assert_eq!(
            view.get("active-goal").await.expect("get").as_deref(),
            Some("{}")
        );
    }
}
