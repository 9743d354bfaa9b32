//! Test-only helpers.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{Store, StoreError};

/// Minimal in-process store for core unit tests; the real adapters live in
/// `ripple-infra`.
#[derive(Default)]
pub struct MemStore(Mutex<HashMap<String, String>>);

#[async_trait]
impl Store for MemStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
