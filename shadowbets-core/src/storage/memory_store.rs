use crate::error::Result;
use crate::storage::PersistenceGateway;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    blobs: HashMap<String, Vec<u8>>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one blob.
    pub fn with_blob(key: &str, blob: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.inner.lock().blobs.insert(key.to_string(), blob.into());
        store
    }

    /// Number of `save` calls served so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().blobs.get(key).cloned()
    }
}

#[async_trait]
impl PersistenceGateway for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, blob: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.blobs.insert(key.to_string(), blob.to_vec());
        inner.writes += 1;
        Ok(())
    }
}
