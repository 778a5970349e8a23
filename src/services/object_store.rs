//! src/services/object_store.rs
//!
//! The object-store port: the two calls the word service needs (put one
//! object, list every key) plus a cheap reachability probe for `/readyz`.
//! `MemoryObjectStore` lives here too; the S3 adapter is in `s3_store`.

use async_trait::async_trait;
use bytes::Bytes;
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to put object `{key}`: {reason}")]
    Put { key: String, reason: String },
    #[error("failed to list objects in bucket `{bucket}`: {reason}")]
    List { bucket: String, reason: String },
    #[error("object store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A flat key/blob collection addressed by a single, fixed bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key`, replacing whatever was there.
    async fn put_object(&self, key: &str, body: Bytes) -> StoreResult<()>;

    /// Every key in the bucket, in the order the backend returns them.
    async fn list_keys(&self) -> StoreResult<Vec<String>>;

    /// Succeeds when the bucket can be reached.
    async fn ping(&self) -> StoreResult<()>;
}

/// In-process store used for local runs and tests. Keys list in
/// lexicographic order.
#[derive(Clone, Default)]
pub struct MemoryObjectStore {
    objects: Arc<RwLock<BTreeMap<String, Bytes>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryObjectStore {
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.read().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, key: &str, body: Bytes) -> StoreResult<()> {
        debug!("memory put {} ({} bytes)", key, body.len());
        self.objects.write().await.insert(key.to_string(), body);
        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.objects.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
