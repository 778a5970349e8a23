//! src/services/word_service.rs
//!
//! WordService — turns words into stored records and stored keys back into
//! words. Holds the one long-lived store handle shared by every handler.

use crate::{
    models::word::Word,
    services::object_store::{ObjectStore, StoreResult},
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct WordService {
    store: Arc<dyn ObjectStore>,
}

impl WordService {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Store `word` as `<word>.txt` with the word itself as the body.
    /// Saving the same word again rewrites identical content.
    pub async fn save_word(&self, word: &Word) -> StoreResult<()> {
        let key = word.object_key();
        debug!("Saving word under key {}", key);
        self.store
            .put_object(&key, Bytes::copy_from_slice(word.as_str().as_bytes()))
            .await
    }

    /// All stored words, in listing order.
    pub async fn list_words(&self) -> StoreResult<Vec<String>> {
        let keys = self.store.list_keys().await?;
        Ok(keys.iter().map(|key| Word::from_object_key(key)).collect())
    }

    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}
