//! In-process character store.

use async_trait::async_trait;
use asterix_core::character::Character;
use asterix_core::error::StoreError;
use asterix_core::store::CharacterStore;
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// Documents keyed by id, listed in insertion order.
///
/// Overwriting an existing id keeps its original position.
#[derive(Debug, Default)]
pub struct MemoryCharacterStore {
    docs: RwLock<IndexMap<String, Character>>,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn find_all(&self) -> Result<Vec<Character>, StoreError> {
        Ok(self.docs.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Character>, StoreError> {
        Ok(self.docs.read().await.get(id).cloned())
    }

    async fn save(&self, character: Character) -> Result<Character, StoreError> {
        self.docs
            .write()
            .await
            .insert(character.id.clone(), character.clone());
        Ok(character)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        // shift_remove keeps the remaining documents in insertion order.
        self.docs.write().await.shift_remove(id);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
