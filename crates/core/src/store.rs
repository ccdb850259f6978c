//! Persistence seam for character documents.

use async_trait::async_trait;

use crate::character::Character;
use crate::error::StoreError;

/// Id-keyed document storage consumed by the character service.
///
/// Implementations live in `asterix-db` (Postgres and in-memory).
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Every stored character, in the backend's natural order.
    async fn find_all(&self) -> Result<Vec<Character>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Character>, StoreError>;

    /// Insert or overwrite by `character.id`, returning what was stored.
    async fn save(&self, character: Character) -> Result<Character, StoreError>;

    /// Remove the document if present. Absent ids are a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short backend name reported by the health endpoint.
    fn kind(&self) -> &'static str;
}
