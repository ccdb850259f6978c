//! Character management service.
//!
//! All reads and writes go through an injected [`CharacterStore`]; new ids
//! come from an injected [`IdGenerator`]. The service holds no state of its
//! own, so consistency under concurrent requests is whatever the store gives.

use std::sync::Arc;

use crate::character::{Character, CharacterPatch, NewCharacter};
use crate::error::CoreError;
use crate::id::IdGenerator;
use crate::store::CharacterStore;

const ENTITY: &str = "Character";

#[derive(Clone)]
pub struct CharacterService {
    store: Arc<dyn CharacterStore>,
    ids: Arc<dyn IdGenerator>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn CharacterStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Backend name of the underlying store.
    pub fn store_kind(&self) -> &'static str {
        self.store.kind()
    }

    /// Whether the underlying store currently answers.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, store = self.store.kind(), "Store health probe failed");
                false
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Character>, CoreError> {
        Ok(self.store.find_all().await?)
    }

    /// All characters with `age <= max_age`, in store order.
    pub async fn list_by_max_age(&self, max_age: i32) -> Result<Vec<Character>, CoreError> {
        let characters = self.store.find_all().await?;
        Ok(characters
            .into_iter()
            .filter(|c| c.age <= max_age)
            .collect())
    }

    /// Look up a character. A missing id is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Character>, CoreError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Look up a character that must exist; a missing id is `NotFound`.
    pub async fn find_existing(&self, id: &str) -> Result<Character, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate the candidate, assign a fresh id and persist it.
    pub async fn create(&self, candidate: NewCharacter) -> Result<Character, CoreError> {
        let name = require_name(candidate.name.clone())?;
        let id = self.ids.generate();
        let character = Character::from_candidate(id, name, candidate);

        let saved = self.store.save(character).await?;
        tracing::info!(id = %saved.id, name = %saved.name, "Character created");
        Ok(saved)
    }

    /// Full replacement by id. Nothing is carried over from an existing
    /// record, and an unknown id is created rather than rejected.
    pub async fn replace(&self, id: &str, candidate: NewCharacter) -> Result<Character, CoreError> {
        if id.is_empty() {
            return Err(CoreError::Validation("Character id is required".into()));
        }
        let name = require_name(candidate.name.clone())?;
        let character = Character::from_candidate(id.to_string(), name, candidate);

        let saved = self.store.save(character).await?;
        tracing::info!(id = %saved.id, "Character replaced");
        Ok(saved)
    }

    /// Merge the present fields of `patch` over an existing record.
    pub async fn patch(&self, id: &str, patch: CharacterPatch) -> Result<Character, CoreError> {
        let existing = self.find_existing(id).await?;
        if matches!(patch.name.as_deref(), Some("")) {
            return Err(CoreError::Validation("Character name must not be empty".into()));
        }

        let saved = self.store.save(existing.merged_with(patch)).await?;
        tracing::info!(id = %saved.id, "Character patched");
        Ok(saved)
    }

    /// Remove a character. Deleting an unknown id is a no-op.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), CoreError> {
        self.store.delete_by_id(id).await?;
        tracing::debug!(id, "Character deleted");
        Ok(())
    }

    /// Remove a character that must exist, for callers that report a
    /// missing id to the client.
    pub async fn delete_existing(&self, id: &str) -> Result<(), CoreError> {
        self.find_existing(id).await?;
        self.delete_by_id(id).await
    }
}

fn require_name(name: Option<String>) -> Result<String, CoreError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(CoreError::Validation("Character name is required".into())),
    }
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
