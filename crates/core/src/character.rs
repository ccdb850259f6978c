//! Character document model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::DocId;

/// A persisted character document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: DocId,
    pub name: String,
    pub age: i32,
    pub profession: String,
}

/// Body of create and full-replace requests.
///
/// `name` stays optional here so a missing name reaches the service and is
/// reported as a validation failure instead of a JSON rejection. Any `id`
/// field sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCharacter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub profession: String,
}

/// Body of partial updates. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub profession: Option<String>,
}

impl Character {
    /// Build a character document from a candidate and an assigned id.
    pub fn from_candidate(id: DocId, name: String, candidate: NewCharacter) -> Self {
        Self {
            id,
            name,
            age: candidate.age,
            profession: candidate.profession,
        }
    }

    /// Return a copy with every field present in `patch` overwritten.
    pub fn merged_with(self, patch: CharacterPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or(self.name),
            age: patch.age.unwrap_or(self.age),
            profession: patch.profession.unwrap_or(self.profession),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asterix() -> Character {
        Character {
            id: "1".to_string(),
            name: "Asterix".to_string(),
            age: 35,
            profession: "Warrior".to_string(),
        }
    }

    #[test]
    fn empty_patch_keeps_everything() {
        assert_eq!(asterix().merged_with(CharacterPatch::default()), asterix());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let merged = asterix().merged_with(CharacterPatch {
            age: Some(36),
            ..Default::default()
        });
        assert_eq!(merged.name, "Asterix");
        assert_eq!(merged.age, 36);
        assert_eq!(merged.profession, "Warrior");
        assert_eq!(merged.id, "1");
    }

    #[test]
    fn new_character_defaults_missing_fields() {
        let input: NewCharacter = serde_json::from_str(r#"{"name": "Getafix"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Getafix"));
        assert_eq!(input.age, 0);
        assert_eq!(input.profession, "");
    }

    #[test]
    fn new_character_ignores_client_id() {
        let input: NewCharacter =
            serde_json::from_str(r#"{"id": "spoofed", "name": "Dogmatix", "age": 3}"#).unwrap();
        let built = Character::from_candidate("fresh".to_string(), "Dogmatix".to_string(), input);
        assert_eq!(built.id, "fresh");
        assert_eq!(built.age, 3);
    }
}
