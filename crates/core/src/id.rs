//! Identifier generation for new character documents.

use uuid::Uuid;

/// Source of fresh document ids.
///
/// Injected into the service so tests can pin the generated value.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 128-bit ids rendered as hyphenated UUID v4 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
