//! Asterix core domain.
//!
//! Holds the character model, the error type shared by every layer, the
//! identifier generator, the persistence store seam and the
//! [`CharacterService`](service::CharacterService) that ties them together.

pub mod character;
pub mod error;
pub mod id;
pub mod service;
pub mod store;
pub mod types;
