//! Store backends.
//!
//! Each backend implements [`asterix_core::store::CharacterStore`]:
//! - [`PgCharacterStore`] keeps one row per character in Postgres
//! - [`MemoryCharacterStore`] keeps documents in process, for local runs
//!   without a database and for tests

pub mod memory;
pub mod postgres;

pub use memory::MemoryCharacterStore;
pub use postgres::PgCharacterStore;
