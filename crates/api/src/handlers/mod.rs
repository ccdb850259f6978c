//! Request handlers.
//!
//! Handlers delegate to the [`CharacterService`](asterix_core::service::CharacterService)
//! held in [`AppState`](crate::state::AppState) and map errors via
//! [`AppError`](crate::error::AppError).

pub mod character;
