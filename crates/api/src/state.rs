use std::sync::Arc;

use asterix_core::service::CharacterService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Character management service wired to the configured store.
    pub characters: Arc<CharacterService>,
}
