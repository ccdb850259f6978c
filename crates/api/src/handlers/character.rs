//! Handlers for the `/characters` resource.

use asterix_core::character::{Character, CharacterPatch, NewCharacter};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::state::AppState;

/// Query parameters for the list endpoint (`?age=N`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Only return characters with `age <= age`.
    pub age: Option<i32>,
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = match params.age {
        Some(max_age) => state.characters.list_by_max_age(max_age).await?,
        None => state.characters.list().await?,
    };
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Character>> {
    let character = state.characters.find_existing(&id).await?;
    Ok(Json(character))
}

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let character = state.characters.create(input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/v1/characters/{id}
///
/// Full replacement. An unknown id is created, not rejected.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<NewCharacter>,
) -> AppResult<Json<Character>> {
    let character = state.characters.replace(&id, input).await?;
    Ok(Json(character))
}

/// PATCH /api/v1/characters/{id}
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<CharacterPatch>,
) -> AppResult<Json<Character>> {
    let character = state.characters.patch(&id, input).await?;
    Ok(Json(character))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.characters.delete_existing(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
