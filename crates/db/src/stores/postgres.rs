//! Postgres-backed store for the `characters` table.

use async_trait::async_trait;
use asterix_core::character::Character;
use asterix_core::error::StoreError;
use asterix_core::store::CharacterStore;
use sqlx::{FromRow, PgPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, profession";

#[derive(Debug, FromRow)]
struct CharacterRow {
    id: String,
    name: String,
    age: i32,
    profession: String,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            profession: row.profession,
        }
    }
}

/// Character store over a shared [`PgPool`].
#[derive(Debug, Clone)]
pub struct PgCharacterStore {
    pool: PgPool,
}

impl PgCharacterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Character query failed");
    StoreError::new(err)
}

#[async_trait]
impl CharacterStore for PgCharacterStore {
    /// Rows come back in insertion order.
    async fn find_all(&self) -> Result<Vec<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY created_seq ASC");
        let rows = sqlx::query_as::<_, CharacterRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(Character::from))
    }

    /// Upsert by id. An overwrite keeps the row's original `created_seq`.
    async fn save(&self, character: Character) -> Result<Character, StoreError> {
        let query = format!(
            "INSERT INTO characters (id, name, age, profession)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                profession = EXCLUDED.profession
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(&character.id)
            .bind(&character.name)
            .bind(character.age)
            .bind(&character.profession)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        tracing::debug!(id, removed = result.rows_affected(), "Delete by id");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(StoreError::new)
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
