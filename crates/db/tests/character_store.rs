//! Integration tests for `PgCharacterStore` against a real database.
//!
//! Need a reachable Postgres via `DATABASE_URL`; run with
//! `cargo test -p asterix-db -- --ignored`.

use asterix_core::character::Character;
use asterix_core::store::CharacterStore;
use asterix_db::PgCharacterStore;
use sqlx::PgPool;

fn character(id: &str, name: &str, age: i32, profession: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        age,
        profession: profession.to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn save_and_find_by_id(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    let saved = store
        .save(character("1", "Max", 10, "Warrior"))
        .await
        .unwrap();

    assert_eq!(saved, character("1", "Max", 10, "Warrior"));
    assert_eq!(store.find_by_id("1").await.unwrap(), Some(saved));
    assert_eq!(store.find_by_id("2").await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn save_upserts_and_keeps_order(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    store.save(character("1", "Max", 10, "Warrior")).await.unwrap();
    store.save(character("2", "Obelix", 35, "Builder")).await.unwrap();
    store.save(character("1", "Max", 11, "Chief")).await.unwrap();

    let all = store.find_all().await.unwrap();
    assert_eq!(
        all,
        vec![
            character("1", "Max", 11, "Chief"),
            character("2", "Obelix", 35, "Builder"),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_by_id_is_a_noop_when_absent(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    store.save(character("1", "Max", 10, "")).await.unwrap();

    store.delete_by_id("1").await.unwrap();
    store.delete_by_id("1").await.unwrap();

    assert!(store.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn empty_name_is_rejected_by_schema(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    assert!(store.save(character("1", "", 10, "")).await.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn ping_succeeds(pool: PgPool) {
    asterix_db::health_check(&pool).await.unwrap();
    let store = PgCharacterStore::new(pool);
    assert!(store.ping().await.is_ok());
    assert_eq!(store.kind(), "postgres");
}
