//! Integration tests for the PostgreSQL repository.
//!
//! These need a reachable server in `DATABASE_URL`, so they are ignored by
//! default. Run with `cargo test -p lifejournal-db -- --ignored`.

use assert_matches::assert_matches;
use lifejournal_db::models::NewJournalEntry;
use lifejournal_db::{Backend, PgRepository, Repository, StoreError};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn food_places_sorted_and_filtered(pool: PgPool) {
    sqlx::query(
        "INSERT INTO food_places (name, location, notes) VALUES \
         ('Zeitgeist', 'seattle', 'coffee'), ('Apple Pan', 'los angeles', NULL), \
         ('Mamnoon', 'seattle', NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();
    let repo = PgRepository::from_pool(pool);

    let all: Vec<String> = repo
        .get_all_food_places()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(all, vec!["Apple Pan", "Mamnoon", "Zeitgeist"]);

    let seattle = repo.get_food_places_by_location("seattle").await.unwrap();
    assert_eq!(seattle.len(), 2);
    assert_eq!(seattle[0].notes, "");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn books_and_people_coalesce_nulls(pool: PgPool) {
    sqlx::query("INSERT INTO books (title) VALUES ('Draft')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO people (id, first, last) VALUES (1, 'Ann', 'Adams')")
        .execute(&pool)
        .await
        .unwrap();
    let repo = PgRepository::from_pool(pool);

    let books = repo.get_all_books().await.unwrap();
    assert_eq!(books[0].pages, 0);
    assert!(!books[0].finished);

    let people = repo.get_all_people().await.unwrap();
    assert_eq!(people[0].birth_year, 0);
    assert_eq!(people[0].email, "");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn journal_and_photo_round_trip(pool: PgPool) {
    let repo = PgRepository::from_pool(pool);
    assert_eq!(repo.backend(), Backend::Postgres);

    repo.create_journal_entry(&NewJournalEntry {
        title: "T".into(),
        entry: "E".into(),
        tags: "tag1,tag2".into(),
        photos: String::new(),
    })
    .await
    .unwrap();

    let entries = repo.get_all_journal_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].tags, "tag1,tag2");

    let id = repo.create_photo("a.gif", b"GIF89a").await.unwrap();
    let photo = repo.get_photo_by_id(id).await.unwrap();
    assert_eq!(photo.file_name, "a.gif");
    assert_eq!(photo.bytes, b"GIF89a");

    let err = repo.get_photo_by_id(id + 1000).await.unwrap_err();
    assert_matches!(err, StoreError::NotFound { .. });
}
