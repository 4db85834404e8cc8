//! Runs against a live PostgreSQL only when `TEST_DATABASE_URL` is set; otherwise each test returns early.

use bookstore_api::model::BookInput;
use bookstore_api::{ensure_books_table, BookRepository, PgBookRepository};
use sqlx::postgres::PgPoolOptions;

async fn repo() -> Option<PgBookRepository> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL missing; skipping postgres store tests");
            return None;
        }
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    ensure_books_table(&pool).await.expect("create books table");
    Some(PgBookRepository::new(pool))
}

/// A year no real fixture uses, so filters only see this run's rows.
fn scratch_year() -> i32 {
    -(std::process::id() as i32 % 100_000) - 1
}

fn input(title: &str, year: i32) -> BookInput {
    BookInput {
        title: title.into(),
        author: "pg test".into(),
        isbn: "000".into(),
        year,
        price: 1.25,
    }
}

#[tokio::test]
async fn crud_round_trip() {
    let Some(repo) = repo().await else { return };
    repo.ping().await.unwrap();

    let created = repo.create(&input("pg-crud", scratch_year())).await.unwrap();
    assert!(created.created_at <= created.updated_at);

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update(created.id, &input("pg-crud-renamed", scratch_year()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "pg-crud-renamed");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.update(created.id, &input("x", 0)).await.unwrap().is_none());
}

#[tokio::test]
async fn year_filter_and_newest() {
    let Some(repo) = repo().await else { return };
    let year = scratch_year() - 100_000;
    let a = repo.create(&input("pg-year-a", year)).await.unwrap();
    let b = repo.create(&input("pg-year-b", year)).await.unwrap();

    let rows = repo.list(Some(year)).await.unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![a.id, b.id]);

    let newest = repo.list_newest(5).await.unwrap();
    assert!(newest.len() <= 5);
    assert!(newest.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    repo.delete(a.id).await.unwrap();
    repo.delete(b.id).await.unwrap();
}
