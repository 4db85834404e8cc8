//! `books` table access over a sqlx `PgPool`.

use super::BookRepository;
use crate::error::StoreError;
use crate::model::{Book, BookInput};
use async_trait::async_trait;
use sqlx::PgPool;

const BOOK_COLUMNS: &str = "id, title, author, isbn, year, price, created_at, updated_at";

/// Create the `books` table if it does not exist. Safe to call on every start.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS books (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            isbn TEXT NOT NULL,
            year INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        PgBookRepository { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self, year: Option<i32>) -> Result<Vec<Book>, StoreError> {
        let rows = match year {
            None => {
                let sql = format!("SELECT {} FROM books ORDER BY id", BOOK_COLUMNS);
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?
            }
            Some(year) => {
                let sql = format!("SELECT {} FROM books WHERE year = $1 ORDER BY id", BOOK_COLUMNS);
                tracing::debug!(sql = %sql, year, "query");
                sqlx::query_as::<_, Book>(&sql)
                    .bind(year)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    async fn list_newest(&self, limit: i64) -> Result<Vec<Book>, StoreError> {
        let sql = format!(
            "SELECT {} FROM books ORDER BY created_at DESC, id DESC LIMIT $1",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, limit, "query");
        let rows = sqlx::query_as::<_, Book>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let sql = format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &BookInput) -> Result<Book, StoreError> {
        let sql = format!(
            "INSERT INTO books (title, author, isbn, year, price) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(input.year)
            .bind(input.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, StoreError> {
        let sql = format!(
            "UPDATE books SET title = $1, author = $2, isbn = $3, year = $4, price = $5, \
             updated_at = GREATEST(NOW(), created_at) WHERE id = $6 RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(input.year)
            .bind(input.price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let sql = "DELETE FROM books WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
