//! Repository seams for each resource, with in-memory and PostgreSQL variants.

mod memory;
mod postgres;

pub use memory::{InMemoryBoardingRepository, InMemoryBookRepository};
pub use postgres::{ensure_books_table, PgBookRepository};

use crate::error::StoreError;
use crate::model::{Boarding, Book, BookInput};
use async_trait::async_trait;

/// How many rows `GET /books/new` returns at most.
pub const NEWEST_LIMIT: i64 = 5;

/// Book persistence. Missing rows are `None`/`false`; `Err` is reserved for store failures.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in storage order, or only those whose year equals `year`.
    async fn list(&self, year: Option<i32>) -> Result<Vec<Book>, StoreError>;

    /// Up to `limit` books, newest `created_at` first.
    async fn list_newest(&self, limit: i64) -> Result<Vec<Book>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError>;

    /// Store assigns `id`, `created_at` and `updated_at`.
    async fn create(&self, input: &BookInput) -> Result<Book, StoreError>;

    /// Overwrites every mutable field and refreshes `updated_at`.
    async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, StoreError>;

    /// Returns false when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Read-only boarding lookups.
#[async_trait]
pub trait BoardingRepository: Send + Sync {
    async fn all(&self) -> Vec<Boarding>;

    async fn by_pet_name(&self, name: &str) -> Vec<Boarding>;

    async fn by_id(&self, id: &str) -> Vec<Boarding>;
}
