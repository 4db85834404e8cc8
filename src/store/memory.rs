//! In-process repositories: a mutable book list and the fixed boarding seed list.

use super::{BoardingRepository, BookRepository};
use crate::error::StoreError;
use crate::model::{Boarding, Book, BookInput};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Default)]
struct BookTable {
    rows: Vec<Book>,
    next_id: i32,
    last_stamp: Option<DateTime<Utc>>,
}

impl BookTable {
    /// Wall clock, clamped so stamps never go backwards within this table.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}

/// Book store kept in a `Vec` in insertion order. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryBookRepository {
    table: RwLock<BookTable>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `inputs` already created, in order.
    pub fn seeded(inputs: &[BookInput]) -> Self {
        let mut table = BookTable::default();
        for input in inputs {
            insert(&mut table, input);
        }
        InMemoryBookRepository {
            table: RwLock::new(table),
        }
    }
}

fn insert(table: &mut BookTable, input: &BookInput) -> Book {
    table.next_id += 1;
    let now = table.stamp();
    let book = Book {
        id: table.next_id,
        title: input.title.clone(),
        author: input.author.clone(),
        isbn: input.isbn.clone(),
        year: input.year,
        price: input.price,
        created_at: now,
        updated_at: now,
    };
    table.rows.push(book.clone());
    book
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self, year: Option<i32>) -> Result<Vec<Book>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .filter(|b| year.map_or(true, |y| b.year == y))
            .cloned()
            .collect())
    }

    async fn list_newest(&self, limit: i64) -> Result<Vec<Book>, StoreError> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(usize::try_from(limit.max(0)).unwrap_or(0));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Book>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, input: &BookInput) -> Result<Book, StoreError> {
        let mut table = self.table.write().await;
        Ok(insert(&mut table, input))
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<Option<Book>, StoreError> {
        let mut table = self.table.write().await;
        let now = table.stamp();
        let Some(book) = table.rows.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        book.title = input.title.clone();
        book.author = input.author.clone();
        book.isbn = input.isbn.clone();
        book.year = input.year;
        book.price = input.price;
        book.updated_at = now.max(book.created_at);
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|b| b.id != id);
        Ok(table.rows.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Boarding records fixed at construction; never mutated afterwards.
pub struct InMemoryBoardingRepository {
    rows: Vec<Boarding>,
}

impl InMemoryBoardingRepository {
    pub fn new(rows: Vec<Boarding>) -> Self {
        InMemoryBoardingRepository { rows }
    }

    pub fn seeded() -> Self {
        Self::new(Boarding::seed())
    }
}

#[async_trait]
impl BoardingRepository for InMemoryBoardingRepository {
    async fn all(&self) -> Vec<Boarding> {
        self.rows.clone()
    }

    async fn by_pet_name(&self, name: &str) -> Vec<Boarding> {
        self.rows.iter().filter(|b| b.pet_name == name).cloned().collect()
    }

    async fn by_id(&self, id: &str) -> Vec<Boarding> {
        self.rows.iter().filter(|b| b.id == id).cloned().collect()
    }
}
