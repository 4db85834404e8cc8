//! Shared application state: repository handles built once at startup and injected into every route.

use crate::store::{BoardingRepository, BookRepository, InMemoryBoardingRepository, InMemoryBookRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub boardings: Arc<dyn BoardingRepository>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookRepository>, boardings: Arc<dyn BoardingRepository>) -> Self {
        AppState { books, boardings }
    }

    /// Empty in-memory book store with the seeded boarding list. No database needed.
    pub fn in_memory() -> Self {
        AppState::new(
            Arc::new(InMemoryBookRepository::new()),
            Arc::new(InMemoryBoardingRepository::seeded()),
        )
    }
}
