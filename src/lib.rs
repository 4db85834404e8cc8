//! Book-store REST service: PostgreSQL-backed book CRUD, in-memory pet boarding lookups, student validation.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{DbConfig, PoolConfig, ServerConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use routes::{app_router, boarding_routes, book_routes, common_routes};
pub use state::AppState;
pub use store::{
    ensure_books_table, BoardingRepository, BookRepository, InMemoryBoardingRepository, InMemoryBookRepository,
    PgBookRepository,
};
