//! Book CRUD routes, mounted under `/api/v1`.

use crate::handlers::books::{create_book, delete_book, get_book, list_books, list_new_books, update_book};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/new", get(list_new_books))
        .route("/books/:id", get(get_book).put(update_book).delete(delete_book))
        .with_state(state)
}
