//! Book CRUD handlers: list, newest, read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Book, BookInput};
use crate::response::{created, message, ok, MessageBody};
use crate::state::AppState;
use crate::store::NEWEST_LIMIT;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

const BOOK_NOT_FOUND: &str = "book not found";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksParams {
    /// Exact publication year to match.
    pub year: Option<String>,
}

/// An empty `year` is the same as no filter. A year that is not an integer fails the
/// query as an internal error carrying the parser's text; it is not a client error.
fn parse_year(raw: Option<&str>) -> Result<Option<i32>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e: std::num::ParseIntError| {
                AppError::Internal(format!("invalid input syntax for type integer: {:?}: {}", s, e))
            }),
    }
}

/// Ids are serial integers, so a non-numeric id cannot name a book. GET, PUT and DELETE
/// on `/books/:id` all list 404 as a failure, so such an id answers 404 "book not found"
/// rather than surfacing a store error.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::NotFound(BOOK_NOT_FOUND.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "Books",
    params(ListBooksParams),
    responses(
        (status = 200, description = "All books, or those from the given year", body = [Book]),
        (status = 500, description = "Store failure, or year is not an integer", body = ErrorBody)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> Result<impl IntoResponse, AppError> {
    let year = parse_year(params.year.as_deref())?;
    let books = state.books.list(year).await?;
    Ok(ok(books))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/new",
    tag = "Books",
    responses(
        (status = 200, description = "Up to 5 books, newest first", body = [Book]),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn list_new_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.books.list_newest(NEWEST_LIMIT).await?;
    Ok(ok(books))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, body = Book),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let book = state
        .books
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.into()))?;
    Ok(ok(book))
}

#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "Books",
    request_body = BookInput,
    responses(
        (status = 201, body = Book),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let book = state.books.create(&input).await?;
    tracing::debug!(id = book.id, "book created");
    Ok(created(book))
}

#[utoipa::path(
    put,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, body = Book),
        (status = 400, description = "Malformed JSON body", body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload?;
    let id = parse_id(&id)?;
    let book = state
        .books
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.into()))?;
    tracing::debug!(id, "book updated");
    Ok(ok(book))
}

#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = "Books",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, body = MessageBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    if !state.books.delete(id).await? {
        return Err(AppError::NotFound(BOOK_NOT_FOUND.into()));
    }
    tracing::debug!(id, "book deleted");
    Ok(message(StatusCode::OK, "book deleted successfully"))
}
