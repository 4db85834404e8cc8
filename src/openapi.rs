//! OpenAPI document for the public endpoints.

use crate::error::ErrorBody;
use crate::handlers::{boarding, books, system};
use crate::model::{Boarding, Book, BookInput};
use crate::response::{MessageBody, UnhealthyBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "BookStore API", version = "1.0", description = "This is the BookStore API server."),
    paths(
        books::list_books,
        books::list_new_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        boarding::list_boardings,
        boarding::boarding_by_id,
        system::health
    ),
    components(schemas(Book, BookInput, Boarding, ErrorBody, MessageBody, UnhealthyBody)),
    tags(
        (name = "Books", description = "Book store CRUD"),
        (name = "Boarding", description = "Pet boarding lookups"),
        (name = "System", description = "Liveness")
    )
)]
pub struct ApiDoc;
