//! Resource records: books (persisted), boardings and students (in-process).

pub mod boarding;
pub mod book;
pub mod student;

pub use boarding::Boarding;
pub use book::{Book, BookInput};
pub use student::{Student, StudentError};
