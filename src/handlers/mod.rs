//! HTTP handlers for books, boardings, health and version.

pub mod boarding;
pub mod books;
pub mod system;
pub use boarding::*;
pub use books::*;
pub use system::*;
