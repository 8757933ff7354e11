//! Book input validation.

pub mod error;
pub mod types;


pub use error::{BookError, FieldError};
pub use types::{NewBook, ValidBook};
