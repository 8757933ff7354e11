//! Book input types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::error::{BookError, FieldError};

/// Form fields in display order: (field name, display name).
const FIELDS: [(&str, &str); 2] = [("title", "Title"), ("author", "Author")];

/// Unvalidated book input, as submitted by the form or read from a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewBook {
    /// Book title.
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    /// Book author.
    #[validate(required, length(min = 1))]
    pub author: Option<String>,
}

impl NewBook {
    /// Creates input from plain strings.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// Validates the input, reporting every missing or empty field.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Validation`] listing each rejected field in form order.
    pub fn into_valid(self) -> Result<ValidBook, BookError> {
        let rejected: Vec<FieldError> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let field_errors = errors.field_errors();
                FIELDS
                    .into_iter()
                    .filter(|(name, _)| field_errors.contains_key(*name))
                    .map(|(_, display)| FieldError::required(display))
                    .collect()
            }
        };

        match (self.title, self.author) {
            (Some(title), Some(author)) if rejected.is_empty() => Ok(ValidBook { title, author }),
            _ => Err(BookError::Validation(rejected)),
        }
    }
}

/// Book input that passed validation: title and author are both non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidBook {
    title: String,
    author: String,
}

impl ValidBook {
    /// Book title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Book author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Consumes the book, returning `(title, author)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.author)
    }
}
