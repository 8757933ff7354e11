//! CSV import of books.
//!
//! The expected layout is a header row followed by `id,title,author`
//! records. The id column is ignored; ids are assigned by the database.
//! An import is all or nothing: every row is validated before anything is
//! written, and the rows are inserted in one transaction.

use std::io::Read;

use aklatan_core::book::{BookError, NewBook, ValidBook};
use csv::{ReaderBuilder, StringRecord};
use sea_orm::DbErr;
use thiserror::Error;
use tracing::info;

use crate::repositories::BookRepository;

const TITLE_COLUMN: usize = 1;
const AUTHOR_COLUMN: usize = 2;

/// Errors that can occur while importing books.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input is not readable CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input has no header row.
    #[error("Missing header row")]
    MissingHeader,

    /// A record lacks the title or author column.
    #[error("Line {line}: expected at least {} columns, found {found}", AUTHOR_COLUMN + 1)]
    ShortRecord {
        /// 1-based line of the record.
        line: u64,
        /// Number of columns present.
        found: usize,
    },

    /// A record has an empty title or author.
    #[error("Line {line}: {source}")]
    InvalidBook {
        /// 1-based line of the record.
        line: u64,
        /// Validation failure.
        source: BookError,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of books inserted.
    pub inserted: u64,
}

/// Parses and validates every book record in `reader`.
///
/// # Errors
///
/// Returns the first malformed, short, or invalid record.
pub fn read_books<R: Read>(reader: R) -> Result<Vec<ValidBook>, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = rdr.records();

    match records.next() {
        Some(header) => {
            header?;
        }
        None => return Err(ImportError::MissingHeader),
    }

    records
        .map(|record| parse_record(&record?))
        .collect()
}

fn parse_record(record: &StringRecord) -> Result<ValidBook, ImportError> {
    let line = record.position().map_or(0, csv::Position::line);

    let (Some(title), Some(author)) = (record.get(TITLE_COLUMN), record.get(AUTHOR_COLUMN)) else {
        return Err(ImportError::ShortRecord {
            line,
            found: record.len(),
        });
    };

    NewBook::new(title, author)
        .into_valid()
        .map_err(|source| ImportError::InvalidBook { line, source })
}

/// Imports every book in `reader` through `repo`.
///
/// # Errors
///
/// Returns an error if the CSV is invalid or the insert fails; nothing is
/// written in either case.
pub async fn import_csv<R: Read>(
    reader: R,
    repo: &BookRepository,
) -> Result<ImportSummary, ImportError> {
    let books = read_books(reader)?;
    let parsed = books.len();

    let inserted = repo.insert_many(books).await?;
    info!(parsed, inserted, "Imported books from CSV");

    Ok(ImportSummary { inserted })
}
