//! Shared helpers for repository integration tests.

#![allow(dead_code)]

use aklatan_core::book::{NewBook, ValidBook};
use aklatan_db::{connect_with, run_migrations};
use aklatan_shared::config::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Opens a fresh, migrated in-memory database.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn fresh_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect_with(&config)
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&db).await.expect("Failed to run migrations");
    db
}

/// Builds `count` valid books named `Book000`, `Book001`, ...
pub fn sample_books(count: usize) -> Vec<ValidBook> {
    (0..count)
        .map(|i| {
            NewBook::new(format!("Book{i:03}"), format!("Author{i:03}"))
                .into_valid()
                .expect("sample book is valid")
        })
        .collect()
}
