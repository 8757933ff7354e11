//! HTTP layer with Axum routes and Tera templates.
//!
//! This crate provides:
//! - Book listing and creation pages
//! - Flash messages carried across redirects
//! - Error-to-response mapping

pub mod error;
pub mod flash;
pub mod routes;
pub mod templates;

use std::{path::PathBuf, sync::Arc};

use aklatan_shared::{AppConfig, AppError, AppResult};
use axum::Router;
use sea_orm::DatabaseConnection;
use tera::Tera;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Compiled page templates.
    pub templates: Arc<Tera>,
    /// Books shown per index page.
    pub per_page: i64,
    /// Directory served under `/static`.
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Builds the state from a connection and the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the configuration fails
    /// [`AppConfig::validate`], and [`AppError::Template`] if the embedded
    /// templates fail to compile.
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let templates = templates::load().map_err(|e| AppError::Template(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            templates: Arc::new(templates),
            per_page: config.books.per_page,
            static_dir: Arc::new(PathBuf::from(&config.web.static_dir)),
        })
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
