//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod books;
pub mod health;

/// Creates the router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(books::routes())
}
