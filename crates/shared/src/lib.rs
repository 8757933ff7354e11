//! Shared types, errors, and configuration for Aklatan.
//!
//! This crate provides common types used across all other crates:
//! - Pagination calculator for list views
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
