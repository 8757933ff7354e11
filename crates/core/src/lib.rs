//! Core business logic for Aklatan.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `book` - Book input rules shared by the web form and the CSV importer

pub mod book;
