//! Common types used across the application.

pub mod pagination;

#[cfg(test)]
mod pagination_props;

pub use pagination::{PageRequest, Pagination, PaginationError, pages, paginate};
