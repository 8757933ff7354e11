//! `SeaORM` entity definitions.

pub mod books;
