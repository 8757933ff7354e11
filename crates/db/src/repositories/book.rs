//! Book repository for database operations.

use aklatan_core::book::ValidBook;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::entities::books;

/// Rows per multi-row INSERT, kept well under SQLite's bound-parameter limit.
const INSERT_CHUNK: usize = 200;

/// Book repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    db: DatabaseConnection,
}

impl BookRepository {
    /// Creates a new book repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all books.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        books::Entity::find().count(&self.db).await
    }

    /// Lists one page of books, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_page(&self, limit: u64, offset: u64) -> Result<Vec<books::Model>, DbErr> {
        books::Entity::find()
            .order_by_asc(books::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
    }

    /// Finds a book by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<books::Model>, DbErr> {
        books::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new book.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, book: ValidBook) -> Result<books::Model, DbErr> {
        to_active_model(book).insert(&self.db).await
    }

    /// Inserts many books in a single transaction, all or nothing.
    ///
    /// Returns the number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is written in that case.
    pub async fn insert_many(&self, books: Vec<ValidBook>) -> Result<u64, DbErr> {
        if books.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        let mut inserted = 0;

        let mut rows = books.into_iter().map(to_active_model).peekable();
        while rows.peek().is_some() {
            let chunk: Vec<books::ActiveModel> = rows.by_ref().take(INSERT_CHUNK).collect();
            inserted += books::Entity::insert_many(chunk)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(inserted)
    }
}

fn to_active_model(book: ValidBook) -> books::ActiveModel {
    let (title, author) = book.into_parts();
    books::ActiveModel {
        id: NotSet,
        title: Set(title),
        author: Set(author),
    }
}
