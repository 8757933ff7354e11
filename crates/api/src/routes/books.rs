//! Book listing and creation pages.

use aklatan_core::book::NewBook;
use aklatan_db::BookRepository;
use aklatan_shared::{AppError, types::PageRequest};
use axum::{
    Form, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::DbErr;
use tera::Context;
use tracing::{error, info, warn};

use crate::{ApiError, AppState, flash, templates};

/// Where the index lives; the root and successful posts redirect here.
const INDEX_PATH: &str = "/books/";

/// Creates the book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_redirect))
        .route("/books", get(index_redirect))
        .route("/books/", get(book_index_get))
        .route("/books/new", get(book_new_get).post(book_new_post))
}

/// GET `/` and `/books` - Permanent redirect to the book index.
async fn index_redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, INDEX_PATH)])
}

/// GET `/books/?page=N` - One page of books, oldest first.
async fn book_index_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(request): Query<PageRequest>,
) -> Result<(CookieJar, Html<String>), ApiError> {
    let repo = BookRepository::new((*state.db).clone());

    let total = repo.count().await.map_err(db_error("Failed to count books"))?;
    let total = i64::try_from(total)
        .map_err(|_| AppError::Internal(format!("book count {total} out of range")))?;

    let paginate = request.paginate(total, state.per_page).map_err(|e| {
        warn!(page = %request.page, error = %e, "Rejected book index page");
        e
    })?;

    // Both are non-negative once paginate() succeeds.
    let limit = u64::try_from(state.per_page).unwrap_or_default();
    let offset = u64::try_from(paginate.offset()).unwrap_or_default();
    let books = repo
        .list_page(limit, offset)
        .await
        .map_err(db_error("Failed to list books"))?;

    let (jar, saved) = flash::take_saved(jar);
    let flash = match saved {
        Some(id) => repo
            .find_by_id(id)
            .await
            .map_err(db_error("Failed to load saved book"))?
            .map(|book| book.title),
        None => None,
    };

    let mut context = Context::new();
    context.insert("books", &books);
    context.insert("paginate", &paginate);
    context.insert("pages", &paginate.pages());
    context.insert("flash", &flash);

    let page = templates::render(&state.templates, "books/index.html", &context)
        .map_err(template_error)?;
    Ok((jar, page))
}

/// GET `/books/new` - Empty book form.
async fn book_new_get(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render_form(&state, &NewBook::default(), &[])
}

/// POST `/books/new` - Validate and save a book, then redirect to the index.
async fn book_new_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<NewBook>,
) -> Result<Response, ApiError> {
    let book = match input.clone().into_valid() {
        Ok(book) => book,
        Err(e) => {
            info!(error = %e, "Rejected new book");
            let page = render_form(&state, &input, &e.messages())?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    let repo = BookRepository::new((*state.db).clone());
    let saved = repo
        .create(book)
        .await
        .map_err(db_error("Failed to save book"))?;
    info!(book_id = saved.id, title = %saved.title, "Saved new book");

    let jar = flash::set_saved(jar, saved.id);
    Ok((jar, (StatusCode::FOUND, [(header::LOCATION, INDEX_PATH)])).into_response())
}

fn render_form(
    state: &AppState,
    input: &NewBook,
    errors: &[String],
) -> Result<Html<String>, ApiError> {
    let mut context = Context::new();
    context.insert("errors", errors);
    context.insert("title", input.title.as_deref().unwrap_or_default());
    context.insert("author", input.author.as_deref().unwrap_or_default());

    templates::render(&state.templates, "books/new.html", &context)
        .map_err(template_error)
}

fn db_error(context: &'static str) -> impl FnOnce(DbErr) -> ApiError {
    move |e| {
        error!(error = %e, "{context}");
        ApiError(AppError::Database(e.to_string()))
    }
}

fn template_error(e: AppError) -> ApiError {
    error!(error = %e, "Failed to render page");
    ApiError(e)
}
