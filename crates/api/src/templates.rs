//! Page templates, compiled into the binary.

use aklatan_shared::AppError;
use axum::response::Html;
use tera::{Context, Tera};

/// Embedded templates as `(name, source)`.
const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    (
        "books/index.html",
        include_str!("../templates/books/index.html"),
    ),
    ("books/new.html", include_str!("../templates/books/new.html")),
];

/// Compiles the embedded templates.
///
/// # Errors
///
/// Returns an error if a template does not parse.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

/// Renders `name` with `context` into an HTML body.
///
/// # Errors
///
/// Returns [`AppError::Template`] if rendering fails.
pub fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>, AppError> {
    tera.render(name, context)
        .map(Html)
        .map_err(|e| AppError::Template(format!("{name}: {e:?}")))
}
