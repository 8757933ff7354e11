//! One-shot "book saved" notice carried across the post/redirect/get cycle.
//!
//! The cookie holds only the new book's id; the title is looked up when the
//! notice is shown, so no user text travels in the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "flash_book";

/// Records that book `id` was just saved.
#[must_use]
pub fn set_saved(jar: CookieJar, id: i32) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, id.to_string()))
            .path("/")
            .http_only(true),
    )
}

/// Takes the saved-book id, if any, clearing the cookie.
#[must_use]
pub fn take_saved(jar: CookieJar) -> (CookieJar, Option<i32>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };

    let id = cookie.value().parse().ok();
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), id)
}
