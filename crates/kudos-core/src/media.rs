//! Media path conventions.
//!
//! Pure string functions. Generated letters live in a flat media directory
//! and are served back under [`MEDIA_ROUTE`].

use uuid::Uuid;

pub const MEDIA_ROUTE: &str = "/media";

pub fn letter_filename(id: Uuid) -> String {
    format!("letter_{}.pdf", id.simple())
}

/// Public URL of a generated file: `<base>media/<filename>`.
pub fn media_url(base_url: &str, filename: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}{MEDIA_ROUTE}/{filename}")
}
