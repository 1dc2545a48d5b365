//! kudos-core
//!
//! Pure domain types for congratulatory letters: the request schema, the
//! sender preset, date formatting and media path conventions.
//! No HTTP or rendering dependency; this is the shared vocabulary of Kudos.

pub mod date;
pub mod error;
pub mod media;
pub mod models;
pub mod sender;
