//! kudos-export
//!
//! Letter HTML from templates, PDF through a pluggable HTML renderer,
//! and atomic writes of the result.

pub mod error;
pub mod options;
pub mod pdf;
pub mod render;
pub mod writer;
