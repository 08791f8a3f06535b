//! URL handling module for snapcrawl
//!
//! This module provides origin extraction and comparison (used to keep the
//! crawl on the seed's origin) and the sanitized-filename derivation shared
//! by the capture writer and the crawl coordinator.

mod origin;
mod sanitize;

pub use origin::{page_origin, same_origin};
pub use sanitize::sanitize_file_stem;
