//! Data model module
//!
//! Article records, their tags, the article index and the fixed option sets
//! used by the appearance fields.

pub mod article;
pub mod index;
pub mod options;

pub use article::*;
pub use index::*;
pub use options::*;

use anyhow::{Context as _, Result};
use serde::Serialize;

/// Serialize a value the way article and index files are stored on disk:
/// two-space indentation, non-ASCII characters written literally, no
/// trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}
