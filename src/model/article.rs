//! Article and tag records

use crate::error::NewsError;
use crate::model::options::{ColorScheme, Icon, TagColor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Label of the tag added when an article would otherwise have none
pub const DEFAULT_TAG_LABEL: &str = "Notícia";

/// One news entry, stored as `<id>.json` in the articles directory
///
/// Field order here is the field order on disk. Keys this tool doesn't know
/// about are carried in `extra` and written back after the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    /// Publication month as `YYYY-MM`
    pub date: String,
    /// Human-readable date, e.g. `Janeiro 2025`
    pub date_display: String,
    pub title: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A labeled, colored badge attached to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub icon: Icon,
    pub color: TagColor,
    /// Keys this tool doesn't know about, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    /// The tag every article falls back to when none were entered
    #[must_use]
    #[inline]
    pub fn fallback() -> Self {
        Self {
            label: DEFAULT_TAG_LABEL.to_owned(),
            icon: Icon::Newspaper,
            color: TagColor::Blue,
            extra: Map::new(),
        }
    }
}

/// Title and display date of an article, read leniently for listings
///
/// Listing only needs these two fields, so a file that wouldn't load as a
/// full [`Article`] (an unknown icon, a missing tag list) still lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date_display: Option<String>,
}

impl Article {
    /// File name the article is stored under
    #[must_use]
    #[inline]
    pub fn filename(&self) -> String {
        filename_for(&self.id)
    }

    /// Append the fallback tag if the tag list is empty
    #[inline]
    pub fn ensure_tag(&mut self) {
        if self.tags.is_empty() {
            self.tags.push(Tag::fallback());
        }
    }

    /// Check that the required fields are present
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id`, `title`, `description` or `link` is blank
    /// - The tag list is empty
    #[inline]
    pub fn validate(&self) -> Result<(), NewsError> {
        let required = [
            ("id", &self.id),
            ("title", &self.title),
            ("description", &self.description),
            ("link", &self.link),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(NewsError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        if self.tags.is_empty() {
            return Err(NewsError::validation("An article needs at least one tag"));
        }

        Ok(())
    }
}

/// File name for an article id
#[must_use]
#[inline]
pub fn filename_for(id: &str) -> String {
    format!("{id}.json")
}
