//! The article index: which article files exist, newest first

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contents of `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleIndex {
    /// Article file names, newest first
    #[serde(default)]
    pub articles: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleIndex {
    /// Whether `filename` is listed
    #[must_use]
    #[inline]
    pub fn contains(&self, filename: &str) -> bool {
        self.articles.iter().any(|entry| entry == filename)
    }

    /// Put `filename` at the front unless it is already listed
    ///
    /// Returns `true` if the index changed.
    #[inline]
    pub fn insert_front(&mut self, filename: &str) -> bool {
        if self.contains(filename) {
            return false;
        }
        self.articles.insert(0, filename.to_owned());
        true
    }

    /// Drop every occurrence of `filename`
    ///
    /// Returns `true` if the index changed.
    #[inline]
    pub fn remove(&mut self, filename: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|entry| entry != filename);
        self.articles.len() != before
    }
}
