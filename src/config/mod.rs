//! Configuration module
//!
//! Resolves where articles and the index live. Paths are relative to the
//! working directory unless an absolute news directory is given.

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Default news directory, relative to the invocation directory
pub const DEFAULT_NEWS_DIR: &str = "news";

const ARTICLES_DIR_NAME: &str = "articles";
const INDEX_FILE_NAME: &str = "index.json";

/// Storage locations for the news store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsConfig {
    news_dir: PathBuf,
}

impl NewsConfig {
    /// Create a configuration rooted at `news_dir`
    #[must_use]
    #[inline]
    pub fn new<P: Into<PathBuf>>(news_dir: P) -> Self {
        Self {
            news_dir: news_dir.into(),
        }
    }

    /// Build the configuration from parsed command-line arguments
    #[must_use]
    #[inline]
    pub fn from_args(args: &Args) -> Self {
        Self::new(&args.news_dir)
    }

    /// Root news directory
    #[must_use]
    #[inline]
    pub fn news_dir(&self) -> &Path {
        &self.news_dir
    }

    /// Directory holding one JSON file per article
    #[must_use]
    #[inline]
    pub fn articles_dir(&self) -> PathBuf {
        self.news_dir.join(ARTICLES_DIR_NAME)
    }

    /// Path of the index file
    #[must_use]
    #[inline]
    pub fn index_file(&self) -> PathBuf {
        self.news_dir.join(INDEX_FILE_NAME)
    }

    /// Path of an article file inside the articles directory
    #[must_use]
    #[inline]
    pub fn article_path(&self, filename: &str) -> PathBuf {
        self.articles_dir().join(filename)
    }
}

impl Default for NewsConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_NEWS_DIR)
    }
}
