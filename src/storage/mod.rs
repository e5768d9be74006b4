//! Article storage and index maintenance
//!
//! Each article is one JSON file in the articles directory. The index file
//! lists which articles exist, newest first, and is read-modify-written on
//! every save and delete. The index is authoritative for listing; a listed
//! file that is missing or broken is only noticed when it is loaded.

use crate::config::NewsConfig;
use crate::error::NewsError;
use crate::model::{Article, ArticleIndex, ArticleSummary};
use crate::system::System;
use crate::utils::fs::{create_parent_directories, ensure_directory, read_json, write_json};
use anyhow::{Context as _, Result};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What [`NewsStore::update_index`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUpdate {
    /// The file name was added at the front
    Inserted,
    /// The file name was already listed, nothing changed
    AlreadyPresent,
}

/// Result of saving an article
///
/// The article write and the index update are reported separately: a saved
/// article whose index update failed is still saved.
#[derive(Debug)]
pub struct SaveReport {
    pub path: PathBuf,
    pub index: Result<IndexUpdate>,
}

/// Result of deleting an article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
    /// The article file existed and was removed
    pub file_removed: bool,
    /// The index listed the file name and was rewritten without it
    pub index_updated: bool,
}

/// One index entry as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub filename: String,
    /// Title and date, or why the file couldn't be read
    pub summary: Result<ArticleSummary, String>,
}

/// Every entry of the index, in index order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    /// Whether the index file exists at all
    pub index_found: bool,
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    /// File names in index order
    #[must_use]
    #[inline]
    pub fn filenames(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.filename.clone())
            .collect()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads and writes articles and the index through a [`System`]
#[non_exhaustive]
pub struct NewsStore<'src> {
    system: &'src dyn System,
    config: NewsConfig,
}

impl<'src> NewsStore<'src> {
    /// Create a store over `system` using the locations in `config`
    #[must_use]
    #[inline]
    pub fn new(system: &'src dyn System, config: NewsConfig) -> Self {
        Self { system, config }
    }

    #[must_use]
    #[inline]
    pub const fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Load the index, or `None` if the index file doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index file exists but cannot be read
    /// - The index file is not valid JSON
    #[inline]
    pub fn load_index(&self) -> Result<Option<ArticleIndex>> {
        let path = self.config.index_file();
        if !self
            .system
            .exists(&path)
            .with_context(|| format!("Failed to inspect index file: {}", path.display()))?
        {
            debug!("No index file at {}", path.display());
            return Ok(None);
        }
        read_json(self.system, &path)
            .context("Failed to load the article index")
            .map(Some)
    }

    /// List every article named in the index
    ///
    /// A listed file that fails to load is reported in its entry and does
    /// not stop the listing. A missing index gives an empty listing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index file exists but cannot be read or parsed
    #[inline]
    pub fn list_articles(&self) -> Result<Listing> {
        let Some(index) = self.load_index()? else {
            return Ok(Listing::default());
        };

        let entries = index
            .articles
            .into_iter()
            .map(|filename| {
                let path = self.config.article_path(&filename);
                let summary = read_json::<ArticleSummary>(self.system, &path).map_err(|e| {
                    warn!("Could not read listed article {filename}: {e:#}");
                    format!("{e:#}")
                });
                ListingEntry { filename, summary }
            })
            .collect();

        Ok(Listing {
            index_found: true,
            entries,
        })
    }

    /// Whether an article file with this name exists
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The filesystem cannot be queried
    #[inline]
    pub fn article_exists(&self, filename: &str) -> Result<bool> {
        let path = self.config.article_path(filename);
        self.system
            .exists(&path)
            .with_context(|| format!("Failed to inspect article file: {}", path.display()))
    }

    /// Load a full article record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The article file cannot be read
    /// - The file is not a valid article
    #[inline]
    pub fn load_article(&self, filename: &str) -> Result<Article> {
        read_json(self.system, &self.config.article_path(filename))
            .with_context(|| format!("Failed to load article {filename}"))
    }

    /// Write an article to its file, then record it in the index
    ///
    /// The articles directory is created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The article is missing a required field or has no tags
    /// - The articles directory cannot be created
    /// - The article file cannot be written
    ///
    /// An index failure after a successful write is reported in the
    /// returned [`SaveReport`] instead.
    #[inline]
    pub fn save_article(&self, filename: &str, article: &Article) -> Result<SaveReport> {
        article.validate()?;

        let path = self.config.article_path(filename);
        create_parent_directories(self.system, &path)?;
        write_json(self.system, &path, article)
            .map_err(|e| NewsError::storage(format!("{e:#}")))?;
        info!("Saved article {}", path.display());

        let index = self.update_index(filename);
        if let Err(e) = &index {
            warn!("Article saved but index update failed: {e:#}");
        }

        Ok(SaveReport { path, index })
    }

    /// Put `filename` at the front of the index unless already listed
    ///
    /// Starts a new index if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The existing index cannot be read or parsed
    /// - The index cannot be written
    #[inline]
    pub fn update_index(&self, filename: &str) -> Result<IndexUpdate> {
        let mut index = self.load_index()?.unwrap_or_default();

        let update = if index.insert_front(filename) {
            debug!("Adding {filename} to the index");
            IndexUpdate::Inserted
        } else {
            debug!("{filename} already in the index");
            IndexUpdate::AlreadyPresent
        };

        let path = self.config.index_file();
        ensure_directory(self.system, self.config.news_dir())?;
        write_json(self.system, &path, &index)
            .map_err(|e| NewsError::storage(format!("{e:#}")))?;

        Ok(update)
    }

    /// Remove an article file, then drop it from the index
    ///
    /// A file that is already gone is not an error; the index is still
    /// cleaned. A name the index doesn't list leaves the index untouched.
    /// Nothing is rolled back if the second step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The article file exists but cannot be removed
    /// - The index cannot be read, parsed or written
    #[inline]
    pub fn delete_article(&self, filename: &str) -> Result<DeleteReport> {
        let path = self.config.article_path(filename);
        let file_removed = match self.system.remove_file(&path) {
            Ok(()) => {
                info!("Removed article {}", path.display());
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Article file already missing: {}", path.display());
                false
            }
            Err(e) => {
                return Err(NewsError::storage(format!(
                    "Failed to remove {}: {e}",
                    path.display()
                ))
                .into());
            }
        };

        let index_updated = match self.load_index()? {
            Some(mut index) => {
                let changed = index.remove(filename);
                if changed {
                    write_json(self.system, &self.config.index_file(), &index)
                        .map_err(|e| NewsError::storage(format!("{e:#}")))?;
                }
                changed
            }
            None => false,
        };

        Ok(DeleteReport {
            file_removed,
            index_updated,
        })
    }
}
