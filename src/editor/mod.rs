//! Interactive article editor
//!
//! Builds article records from prompts: the create and edit flows, the tag
//! collector, the article picker used by edit and delete, and the preview
//! shown before anything is accepted. Nothing here writes to storage; the
//! menu saves or deletes what the editor returns.

pub mod date;

mod create;
mod edit;
mod select;
mod tags;

use crate::model::{Article, to_pretty_json};
use crate::prompt::Prompter;
use crate::storage::NewsStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

/// An accepted article and the file it goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub filename: String,
    pub article: Article,
}

/// Runs one editing flow against a prompter and a store
pub struct ArticleEditor<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    store: &'a NewsStore<'a>,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> ArticleEditor<'a, R, W> {
    /// Create an editor using the local date as "today"
    #[must_use]
    #[inline]
    pub fn new(prompter: &'a mut Prompter<R, W>, store: &'a NewsStore<'a>) -> Self {
        Self {
            prompter,
            store,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date as "today" (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Ask for the `YYYY-MM` date, then for its display string
    fn ask_date(&mut self, default_date: &str) -> Result<(String, String)> {
        self.prompter.section("📅 Informações de Data")?;

        let date = self
            .prompter
            .ask("Data (formato YYYY-MM)", Some(default_date))?
            .unwrap_or_else(|| default_date.to_owned());
        let suggested = date::suggest_display(&date, self.today);
        let display = self
            .prompter
            .ask("Data para exibição", Some(suggested.as_str()))?
            .unwrap_or(suggested);

        Ok((date, display))
    }

    /// Ask for a value, keeping `current` on a blank answer
    fn ask_keeping(&mut self, label: &str, current: &str) -> Result<String> {
        Ok(self
            .prompter
            .ask(label, Some(current))?
            .unwrap_or_else(|| current.to_owned()))
    }

    /// Show the article as it will be stored and ask for confirmation
    fn review(&mut self, title: &str, article: &Article, question: &str) -> Result<bool> {
        self.prompter.clear()?;
        self.prompter.header(title)?;
        self.prompter.say(&to_pretty_json(article)?)?;

        let accepted = self.prompter.confirm(question, true)?;
        if !accepted {
            self.cancelled()?;
        }
        Ok(accepted)
    }

    fn cancelled(&mut self) -> Result<()> {
        self.prompter.say("❌ Operação cancelada!")
    }
}
