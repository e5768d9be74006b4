//! Listing, picking and confirming removal of indexed articles

use super::ArticleEditor;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> ArticleEditor<'_, R, W> {
    /// Show every indexed article under a title
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be written to
    /// - The index cannot be read or parsed
    #[inline]
    pub fn list(&mut self) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.header("📚 Todas as Notícias")?;
        self.show_listing().map(drop)
    }

    /// Pick an article and confirm its removal
    ///
    /// Returns the file name to delete, or `None` if the user cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    /// - The index cannot be read or parsed
    #[inline]
    pub fn choose_removal(&mut self) -> Result<Option<String>> {
        self.prompter.clear()?;
        self.prompter.header("🗑️  Remover Notícia")?;

        let Some(filename) =
            self.select_article("\nNúmero da notícia para remover (0 para cancelar)")?
        else {
            return Ok(None);
        };

        if !self
            .prompter
            .confirm(&format!("\n⚠️  Confirmar remoção de '{filename}'?"), false)?
        {
            self.cancelled()?;
            return Ok(None);
        }

        Ok(Some(filename))
    }

    /// Print the numbered listing and return the file names in order
    pub(crate) fn show_listing(&mut self) -> Result<Vec<String>> {
        let listing = self.store.list_articles()?;

        if !listing.index_found {
            self.prompter.say("📭 Arquivo de índice não encontrado.")?;
            return Ok(Vec::new());
        }
        if listing.is_empty() {
            self.prompter.say("📭 Nenhuma notícia encontrada.")?;
            return Ok(Vec::new());
        }

        self.prompter.say("\n📚 Notícias Disponíveis:")?;
        self.prompter.rule()?;

        for (number, entry) in listing.entries.iter().enumerate() {
            let number = number + 1;
            match &entry.summary {
                Ok(summary) => {
                    self.prompter.say(&format!("{number}. {}", entry.filename))?;
                    self.prompter.say(&format!(
                        "   📰 {}",
                        summary.title.as_deref().unwrap_or("Sem título")
                    ))?;
                    self.prompter.say(&format!(
                        "   📅 {}",
                        summary.date_display.as_deref().unwrap_or("Sem data")
                    ))?;
                }
                Err(_) => {
                    self.prompter
                        .say(&format!("{number}. {} (erro ao ler)", entry.filename))?;
                }
            }
            self.prompter.say("")?;
        }

        Ok(listing.filenames())
    }

    /// List the articles and ask for a 1-based number
    ///
    /// `0`, a number past the end, or anything that isn't a number cancels.
    pub(super) fn select_article(&mut self, label: &str) -> Result<Option<String>> {
        let mut filenames = self.show_listing()?;
        if filenames.is_empty() {
            return Ok(None);
        }

        let answer = self.prompter.ask(label, Some("0"))?.unwrap_or_default();
        let Ok(choice) = answer.parse::<usize>() else {
            self.prompter.say("❌ Opção inválida!")?;
            return Ok(None);
        };

        if choice == 0 || choice > filenames.len() {
            self.cancelled()?;
            return Ok(None);
        }

        Ok(Some(filenames.swap_remove(choice - 1)))
    }
}
