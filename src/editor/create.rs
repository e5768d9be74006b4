//! New article flow

use super::{ArticleEditor, Draft};
use super::date::month_key;
use crate::model::{Article, ColorScheme, Icon, filename_for};
use anyhow::Result;
use serde_json::Map;
use std::io::{BufRead, Write};
use tracing::debug;

impl<R: BufRead, W: Write> ArticleEditor<'_, R, W> {
    /// Build a new article from prompts
    ///
    /// Returns `None` without touching storage when the id, title,
    /// description or link is left blank, when the user declines to
    /// overwrite an existing file, or when the preview is not confirmed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    /// - Checking for an existing article file fails
    #[inline]
    pub fn create(&mut self) -> Result<Option<Draft>> {
        self.prompter.clear()?;
        self.prompter.header("📰 Criar Nova Notícia")?;

        self.prompter.section("📝 Identificação")?;
        let Some(id) = self
            .prompter
            .ask("ID da notícia (ex: 2025-01-workshop)", None)?
        else {
            self.prompter.say("❌ ID é obrigatório!")?;
            return Ok(None);
        };

        let filename = filename_for(&id);
        if self.store.article_exists(&filename)? {
            debug!("{filename} already exists");
            let overwrite = self.prompter.confirm(
                &format!("⚠️  Arquivo {filename} já existe. Sobrescrever?"),
                false,
            )?;
            if !overwrite {
                self.cancelled()?;
                return Ok(None);
            }
        }

        let today = month_key(self.today);
        let (date, date_display) = self.ask_date(&today)?;

        self.prompter.section("📋 Informações Principais")?;
        let title = self.prompter.ask("Título da notícia", None)?;
        let description = self.prompter.ask("Descrição completa", None)?;
        let link = self.prompter.ask("Link externo", None)?;
        let (Some(title), Some(description), Some(link)) = (title, description, link) else {
            self.prompter
                .say("❌ Título, descrição e link são obrigatórios!")?;
            return Ok(None);
        };

        self.prompter.section("🎨 Aparência")?;
        let icon = self.prompter.ask_choice("Ícone principal", Icon::BookOpen)?;
        let color_scheme = self
            .prompter
            .ask_choice("Esquema de cores", ColorScheme::Blue)?;

        let tags = self.collect_tags()?;

        let article = Article {
            id,
            date,
            date_display,
            title,
            description,
            link,
            icon,
            color_scheme,
            tags,
            extra: Map::new(),
        };

        if !self.review("📋 Resumo da Notícia", &article, "\n✅ Confirmar criação?")? {
            return Ok(None);
        }

        Ok(Some(Draft { filename, article }))
    }
}
