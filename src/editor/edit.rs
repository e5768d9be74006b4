//! Existing article flow

use super::date::month_key;
use super::{ArticleEditor, Draft};
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> ArticleEditor<'_, R, W> {
    /// Pick an article from the index and edit it field by field
    ///
    /// Every prompt defaults to the current value, so a blank answer keeps
    /// it. The display date is re-suggested from the entered date. Tags are
    /// only replaced if the user asks to. The file name never changes, even
    /// if the id does.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    /// - The index or the chosen article cannot be loaded
    #[inline]
    pub fn edit(&mut self) -> Result<Option<Draft>> {
        self.prompter.clear()?;
        self.prompter.header("✏️  Editar Notícia")?;

        let Some(filename) =
            self.select_article("\nNúmero da notícia para editar (0 para cancelar)")?
        else {
            return Ok(None);
        };

        let mut article = self.store.load_article(&filename)?;

        self.prompter.clear()?;
        self.prompter.header(&format!("✏️  Editando: {filename}"))?;
        self.prompter
            .say("💡 Pressione ENTER para manter o valor atual\n")?;

        article.id = self.ask_keeping("ID", &article.id)?;

        let current_date = if article.date.is_empty() {
            month_key(self.today)
        } else {
            article.date.clone()
        };
        let (date, date_display) = self.ask_date(&current_date)?;
        article.date = date;
        article.date_display = date_display;

        article.title = self.ask_keeping("Título", &article.title)?;
        article.description = self.ask_keeping("Descrição", &article.description)?;
        article.link = self.ask_keeping("Link", &article.link)?;
        article.icon = self.prompter.ask_choice("Ícone", article.icon)?;
        article.color_scheme = self
            .prompter
            .ask_choice("Esquema de cores", article.color_scheme)?;

        if self.prompter.confirm("\nEditar tags?", false)? {
            article.tags = self.collect_tags()?;
        }
        article.ensure_tag();

        if !self.review("📋 Notícia Atualizada", &article, "\n✅ Confirmar alterações?")? {
            return Ok(None);
        }

        Ok(Some(Draft { filename, article }))
    }
}
