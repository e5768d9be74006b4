//! Tag collection

use super::ArticleEditor;
use crate::model::{Icon, Tag, TagColor};
use anyhow::Result;
use serde_json::Map;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> ArticleEditor<'_, R, W> {
    /// Ask for tags until a blank label
    ///
    /// Never returns an empty list: with no tags entered, the fallback tag is
    /// added.
    pub(crate) fn collect_tags(&mut self) -> Result<Vec<Tag>> {
        self.prompter.section("🏷️  Tags da Notícia")?;
        self.prompter
            .say("Digite as tags uma por vez. Deixe em branco para finalizar.")?;

        let mut tags = Vec::new();
        loop {
            self.prompter.say(&format!("\n📌 Tag #{}", tags.len() + 1))?;
            let Some(label) = self
                .prompter
                .ask("  Label da tag (deixe vazio para finalizar)", None)?
            else {
                break;
            };

            let icon = self.prompter.ask_choice("  Ícone da tag", Icon::Award)?;
            let color = self.prompter.ask_choice("  Cor da tag", TagColor::Green)?;
            self.prompter
                .say(&format!("  ✅ Tag '{label}' adicionada!"))?;
            tags.push(Tag {
                label,
                icon,
                color,
                extra: Map::new(),
            });
        }

        if tags.is_empty() {
            self.prompter
                .say("\n⚠️  Nenhuma tag adicionada. Adicionando tag padrão...")?;
            tags.push(Tag::fallback());
        }

        Ok(tags)
    }
}
