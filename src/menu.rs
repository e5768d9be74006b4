//! Top-level menu loop

use crate::editor::{ArticleEditor, Draft};
use crate::error::is_input_closed;
use crate::prompt::Prompter;
use crate::storage::{IndexUpdate, NewsStore};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{debug, error};

const CONTINUE_AFTER_SAVE: &str = "✅ Pressione ENTER para continuar...";
const CONTINUE: &str = "📌 Pressione ENTER para continuar...";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    Edit,
    List,
    Delete,
    Exit,
}

impl MenuAction {
    /// Every action, in menu order
    pub const ALL: [Self; 5] = [Self::Create, Self::Edit, Self::List, Self::Delete, Self::Exit];

    /// Map a menu answer (`1`..`5`) to an action
    #[must_use]
    #[inline]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::Edit),
            "3" => Some(Self::List),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Menu line for this action
    #[must_use]
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "1. 📝 Criar nova notícia",
            Self::Edit => "2. ✏️  Editar notícia existente",
            Self::List => "3. 📚 Listar todas as notícias",
            Self::Delete => "4. 🗑️  Remover notícia",
            Self::Exit => "5. 🚪 Sair",
        }
    }
}

/// Run the menu until the user exits or input ends
///
/// Failures inside an action are printed and the menu is shown again.
///
/// # Errors
///
/// Returns an error if:
/// - The terminal cannot be read from or written to
pub fn run_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &NewsStore<'_>,
    today: NaiveDate,
) -> Result<()> {
    match menu_loop(prompter, store, today) {
        Err(err) if is_input_closed(&err) => {
            debug!("Input closed, leaving the menu");
            Ok(())
        }
        other => other,
    }
}

fn menu_loop<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &NewsStore<'_>,
    today: NaiveDate,
) -> Result<()> {
    loop {
        prompter.clear()?;
        prompter.header("🚀 Gerenciador de Notícias")?;
        for action in MenuAction::ALL {
            prompter.say(action.label())?;
        }

        let choice = prompter
            .ask("\nEscolha uma opção", Some("1"))?
            .unwrap_or_default();

        let Some(action) = MenuAction::from_choice(&choice) else {
            prompter.say("❌ Opção inválida!")?;
            prompter.pause(CONTINUE)?;
            continue;
        };
        debug!("Menu action: {action:?}");

        if action == MenuAction::Exit {
            prompter.clear()?;
            prompter.say("\n👋 Até logo!\n")?;
            return Ok(());
        }

        let saved = match perform(prompter, store, today, action) {
            Ok(saved) => saved,
            Err(err) if is_input_closed(&err) => return Err(err),
            Err(err) => {
                error!("{action:?} failed: {err:#}");
                prompter.say(&format!("\n❌ Erro: {err:#}"))?;
                false
            }
        };

        prompter.pause(if saved { CONTINUE_AFTER_SAVE } else { CONTINUE })?;
    }
}

/// Run one action; returns whether an article was saved
fn perform<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &NewsStore<'_>,
    today: NaiveDate,
    action: MenuAction,
) -> Result<bool> {
    match action {
        MenuAction::Create => {
            let draft = ArticleEditor::new(prompter, store).with_today(today).create()?;
            persist(prompter, store, draft)
        }
        MenuAction::Edit => {
            let draft = ArticleEditor::new(prompter, store).with_today(today).edit()?;
            persist(prompter, store, draft)
        }
        MenuAction::List => {
            ArticleEditor::new(prompter, store).with_today(today).list()?;
            Ok(false)
        }
        MenuAction::Delete => {
            let chosen = ArticleEditor::new(prompter, store)
                .with_today(today)
                .choose_removal()?;
            if let Some(filename) = chosen {
                remove(prompter, store, &filename)?;
            }
            Ok(false)
        }
        MenuAction::Exit => Ok(false),
    }
}

fn persist<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &NewsStore<'_>,
    draft: Option<Draft>,
) -> Result<bool> {
    let Some(draft) = draft else {
        return Ok(false);
    };

    let report = match store.save_article(&draft.filename, &draft.article) {
        Ok(report) => report,
        Err(err) => {
            error!("Saving {} failed: {err:#}", draft.filename);
            prompter.say(&format!("\n❌ Erro ao salvar: {err:#}"))?;
            return Ok(false);
        }
    };

    prompter.say(&format!("\n✅ Notícia salva em: {}", report.path.display()))?;
    match report.index {
        Ok(update) => {
            if update == IndexUpdate::Inserted {
                prompter.say("✅ Notícia adicionada ao índice")?;
            } else {
                prompter.say("ℹ️  Notícia já existe no índice")?;
            }
            prompter.say(&format!(
                "✅ Índice atualizado em: {}",
                store.config().index_file().display()
            ))?;
        }
        Err(err) => prompter.say(&format!("⚠️  Erro ao atualizar índice: {err:#}"))?,
    }

    Ok(true)
}

fn remove<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &NewsStore<'_>,
    filename: &str,
) -> Result<()> {
    let path = store.config().article_path(filename);
    let report = match store.delete_article(filename) {
        Ok(report) => report,
        Err(err) => {
            error!("Removing {filename} failed: {err:#}");
            return prompter.say(&format!("❌ Erro ao remover: {err:#}"));
        }
    };

    if report.file_removed {
        prompter.say(&format!("✅ Arquivo removido: {}", path.display()))?;
    } else {
        prompter.say(&format!("⚠️  Arquivo não encontrado: {}", path.display()))?;
    }
    if report.index_updated {
        prompter.say("✅ Removido do índice")
    } else {
        prompter.say("ℹ️  Notícia não constava no índice")
    }
}
