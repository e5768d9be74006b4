//! Line-oriented terminal prompts

use crate::error::NewsError;
use crate::model::Choice;
use crate::prompt::resolve::resolve;
use anyhow::{Context as _, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use tracing::debug;

const RULE_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;

/// Asks questions on `output` and reads one answer per line from `input`
///
/// Any `BufRead`/`Write` pair works, so tests drive it with a `Cursor` of
/// scripted answers and a `Vec<u8>` transcript. End of input surfaces as
/// [`NewsError::InputClosed`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter that never clears the screen
    #[must_use]
    #[inline]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enable or disable clearing the screen between views (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_screen_clearing(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Everything written so far
    #[must_use]
    #[inline]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consume the prompter, returning the output writer
    #[must_use]
    #[inline]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a free-text value
    ///
    /// Returns `default` on a blank answer, or `None` if there is no default.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    #[inline]
    pub fn ask(&mut self, label: &str, default: Option<&str>) -> Result<Option<String>> {
        self.ask_within(label, default, None)
    }

    /// Ask for a value from a fixed option set
    ///
    /// An answer outside `options` is replaced by `default` after a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    #[inline]
    pub fn ask_option(
        &mut self,
        label: &str,
        default: Option<&str>,
        options: &[&str],
    ) -> Result<Option<String>> {
        self.ask_within(label, default, Some(options))
    }

    /// Ask for one of a [`Choice`] type's options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    #[inline]
    pub fn ask_choice<T: Choice>(&mut self, label: &str, default: T) -> Result<T> {
        let names = T::names();
        let answer = self.ask_option(label, Some(default.as_str()), &names)?;
        Ok(answer
            .as_deref()
            .and_then(T::from_name)
            .unwrap_or(default))
    }

    /// Ask a yes/no question; only `s`/`S` counts as yes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    #[inline]
    pub fn confirm(&mut self, label: &str, default_yes: bool) -> Result<bool> {
        let (hint, default) = if default_yes { ("(S/n)", "s") } else { ("(s/N)", "n") };
        let answer = self.ask(&format!("{label} {hint}"), Some(default))?;
        Ok(answer.is_some_and(|value| value.eq_ignore_ascii_case("s")))
    }

    /// Write one line
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output cannot be written to
    #[inline]
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to terminal")
    }

    /// Write a boxed title
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output cannot be written to
    #[inline]
    pub fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        self.say(&format!("\n{rule}\n  {title}\n{rule}\n"))
    }

    /// Write a section title with an underline
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output cannot be written to
    #[inline]
    pub fn section(&mut self, title: &str) -> Result<()> {
        self.say(&format!("\n{title}"))?;
        self.say(&"-".repeat(SECTION_WIDTH))
    }

    /// Write a horizontal rule as wide as a header
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output cannot be written to
    #[inline]
    pub fn rule(&mut self) -> Result<()> {
        self.say(&"-".repeat(RULE_WIDTH))
    }

    /// Clear the screen, if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal rejects the clear command
    #[inline]
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear the terminal")?;
        }
        Ok(())
    }

    /// Show `message` and wait for ENTER
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The terminal cannot be read from or written to
    /// - Input is closed
    #[inline]
    pub fn pause(&mut self, message: &str) -> Result<()> {
        self.write_prompt(&format!("\n{message}"))?;
        self.read_line().map(drop)
    }

    fn ask_within(
        &mut self,
        label: &str,
        default: Option<&str>,
        options: Option<&[&str]>,
    ) -> Result<Option<String>> {
        let default = default.filter(|value| !value.is_empty());

        if let Some(options) = options {
            self.say(&format!("\nOpções disponíveis: {}", options.join(", ")))?;
        }

        let prompt = match default {
            Some(value) => format!("{label} [{value}]: "),
            None => format!("{label}: "),
        };
        self.write_prompt(&prompt)?;

        let raw = self.read_line()?;
        let resolution = resolve(&raw, default, options);
        if resolution.rejected.is_some() {
            self.say(&format!(
                "⚠️  Opção inválida! Usando padrão: {}",
                default.unwrap_or_default()
            ))?;
        }
        Ok(resolution.value)
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}").context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal output")
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| NewsError::input(format!("Failed to read from terminal: {e}")))?;
        if read == 0 {
            debug!("Input closed");
            return Err(NewsError::InputClosed.into());
        }
        Ok(line)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::model::{ColorScheme, Icon};
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_ask_renders_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Data", Some("2025-01")).unwrap().as_deref(), Some("2025-01"));
        assert_eq!(transcript(p), "Data [2025-01]: ");
    }

    #[test]
    fn test_ask_without_default() {
        let mut p = prompter("  \n");
        assert_eq!(p.ask("Título", None).unwrap(), None);
        assert_eq!(transcript(p), "Título: ");
    }

    #[test]
    fn test_ask_choice_warns_and_falls_back() {
        let mut p = prompter("not-an-icon\n");
        assert_eq!(p.ask_choice("Ícone", Icon::Award).unwrap(), Icon::Award);
        let out = transcript(p);
        assert!(out.contains("Opções disponíveis: book-open, graduation-cap"));
        assert!(out.contains("⚠️  Opção inválida! Usando padrão: award"));
    }

    #[test]
    fn test_ask_choice_accepts_member() {
        let mut p = prompter("purple\n");
        assert_eq!(
            p.ask_choice("Esquema de cores", ColorScheme::Blue).unwrap(),
            ColorScheme::Purple
        );
    }

    #[test]
    fn test_confirm_defaults() {
        let mut p = prompter("\n\nS\nno\n");
        assert!(p.confirm("Confirmar?", true).unwrap());
        assert!(!p.confirm("Remover?", false).unwrap());
        assert!(p.confirm("Remover?", false).unwrap());
        assert!(!p.confirm("Confirmar?", true).unwrap());
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut p = prompter("");
        let err = p.ask("ID", None).unwrap_err();
        assert!(
            err.downcast_ref::<NewsError>()
                .is_some_and(NewsError::is_input_closed)
        );
    }

    #[test]
    fn test_clear_is_noop_when_disabled() {
        let mut p = prompter("");
        p.clear().unwrap();
        assert!(p.output().is_empty());
    }
}
