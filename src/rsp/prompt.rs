//! Interactive collection of response-file options
//!
//! Prompting sits behind [`Prompter`] so the collection step can run against
//! a terminal, a pipe, or a scripted source in tests.

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::io::{BufRead, Write};

use super::RspOptions;
use crate::error::{BundleError, Result};

pub trait Prompter {
    /// Ask for free text. An empty answer is allowed.
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Collect every option in a fixed order.
pub fn collect_options(prompter: &mut dyn Prompter) -> Result<RspOptions> {
    let output = prompter.text("Enter output file path")?;
    let language = prompter.text("Enter programming languages (or 'all')")?;
    let note = prompter.confirm("Include source code paths as comments")?;
    let sort = prompter.text("Sort by 'name' or 'type' (optional)")?;
    let remove_empty_lines = prompter.confirm("Remove empty lines")?;
    let author = prompter.text("Enter the name of the file creator (optional)")?;

    Ok(RspOptions {
        output: output.trim().to_string(),
        language: language.trim().to_string(),
        note,
        sort: sort.trim().to_string(),
        remove_empty_lines,
        author: author.trim().to_string(),
    })
}

/// Prompts rendered with dialoguer on an interactive terminal.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| BundleError::Prompt(e.to_string()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| BundleError::Prompt(e.to_string()))
    }
}

/// Plain line-based prompts for piped input.
///
/// A yes/no answer counts as yes only when it reads `true` (any case).
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}: ")
            .and_then(|_| self.output.flush())
            .map_err(|e| BundleError::Prompt(e.to_string()))?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(|e| BundleError::Prompt(e.to_string()))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn text(&mut self, prompt: &str) -> Result<String> {
        self.read_answer(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.read_answer(&format!("{prompt} (true/false)"))?;
        Ok(answer.trim().eq_ignore_ascii_case("true"))
    }
}
