//! Console input for describing the entity.

use std::io::{BufRead, Write};

use crudgen_codegen::{EntityRequest, EntityRequestBuilder};
use dialoguer::{Input, console::Term, theme::ColorfulTheme};
use eyre::{Context, Result};

const PROJECT_PROMPT: &str = "Enter the project name";
const ENTITY_PROMPT: &str = "Enter the entity name";
const FIELD_NAME_PROMPT: &str = "Enter field name (or press enter to finish)";
const FIELD_TYPE_PROMPT: &str = "Enter field type";

/// Source of answers to free-text prompts.
pub trait Prompter {
    /// Show `prompt` and return the answer. Empty answers are allowed.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Interactive prompts for a real terminal, drawn on stdout.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .wrap_err("Failed to read input")
    }
}

/// Line-oriented prompts over any reader/writer pair (piped stdin, tests).
///
/// End of input reads as an empty answer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt).wrap_err("Failed to write prompt")?;
        self.writer.flush().wrap_err("Failed to write prompt")?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .wrap_err("Failed to read input")?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Ask for the project, the entity and its fields.
///
/// Fields are read until an empty field name. Nothing is trimmed or
/// validated.
pub fn collect_request(prompter: &mut impl Prompter) -> Result<EntityRequest> {
    let project = prompter.ask(PROJECT_PROMPT)?;
    let entity = prompter.ask(ENTITY_PROMPT)?;

    let mut builder = EntityRequestBuilder::new(project, entity);
    loop {
        let name = prompter.ask(FIELD_NAME_PROMPT)?;
        if name.is_empty() {
            break;
        }
        let ty = prompter.ask(FIELD_TYPE_PROMPT)?;
        builder.push_field(name, ty);
    }

    Ok(builder.build())
}
