//! Interactive answer collection.
//! Walks a parsed document and asks for every inclusion flag, variable and
//! repeat item it needs.

use crate::answers::Answers;
use crate::constants::REPEAT_NAMESPACE;
use crate::error::{Error, Result};
use crate::extractor::RepeatSection;
use crate::parser::ParsedDocument;
use dialoguer::{Confirm, Editor, Input};
use log::debug;

/// Source of interactive answers.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, prompt: String, default: bool) -> Result<bool>;

    /// Asks for a free-form text value. An empty answer is allowed.
    fn text(&self, prompt: String) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
///
/// Single-line input by default; with `multiline` every value is typed in
/// the user's editor so it may span several lines.
pub struct DialoguerPrompter {
    multiline: bool,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { multiline: false }
    }

    pub fn multiline() -> Self {
        Self { multiline: true }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: String, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn text(&self, prompt: String) -> Result<String> {
        if self.multiline {
            eprintln!("{prompt} (opening editor)");
            let edited = Editor::new()
                .edit("")
                .map_err(|e| Error::PromptError(e.to_string()))?;
            let value = edited.as_deref().map(strip_trailing_line_break).unwrap_or_default();
            return Ok(value.to_string());
        }
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Drops the single line break editors append when saving.
pub fn strip_trailing_line_break(value: &str) -> &str {
    value
        .strip_suffix("\r\n")
        .or_else(|| value.strip_suffix('\n'))
        .unwrap_or(value)
}

fn collect_section_items(
    section: &RepeatSection,
    prompter: &dyn Prompter,
    answers: &mut Answers,
) -> Result<()> {
    // Items are keyed by presence of the first variable.
    let Some(first) = section.first_variable() else {
        return Ok(());
    };

    while prompter.confirm(format!("Add item to {} (repeating)?", section.label), false)? {
        let index = answers.next_free_index(REPEAT_NAMESPACE, first);
        for name in &section.variables {
            let value = prompter.text(format!("{} #{}: {}", section.label, index + 1, name))?;
            // Sections sharing a variable share its slot; the first answer wins.
            if !answers.set_indexed_if_absent(REPEAT_NAMESPACE, index, name.as_str(), value) {
                debug!("'{name}' #{index} already answered, keeping the first value.");
            }
        }
        debug!("Collected item {} for section '{}'.", index, section.label);
    }
    Ok(())
}

/// Collects answers for every block of `document`.
///
/// # Arguments
/// * `document` - Parsed template
/// * `prompter` - Interactive input source
///
/// # Returns
/// * `Result<Answers>` - Collected values
///
/// # Notes
/// - Declined optional blocks ask nothing further
/// - A variable shared by several blocks is asked once
/// - Repeat items go to the shared repeat namespace, after any items
///   already present for the section's first variable
pub fn collect_answers(document: &ParsedDocument, prompter: &dyn Prompter) -> Result<Answers> {
    let mut answers = Answers::new();

    for block in document {
        if let Some(label) = block.label() {
            let included = prompter.confirm(format!("Include optional section: {label}?"), true)?;
            answers.set_included(label, included);
            if !included {
                continue;
            }
        }

        let content = block.content();
        for name in &content.variables {
            if answers.has_value(name) {
                continue;
            }
            let value = prompter.text(name.clone())?;
            answers.set_value(name.as_str(), value);
        }

        for section in &content.sections {
            collect_section_items(section, prompter, &mut answers)?;
        }
    }

    Ok(answers)
}
