//! Rendering of parsed documents.
//! Substitutes variables, expands repeat sections and applies the inclusion
//! policy of optional blocks, then assembles the final text.

use crate::constants::{LINE_BREAK_MARKER, REPEAT_NAMESPACE};
use crate::parser::{Block, Content, ParsedDocument};
use crate::scanner::placeholder;
use log::debug;

/// Source of the values a document is rendered with.
///
/// Absent values are never an error: the renderer treats them as empty.
pub trait ValueProvider {
    /// Value of a top-level variable.
    fn get(&self, name: &str) -> Option<&str>;

    /// Value of a variable for one item of an indexed namespace.
    fn get_indexed(&self, namespace: &str, index: usize, name: &str) -> Option<&str>;

    /// Whether an item of an indexed namespace carries the variable at all.
    fn has_indexed(&self, namespace: &str, index: usize, name: &str) -> bool {
        self.get_indexed(namespace, index, name).is_some()
    }

    /// Inclusion flag of an optional block.
    fn is_included(&self, label: &str) -> bool;
}

/// Converts `\r\n`, `\r` and `\n` to a single line-break marker each.
pub fn convert_line_breaks(value: &str) -> String {
    value
        .replace("\r\n", LINE_BREAK_MARKER)
        .replace(['\r', '\n'], LINE_BREAK_MARKER)
}

fn substitute(template: &mut String, name: &str, value: Option<&str>) {
    let value = convert_line_breaks(value.unwrap_or_default());
    *template = template.replace(&placeholder(name), &value);
}

/// Fills a [`Content`] with values.
///
/// # Arguments
/// * `content` - Parsed content to fill
/// * `values` - Value provider
/// * `namespace` - Indexed namespace repeat sections read from
///
/// # Notes
/// - Items are taken from index 0 upward while the section's first variable
///   is present; the first gap ends the expansion
/// - A section without variables expands to nothing
pub fn fill(content: &Content, values: &dyn ValueProvider, namespace: &str) -> String {
    let mut result = content.literal.clone();

    for name in &content.variables {
        substitute(&mut result, name, values.get(name));
    }

    for section in &content.sections {
        let mut expansion = String::new();
        if let Some(first) = section.first_variable() {
            let mut index = 0;
            while values.has_indexed(namespace, index, first) {
                let mut item = section.raw_content.clone();
                for name in &section.variables {
                    substitute(&mut item, name, values.get_indexed(namespace, index, name));
                }
                expansion.push_str(&item);
                index += 1;
            }
            debug!("Expanded section '{}' with {} item(s).", section.label, index);
        }
        result = result.replace(&section.token(), &expansion);
    }

    result
}

/// Whether an optional block has anything worth emitting.
///
/// True when a top-level variable has a non-blank value, or when the shared
/// repeat namespace holds an item 0 for the first variable of any section.
pub fn has_observable_content(content: &Content, values: &dyn ValueProvider) -> bool {
    let has_values = content
        .variables
        .iter()
        .any(|name| values.get(name).is_some_and(|value| !value.trim().is_empty()));

    let has_items = content.sections.iter().any(|section| {
        section
            .first_variable()
            .is_some_and(|first| values.has_indexed(REPEAT_NAMESPACE, 0, first))
    });

    has_values || has_items
}

/// Renders a single block.
pub fn render_block(block: &Block, values: &dyn ValueProvider) -> String {
    match block {
        Block::Default(content) => fill(content, values, REPEAT_NAMESPACE),
        Block::Optional { label, content } => {
            if !values.is_included(label) {
                debug!("Optional block '{label}' is excluded.");
                return String::new();
            }
            if !has_observable_content(content, values) {
                debug!("Optional block '{label}' has no content, skipping.");
                return String::new();
            }
            fill(content, values, REPEAT_NAMESPACE)
        }
    }
}

/// Concatenates the rendered blocks of a document, in order, without
/// separators.
pub fn assemble(document: &ParsedDocument, values: &dyn ValueProvider) -> String {
    document.iter().map(|block| render_block(block, values)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_line_breaks() {
        assert_eq!(convert_line_breaks("a\r\nb\rc\nd"), "a<br>b<br>c<br>d");
        assert_eq!(convert_line_breaks("\n\n"), "<br><br>");
        assert_eq!(convert_line_breaks("\r\n\r"), "<br><br>");
        assert_eq!(convert_line_breaks("plain"), "plain");
    }
}
