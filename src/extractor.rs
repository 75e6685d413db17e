//! Repeat section extraction.
//! Finds `{{repeat:<label>}}...{{/repeat}}` directives, records them as
//! [`RepeatSection`]s and leaves a `{{section:<label>}}` token in their place.

use crate::scanner::scan_variables;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

/// Opening tag prefix of a repeat directive.
const REPEAT_OPEN: &str = "{{repeat:";
/// Closing tag of a repeat directive.
const REPEAT_CLOSE: &str = "{{/repeat}}";

/// The leftmost opener pairs with the nearest closer after it, so repeat
/// directives never nest.
static REPEAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{repeat:([^}]+)\}\}(?s:(.*?))\{\{/repeat\}\}")
        .expect("repeat pattern is valid")
});

/// A repeating section parsed out of template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatSection {
    /// Label given in the opening tag
    pub label: String,
    /// Template text repeated once per item
    pub raw_content: String,
    /// Distinct variables of `raw_content`, in first-occurrence order
    pub variables: Vec<String>,
}

impl RepeatSection {
    /// Token that stands in for this section in the rewritten literal.
    pub fn token(&self) -> String {
        section_token(&self.label)
    }

    /// Variable whose presence decides whether an item exists.
    pub fn first_variable(&self) -> Option<&str> {
        self.variables.first().map(String::as_str)
    }
}

/// Builds the `{{section:<label>}}` placeholder token.
pub fn section_token(label: &str) -> String {
    format!("{{{{section:{label}}}}}")
}

/// Extracts every repeat directive from `text`.
///
/// # Arguments
/// * `text` - Template span to process
///
/// # Returns
/// * `(Vec<RepeatSection>, String)` - Sections in document order and the
///   text with each directive replaced by its section token
///
/// # Notes
/// - An opener without a matching closer stays in the output verbatim
/// - Each pass rescans the rewritten text from the start
pub fn extract_repeats(text: &str) -> (Vec<RepeatSection>, String) {
    let mut sections = Vec::new();
    let mut working = text.to_string();

    loop {
        let Some((range, section)) = REPEAT_RE.captures(&working).map(|captures| {
            let whole = captures.get(0).map(|m| m.range()).unwrap_or_default();
            let raw_content = captures[2].to_string();
            let section = RepeatSection {
                label: captures[1].to_string(),
                variables: scan_variables(&raw_content),
                raw_content,
            };
            (whole, section)
        }) else {
            break;
        };

        debug!(
            "Extracted repeat section '{}' with {} variable(s).",
            section.label,
            section.variables.len()
        );
        working.replace_range(range, &section.token());
        sections.push(section);
    }

    if working.contains(REPEAT_OPEN) {
        warn!("Unterminated repeat directive left as literal text.");
    }
    if working.contains(REPEAT_CLOSE) {
        warn!("Unpaired '{REPEAT_CLOSE}' left as literal text.");
    }

    (sections, working)
}
