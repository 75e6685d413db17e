//! Render cycle orchestration.
//! Parses a catalog entry, renders it against a value provider and carries
//! the entry's metadata through to the output.

use crate::config::TemplateEntry;
use crate::parser::split_blocks;
use crate::renderer::{assemble, ValueProvider};
use log::debug;

/// Result of filling one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Subject prefix of the template, untouched
    pub subject_prefix: Option<String>,
    /// Assembled output text
    pub body: String,
}

/// Fills `entry` with `values`.
pub fn generate(entry: &TemplateEntry, values: &dyn ValueProvider) -> Generated {
    let document = split_blocks(&entry.source);
    debug!("Rendering '{}' ({} block(s)).", entry.name, document.len());

    Generated { subject_prefix: entry.subject_prefix.clone(), body: assemble(&document, values) }
}
