//! Template parsing.
//! Turns raw template text into a [`ParsedDocument`]: an ordered list of
//! default and optional [`Block`]s, each wrapping parsed [`Content`].

use crate::extractor::{extract_repeats, RepeatSection};
use crate::scanner::scan_variables;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

/// Opening tag prefix of an optional directive.
const OPTIONAL_OPEN: &str = "{{optional:";

static OPTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{optional:([^}]+)\}\}(?s:(.*?))\{\{/optional\}\}")
        .expect("optional pattern is valid")
});

/// Parsed form of a template span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    /// Distinct top-level variables, outside any repeat section
    pub variables: Vec<String>,
    /// Repeat sections in document order
    pub sections: Vec<RepeatSection>,
    /// The span with every repeat directive replaced by its section token
    pub literal: String,
}

/// A top-level unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Always rendered
    Default(Content),
    /// Rendered only when included and holding observable content
    Optional { label: String, content: Content },
}

impl Block {
    pub fn content(&self) -> &Content {
        match self {
            Block::Default(content) => content,
            Block::Optional { content, .. } => content,
        }
    }

    /// Label of an optional block, `None` for default blocks.
    pub fn label(&self) -> Option<&str> {
        match self {
            Block::Default(_) => None,
            Block::Optional { label, .. } => Some(label),
        }
    }
}

/// Ordered sequence of blocks making up one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub blocks: Vec<Block>,
}

impl ParsedDocument {
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParsedDocument {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Parses a template span into [`Content`].
///
/// Repeat sections are extracted first, so variables that only occur inside
/// a section are not reported as top-level variables.
pub fn parse_content(text: &str) -> Content {
    let (sections, literal) = extract_repeats(text);
    let variables = scan_variables(&literal);
    Content { variables, sections, literal }
}

/// Splits a whole template on optional directives.
///
/// # Arguments
/// * `source` - Template text
///
/// # Returns
/// * `ParsedDocument` - Blocks in source order
///
/// # Notes
/// - Spans between optional directives that are blank after trimming
///   produce no block
/// - An optional opener without a closer is kept as literal text of the
///   surrounding default block
pub fn split_blocks(source: &str) -> ParsedDocument {
    let mut blocks = Vec::new();
    let mut last_index = 0;

    for captures in OPTIONAL_RE.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        push_default(&mut blocks, &source[last_index..whole.start()]);

        let label = captures[1].to_string();
        debug!("Found optional block '{label}'.");
        blocks.push(Block::Optional { label, content: parse_content(&captures[2]) });

        last_index = whole.end();
    }

    let remainder = &source[last_index..];
    if remainder.contains(OPTIONAL_OPEN) {
        warn!("Unterminated optional directive left as literal text.");
    }
    push_default(&mut blocks, remainder);

    debug!("Parsed template into {} block(s).", blocks.len());
    ParsedDocument { blocks }
}

fn push_default(blocks: &mut Vec<Block>, span: &str) {
    if !span.trim().is_empty() {
        blocks.push(Block::Default(parse_content(span)));
    }
}
