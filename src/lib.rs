//! notefill is a template directive engine for reusable note templates.
//! Templates contain `[variable]` placeholders, `{{repeat:..}}` sections and
//! `{{optional:..}}` blocks; they are parsed into a structured document and
//! rendered against user supplied answers into a single output string.

/// Answer storage and loading (JSON file or stdin)
pub mod answers;

/// Command-line interface module for the notefill application
pub mod cli;

/// Template catalog: built-in templates and JSON/YAML catalog files
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the notefill application
pub mod error;

/// Repeat section extraction
pub mod extractor;

/// Logger initialization
pub mod logger;

/// Block splitting and content parsing
pub mod parser;

/// Render cycle orchestration
pub mod processor;

/// Interactive answer collection
pub mod prompt;

/// Variable substitution, repeat expansion and document assembly
pub mod renderer;

/// `[variable]` placeholder scanning
pub mod scanner;

pub use answers::Answers;
pub use parser::{split_blocks, Block, Content, ParsedDocument};
pub use renderer::{assemble, render_block, ValueProvider};
