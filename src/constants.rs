//! Common constants used throughout notefill.

/// Indexed-value namespace shared by every repeat section of a document.
pub const REPEAT_NAMESPACE: &str = "repeat";

/// Marker substituted for every line break inside a value.
pub const LINE_BREAK_MARKER: &str = "<br>";
