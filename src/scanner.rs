//! Variable scanning for `[name]` placeholders.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `[name]` where `name` is one or more characters other than `]`.
///
/// There is no escape syntax: a literal `[` or `]` in authored text is
/// indistinguishable from a placeholder delimiter.
static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]").expect("variable pattern is valid")
});

/// Returns the distinct variable names referenced in `text`, in order of
/// first occurrence.
///
/// # Arguments
/// * `text` - Literal template text to scan
///
/// # Returns
/// * `Vec<String>` - Distinct names, empty when nothing matches
pub fn scan_variables(text: &str) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for captures in VARIABLE_RE.captures_iter(text) {
        let name = &captures[1];
        if !variables.iter().any(|known| known == name) {
            variables.push(name.to_string());
        }
    }
    variables
}

/// Returns the placeholder form `[name]` of a variable.
pub fn placeholder(name: &str) -> String {
    format!("[{name}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_keeps_first_occurrence_order() {
        let vars = scan_variables("[b] then [a], again [b] and [c]");
        assert_eq!(vars, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scan_empty_and_plain_text() {
        assert!(scan_variables("").is_empty());
        assert!(scan_variables("no placeholders here").is_empty());
    }

    #[test]
    fn test_scan_ignores_empty_brackets() {
        assert!(scan_variables("[] and ]x[").is_empty());
    }

    #[test]
    fn test_scan_is_case_sensitive_and_keeps_spaces() {
        let vars = scan_variables("[Name] [name] [This Week's Activity]");
        assert_eq!(vars, vec!["Name", "name", "This Week's Activity"]);
    }

    #[test]
    fn test_scan_nested_open_bracket_is_part_of_name() {
        // `[a[b]` reads as a single name `a[b`.
        assert_eq!(scan_variables("[a[b]"), vec!["a[b"]);
    }
}
