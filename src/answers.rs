//! Answers supplied for a render cycle.
//! Holds top-level values, indexed repeat items and optional-block inclusion
//! flags, and can be loaded from a JSON document on stdin or in a file.

use crate::constants::REPEAT_NAMESPACE;
use crate::error::{Error, Result};
use crate::renderer::ValueProvider;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One item of an indexed namespace: variable name to value.
pub type Item = IndexMap<String, String>;

/// Values collected for a template.
///
/// Serialized as:
/// ```json
/// {
///   "values":  { "Name": "Ada" },
///   "include": { "a": false },
///   "repeat":  [ { "Item": "first" }, { "Item": "second" } ]
/// }
/// ```
/// Every key other than `values` and `include` is an indexed namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub values: IndexMap<String, String>,

    /// Optional blocks missing from this map are included.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub include: IndexMap<String, bool>,

    #[serde(flatten)]
    pub indexed: IndexMap<String, Vec<Item>>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses answers from JSON. Blank input yields empty answers.
    pub fn from_json_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut document: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| Error::AnswersError(format!("Failed to parse answers as JSON: {e}")))?;

        // Top-level keys that are not lists of items are not namespaces.
        if let Some(object) = document.as_object_mut() {
            object.retain(|key, value| {
                let keep = matches!(key.as_str(), "values" | "include")
                    || serde_json::from_value::<Vec<Item>>(value.clone()).is_ok();
                if !keep {
                    debug!("Ignoring answers key '{key}'.");
                }
                keep
            });
        }

        serde_json::from_value(document)
            .map_err(|e| Error::AnswersError(format!("Failed to parse answers as JSON: {e}")))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::AnswersError(e.to_string()))
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn set_included(&mut self, label: impl Into<String>, included: bool) -> &mut Self {
        self.include.insert(label.into(), included);
        self
    }

    /// Sets one variable of one item, growing the namespace with empty items
    /// as needed.
    pub fn set_indexed(
        &mut self,
        namespace: &str,
        index: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let items = self.indexed.entry(namespace.to_string()).or_default();
        if items.len() <= index {
            items.resize_with(index + 1, Item::new);
        }
        items[index].insert(name.into(), value.into());
        self
    }

    /// Like [`Answers::set_indexed`], but an existing value for `name` at
    /// `index` wins over the new one. Returns whether the value was stored.
    pub fn set_indexed_if_absent(
        &mut self,
        namespace: &str,
        index: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let name = name.into();
        if self.has_indexed(namespace, index, &name) {
            return false;
        }
        self.set_indexed(namespace, index, name, value);
        true
    }

    /// Appends an item to the shared repeat namespace.
    pub fn push_item<I, K, V>(&mut self, item: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let item = item.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self.indexed.entry(REPEAT_NAMESPACE.to_string()).or_default().push(item);
        self
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// First index at which `name` is absent in `namespace`.
    pub fn next_free_index(&self, namespace: &str, name: &str) -> usize {
        let mut index = 0;
        while self.has_indexed(namespace, index, name) {
            index += 1;
        }
        index
    }
}

impl ValueProvider for Answers {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn get_indexed(&self, namespace: &str, index: usize, name: &str) -> Option<&str> {
        self.indexed
            .get(namespace)
            .and_then(|items| items.get(index))
            .and_then(|item| item.get(name))
            .map(String::as_str)
    }

    fn is_included(&self, label: &str) -> bool {
        self.include.get(label).copied().unwrap_or(true)
    }
}

/// Where preloaded answers come from.
#[derive(Debug)]
pub enum AnswerSource {
    Stdin,
    File(PathBuf),
    None,
}

impl AnswerSource {
    pub fn from_args(take_from_stdin: bool, answers_file: Option<PathBuf>) -> Self {
        match (take_from_stdin, answers_file) {
            (true, _) => AnswerSource::Stdin,
            (false, Some(path)) => AnswerSource::File(path),
            (false, None) => AnswerSource::None,
        }
    }
}

pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Answers::from_json_str(&buffer)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    debug!("Loading answers from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    Answers::from_json_str(&content)
}

/// Loads preloaded answers, `None` when they must be collected interactively.
pub fn load_answers(source: AnswerSource) -> Result<Option<Answers>> {
    match source {
        AnswerSource::Stdin => load_from_stdin().map(Some),
        AnswerSource::File(path) => load_from_file(path).map(Some),
        AnswerSource::None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str_reads_all_sections() {
        let answers = Answers::from_json_str(
            r#"{
                "values": {"Name": "Ada"},
                "include": {"o": false},
                "repeat": [{"X": "a"}, {}, {"X": "c"}]
            }"#,
        )
        .unwrap();

        assert_eq!(answers.get("Name"), Some("Ada"));
        assert!(!answers.is_included("o"));
        assert!(answers.is_included("other"));
        assert!(answers.has_indexed("repeat", 0, "X"));
        assert!(!answers.has_indexed("repeat", 1, "X"));
        assert_eq!(answers.get_indexed("repeat", 2, "X"), Some("c"));
        assert_eq!(answers.next_free_index("repeat", "X"), 1);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(Answers::from_json_str("  \n").unwrap(), Answers::default());
    }

    #[test]
    fn test_invalid_json_is_answers_error() {
        match Answers::from_json_str(r#"{"values": "#) {
            Err(Error::AnswersError(msg)) => assert!(msg.contains("Failed to parse answers")),
            other => panic!("Expected AnswersError, got {other:?}"),
        }
    }

    #[test]
    fn test_set_indexed_pads_with_empty_items() {
        let mut answers = Answers::new();
        answers.set_indexed("repeat", 2, "X", "c");

        assert_eq!(answers.indexed["repeat"].len(), 3);
        assert!(!answers.has_indexed("repeat", 0, "X"));
        assert_eq!(answers.get_indexed("repeat", 2, "X"), Some("c"));
    }

    #[test]
    fn test_unknown_scalar_keys_are_ignored() {
        let answers = Answers::from_json_str(
            r#"{"values": {"Name": "Ada"}, "note": "x", "tags": ["a"], "repeat": [{"X": "1"}]}"#,
        )
        .unwrap();

        assert_eq!(answers.get("Name"), Some("Ada"));
        assert_eq!(answers.get_indexed("repeat", 0, "X"), Some("1"));
        assert!(!answers.indexed.contains_key("note"));
        assert!(!answers.indexed.contains_key("tags"));
    }

    #[test]
    fn test_set_indexed_if_absent_keeps_first_value() {
        let mut answers = Answers::new();
        assert!(answers.set_indexed_if_absent("repeat", 0, "X", "first"));
        assert!(!answers.set_indexed_if_absent("repeat", 0, "X", "second"));
        assert!(answers.set_indexed_if_absent("repeat", 0, "Y", "other"));

        assert_eq!(answers.get_indexed("repeat", 0, "X"), Some("first"));
        assert_eq!(answers.get_indexed("repeat", 0, "Y"), Some("other"));
    }

    #[test]
    fn test_json_round_trip_keeps_namespaces() {
        let mut answers = Answers::new();
        answers.set_value("Name", "Ada").set_included("a", false);
        answers.push_item([("X", "1")]);

        let parsed = Answers::from_json_str(&answers.to_json_string().unwrap()).unwrap();
        assert_eq!(parsed, answers);
    }
}
