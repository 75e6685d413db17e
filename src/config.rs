//! Template catalog handling.
//! Provides the built-in note templates and loads additional catalogs from
//! JSON or YAML files.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A template available for filling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Human readable name shown when listing templates
    pub name: String,
    /// Subject line prefix handed to the output consumer
    #[serde(default)]
    pub subject_prefix: Option<String>,
    /// Template text in the directive grammar
    pub source: String,
}

impl TemplateEntry {
    pub fn new(name: &str, subject_prefix: Option<&str>, source: &str) -> Self {
        Self {
            name: name.to_string(),
            subject_prefix: subject_prefix.map(str::to_string),
            source: source.to_string(),
        }
    }
}

/// Ordered mapping from template key to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, TemplateEntry>,
}

impl Catalog {
    /// The note templates shipped with notefill.
    pub fn builtin() -> Self {
        let entries = [
            (
                "action-item",
                TemplateEntry::new(
                    "Action Item",
                    None,
                    "<b>Action item(s)</b><br><ul>{{repeat:Action Items}}<li>[Action item]</li>{{/repeat}}</ul>{{optional:a}}<b>Next steps</b><br><ul>{{repeat:Next Steps}}<li>[Next step]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
            (
                "quote-block",
                TemplateEntry::new(
                    "Quote Block",
                    None,
                    r#"{{optional:a}}[Pre Quote]:<br><br>{{/optional}}<i style="color: gray; font-style: italic;">[quote]</i><br>{{optional:b}}<br>[Post Quote]<br>{{/optional}}"#,
                ),
            ),
            (
                "qa-response",
                TemplateEntry::new(
                    "QA Response",
                    None,
                    r#"{{repeat:Note}}<i style="color: gray;">[QA Note]</i><br><br>{Response}<br><br>{{/repeat}}"#,
                ),
            ),
            (
                "communication-template",
                TemplateEntry::new(
                    "Communication",
                    None,
                    "<i>[description]</i><br>{{optional:b}}<br><b>Topics discussed</b><ul>{{repeat:Topics Discussed}}<li>[Topic]</li>{{/repeat}}</ul>{{/optional}}{{optional:a}}<b>Follow up needed</b><br><ul>{{repeat:Follow ups needed}}<li>[Follow up]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
            (
                "email-template",
                TemplateEntry::new(
                    "Email",
                    None,
                    "<table><tbody><tr><td><b>from:</b></td><td>[from]</td></tr><tr><td><b>to:</b></td><td>[to]</td></tr>{{optional:b}}<tr><td><b>cc:</b></td><td>[cc]</td></tr>{{/optional}}{{optional:c}}<tr><td><b>sent:</b></td><td>[sent]</td></tr>{{/optional}}{{optional:a}}<tr><td><b>subject:</b></td><td>[subject]</td></tr>{{/optional}}</tbody></table><br>[body]",
                ),
            ),
            (
                "invoice-update",
                TemplateEntry::new(
                    "Invoice Updated",
                    Some("Invoice Updated"),
                    "<ul><li><b>Invoice amount updated to [New Invoice Amount]</b></li>{{optional:a}}{{repeat:Notes}}<li>[Note]</li>{{/repeat}}{{/optional}}</ul>{{optional:1}}<div><b>Scope Updates</b></div><ul>{{repeat:Scope Updates}}<li>[Scope Change]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
            (
                "initial-report",
                TemplateEntry::new(
                    "Initial Report",
                    Some("Initial Report"),
                    "<i>[Narrative]</i><br><br>{{optional:a}}<b>Initial Observations</b><br><ul>{{repeat:Observations}}<li>[observation]</li>{{/repeat}}</ul>{{/optional}}{{optional:b}}<b>Initial Scope</b><br><ul>{{repeat:Scope Items}}<li>[scope item]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
            (
                "status-update",
                TemplateEntry::new(
                    "Status Update",
                    Some("Project Status"),
                    "<b>Weekly Project Update [Date]</b><br>{{optional:b}}<br><b>This Week’s Activities:</b><br><ul>{{repeat:This week's activities}}<li>[This Week's Activity]</li>{{/repeat}}</ul>{{/optional}}{{optional:c}}<br><b>Activities for Next Week:</b><ul>{{repeat:Next week's activities}}<li>[Next Week's Activity]</li>{{/repeat}}</ul>{{/optional}}{{optional:a}}<br><b>Issues/Risks:</b><ul>{{repeat:Issues/Risks}}<li>[Issue]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
            (
                "site-visit",
                TemplateEntry::new(
                    "Site Visit",
                    Some("Site Visit"),
                    "<b>Site Visit Report</b><br><b>Purpose:</b> [Purpose of Visit]{{optional:a}}<br><br><b>Observations:</b><br><ul>{{repeat:Observations}}<li>[Observation Detail]</li>{{/repeat}}</ul>{{/optional}}",
                ),
            ),
        ];

        Self {
            entries: entries.into_iter().map(|(key, entry)| (key.to_string(), entry)).collect(),
        }
    }

    /// Looks up a template by key.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the key is unknown
    pub fn get(&self, key: &str) -> Result<&TemplateEntry> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::TemplateNotFound { key: key.to_string() })
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: TemplateEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Adds every entry of `other`, replacing entries with the same key.
    pub fn merge(&mut self, other: Catalog) {
        for (key, entry) in other.entries {
            debug!("Catalog entry '{key}' loaded.");
            self.entries.insert(key, entry);
        }
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TemplateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses catalog content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither a valid JSON nor YAML
///   catalog
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    match serde_json::from_str(content) {
        Ok(catalog) => Ok(catalog),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid catalog format: {e}"))),
    }
}

/// Loads a catalog file.
///
/// # Arguments
/// * `path` - Path to a JSON or YAML catalog
///
/// # Returns
/// * `Result<Catalog>` - Entries in file order
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    debug!("Loading catalog from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_catalog(&content)
}

/// Returns the built-in catalog, extended by the file at `path` if given.
pub fn get_catalog<P: AsRef<Path>>(path: Option<P>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = path {
        catalog.merge(load_catalog(path)?);
    }
    Ok(catalog)
}
