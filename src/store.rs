//! Document persistence for Pagesmith
//!
//! Each content domain persists to its own YAML file under
//! `template/config/`. Loads tolerate a missing file (empty document);
//! malformed YAML is fatal. Saves are whole-file overwrites, never
//! partial patches.

use std::fs;

use serde_yaml::Mapping;

use crate::error::{PagesmithError, Result};
use crate::site::Site;

/// Landing page document name
pub const LANDING: &str = "landing";

/// Auth pages document name
pub const AUTH: &str = "auth";

/// All known document names
pub const DOCUMENTS: &[&str] = &[LANDING, AUTH];

/// A persisted content document: a nested string-keyed mapping.
///
/// `serde_yaml::Mapping` keeps key insertion order, which is what makes
/// the load/save round-trip order-preserving.
pub type Document = Mapping;

/// Loads and saves named documents for one site
#[derive(Debug)]
pub struct DocumentStore {
    site: Site,
}

impl DocumentStore {
    pub fn new(site: Site) -> Self {
        Self { site }
    }

    /// Check that a document name is one of the known domains
    pub fn validate_name(name: &str) -> Result<()> {
        if DOCUMENTS.contains(&name) {
            Ok(())
        } else {
            Err(PagesmithError::UnknownDocument {
                name: name.to_string(),
            })
        }
    }

    /// Load a named document
    ///
    /// A missing file loads as an empty document. Malformed YAML is a
    /// fatal parse error carrying the file path.
    pub fn load(&self, name: &str) -> Result<Document> {
        let path = self.site.config_path(name);

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(PagesmithError::ConfigReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        };

        // An empty or comment-only file parses to null, not a mapping
        let value: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|e| PagesmithError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        match value {
            serde_yaml::Value::Null => Ok(Document::new()),
            serde_yaml::Value::Mapping(mapping) => Ok(mapping),
            other => Err(PagesmithError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: format!("expected a mapping at the document root, got {}", type_name(&other)),
            }),
        }
    }

    /// Save a named document, replacing any previous content
    pub fn save(&self, name: &str, document: &Document) -> Result<()> {
        let dir = self.site.config_dir();
        fs::create_dir_all(&dir).map_err(|e| PagesmithError::ConfigWriteFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = self.site.config_path(name);
        let yaml = serde_yaml::to_string(document)?;

        fs::write(&path, yaml).map_err(|e| PagesmithError::ConfigWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
