//! Field schemas and the schema-to-widget contract
//!
//! A [`FieldSchema`] declares one editable field: where it lives in the
//! section mapping, how it is labelled, its default, and which widget
//! kind any UI layer should present. The binder seeds [`Widget`]s from
//! the current document and expects back a flat [`FieldValues`] map
//! (field identity → entered value) after user interaction.

use std::collections::HashMap;

use serde_yaml::Value;

use crate::error::{PagesmithError, Result};

/// Widget kinds a UI layer must support
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    TextArea,
    /// Boolean checkbox
    Checkbox,
    /// Constrained choice between fixed options
    Choice(Vec<String>),
}

/// Declarative description of one editable field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Path of the field within its section (or list item), e.g. `cta_button.text`
    pub key: String,

    /// Display label
    pub label: String,

    /// Default value used when the document has no value yet.
    /// Checkboxes encode their default as `"true"` / `"false"`.
    pub default: String,

    /// Widget kind
    pub kind: WidgetKind,

    /// Optional help text shown next to the widget
    pub help: Option<String>,
}

impl FieldSchema {
    pub fn text(
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default: default.into(),
            kind: WidgetKind::Text,
            help: None,
        }
    }

    pub fn text_area(
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default: default.into(),
            kind: WidgetKind::TextArea,
            help: None,
        }
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default: if default { "true" } else { "false" }.to_string(),
            kind: WidgetKind::Checkbox,
            help: None,
        }
    }

    pub fn choice(
        key: impl Into<String>,
        label: impl Into<String>,
        default: impl Into<String>,
        options: &[&str],
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            default: default.into(),
            kind: WidgetKind::Choice(options.iter().map(|o| o.to_string()).collect()),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Convert a raw entered value to its document representation,
    /// validating constrained choices
    pub fn to_value(&self, raw: &str, field_id: &str) -> Result<Value> {
        match &self.kind {
            WidgetKind::Checkbox => Ok(Value::Bool(raw == "true")),
            WidgetKind::Choice(options) => {
                if options.iter().any(|o| o == raw) {
                    Ok(Value::String(raw.to_string()))
                } else {
                    Err(PagesmithError::InvalidField {
                        field: field_id.to_string(),
                        reason: format!("must be one of: {}", options.join(", ")),
                    })
                }
            }
            WidgetKind::Text | WidgetKind::TextArea => Ok(Value::String(raw.to_string())),
        }
    }
}

/// One editable field within a list item or section, with its
/// presence rules
#[derive(Debug, Clone)]
pub struct RecordField {
    pub schema: FieldSchema,

    /// Present only while this sibling field (same item/section) is truthy
    pub when: Option<String>,

    /// Omitted from the rebuilt mapping when the entered value is empty
    pub omit_when_empty: bool,
}

impl RecordField {
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            schema,
            when: None,
            omit_when_empty: false,
        }
    }

    pub fn when(mut self, gate: impl Into<String>) -> Self {
        self.when = Some(gate.into());
        self
    }

    pub fn omit_when_empty(mut self) -> Self {
        self.omit_when_empty = true;
        self
    }
}

impl From<FieldSchema> for RecordField {
    fn from(schema: FieldSchema) -> Self {
        RecordField::new(schema)
    }
}

/// A seeded widget instance handed to the UI layer
#[derive(Debug, Clone)]
pub struct Widget {
    /// Field identity, unique within the edited section
    /// (e.g. `plans.0.button.text`)
    pub id: String,

    /// Display label, numbered for list items (e.g. `Plan Name #1`)
    pub label: String,

    pub kind: WidgetKind,

    /// Current value seeded from the document or the schema default
    pub value: String,

    pub help: Option<String>,
}

/// Flat value-per-field-identity result returned by a UI layer
pub type FieldValues = HashMap<String, String>;
