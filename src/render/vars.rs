//! Raw variable substitution for the navigation bar
//!
//! The navbar template is not rendered through the placeholder engine.
//! Instead its config values are substituted directly, in two separate
//! stages:
//!
//! 1. [`resolve_aux_refs`]: config values that are themselves whole
//!    `{{var}}` references (e.g. `username: "{{username}}"`) are
//!    resolved against an auxiliary runtime context (membership /
//!    session info). A reference to an absent variable resolves to the
//!    literal [`MISSING_VAR`].
//! 2. [`substitute_raw`]: every `{{name}}` occurrence in the template
//!    is replaced with the resolved value for that (dotted) name; an
//!    unknown name is replaced with nothing.

use std::collections::HashMap;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

use crate::doc::scalar_to_string;

/// Auxiliary runtime context: flat variable name → value
pub type VarContext = HashMap<String, String>;

/// Fallback literal for a `{{var}}` reference with no auxiliary value
pub const MISSING_VAR: &str = "N/A";

fn whole_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\{\{\s*(\w+)\s*\}\}$").expect("static regex"))
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").expect("static regex"))
}

/// Stage 1: resolve config values that are whole `{{var}}` references
/// against the auxiliary context, recursively through nested mappings.
/// Everything else passes through untouched.
pub fn resolve_aux_refs(section: &Mapping, aux: &VarContext) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in section {
        out.insert(key.clone(), resolve_value(value, aux));
    }
    out
}

fn resolve_value(value: &Value, aux: &VarContext) -> Value {
    match value {
        Value::String(text) => match whole_ref_re().captures(text) {
            Some(caps) => {
                let var = &caps[1];
                Value::String(
                    aux.get(var)
                        .cloned()
                        .unwrap_or_else(|| MISSING_VAR.to_string()),
                )
            }
            None => value.clone(),
        },
        Value::Mapping(map) => Value::Mapping(resolve_aux_refs(map, aux)),
        Value::Sequence(seq) => {
            Value::Sequence(seq.iter().map(|v| resolve_value(v, aux)).collect())
        }
        other => other.clone(),
    }
}

/// Flatten a mapping's scalar leaves to dotted names
fn flatten_into(map: &Mapping, prefix: &str, out: &mut VarContext) {
    for (key, value) in map {
        let Some(key) = key.as_str() else { continue };
        let name = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Mapping(child) => flatten_into(child, &name, out),
            other => {
                if let Some(text) = scalar_to_string(other) {
                    out.insert(name, text);
                }
            }
        }
    }
}

/// Stage 2: direct replacement of `{{name}}` tokens in the template
/// with values from the resolved section. Names address nested values
/// with dots (`brand.text`); unknown names render as empty.
pub fn substitute_raw(template: &str, values: &Mapping) -> String {
    let mut flat = VarContext::new();
    flatten_into(values, "", &mut flat);

    token_re()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            flat.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}
