//! Nested value access for content documents
//!
//! Documents are `serde_yaml` mappings of arbitrary depth. Paths address
//! nested values with dots and brackets: `hero.cta_button.text`,
//! `pricing.plans[0].name`. A numeric segment indexes into a sequence,
//! so `plans.0.name` and `plans[0].name` are equivalent.
//!
//! Reads never fail: a missing path is `None` (callers supply the
//! default). Writes create missing intermediate mappings lazily.

use serde_yaml::{Mapping, Value};

/// Split a path into segments, expanding `a[0]` into `a`, `0`
pub(crate) fn segments(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    for part in path.split('.') {
        let mut rest = part;
        while let Some(open) = rest.find('[') {
            if !rest[..open].is_empty() {
                out.push(rest[..open].to_string());
            }
            match rest[open..].find(']') {
                Some(close) => {
                    out.push(rest[open + 1..open + close].to_string());
                    rest = &rest[open + close + 1..];
                }
                None => {
                    // Unclosed bracket: treat the remainder literally
                    out.push(rest[open..].to_string());
                    rest = "";
                }
            }
        }
        if !rest.is_empty() {
            out.push(rest.to_string());
        }
    }
    out
}

/// Look up a nested value in a document
pub fn get_path<'a>(root: &'a Mapping, path: &str) -> Option<&'a Value> {
    let mut segs = segments(path).into_iter();
    let first = segs.next()?;
    let current = root.get(first.as_str())?;
    walk(current, segs)
}

/// Look up a nested value starting from an arbitrary value (used by the
/// renderer for loop-variable scopes)
pub fn get_value_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    walk(root, segments(path).into_iter())
}

fn walk<'a>(
    start: &'a Value,
    segs: impl Iterator<Item = String>,
) -> Option<&'a Value> {
    let mut current = start;
    for seg in segs {
        current = match current {
            Value::Mapping(map) => map.get(seg.as_str())?,
            Value::Sequence(seq) => seq.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Look up a nested string, falling back to a default
pub fn get_str(root: &Mapping, path: &str, default: &str) -> String {
    match get_path(root, path) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => scalar_to_string(other).unwrap_or_else(|| default.to_string()),
        None => default.to_string(),
    }
}

/// Set a nested value, creating intermediate mappings as needed
///
/// Path segments always address mapping keys here; list contents are
/// written whole by the form binder, never element-by-element.
pub fn set_path(root: &mut Mapping, path: &str, value: Value) {
    let segs = segments(path);
    if segs.is_empty() {
        return;
    }

    let mut current = root;
    for seg in &segs[..segs.len() - 1] {
        let key = Value::String(seg.clone());
        // Replace any non-mapping intermediate with a fresh mapping
        if !matches!(current.get(seg.as_str()), Some(Value::Mapping(_))) {
            current.insert(key.clone(), Value::Mapping(Mapping::new()));
        }
        current = match current.get_mut(seg.as_str()) {
            Some(Value::Mapping(map)) => map,
            _ => return,
        };
    }

    let last = &segs[segs.len() - 1];
    current.insert(Value::String(last.clone()), value);
}

/// Remove a nested key, leaving intermediate mappings in place
pub fn remove_path(root: &mut Mapping, path: &str) {
    let segs = segments(path);
    if segs.is_empty() {
        return;
    }

    let mut current = root;
    for seg in &segs[..segs.len() - 1] {
        current = match current.get_mut(seg.as_str()) {
            Some(Value::Mapping(map)) => map,
            _ => return,
        };
    }
    current.remove(segs[segs.len() - 1].as_str());
}

/// Truthiness for conditional rendering: null, false, empty strings and
/// empty sequences are falsy, everything else is truthy
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Sequence(seq)) => !seq.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::Mapping(_)) | Some(Value::Tagged(_)) => true,
    }
}

/// Render a scalar to its display text; containers have no display form
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
