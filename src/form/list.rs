//! Session-scoped dynamic list state
//!
//! Each repeated-item list edited in a session gets its own
//! [`ListState`]: the current items, the template used by append, and
//! the minimum size the list may not shrink below. State lives for one
//! editing session (it survives widget re-render, and resets when a new
//! session starts).
//!
//! The mutation protocol is fixed: index-aligned edits are applied in
//! place first, then `append` (push a template clone) or `remove_last`
//! (a no-op at the minimum size) run. There is no arbitrary-index
//! removal and no reordering.

use std::collections::HashMap;

use serde_yaml::Value;

/// Mutable state of one repeated-item list
#[derive(Debug, Clone)]
pub struct ListState {
    items: Vec<Value>,
    template: Value,
    min_size: usize,
}

impl ListState {
    pub fn new(items: Vec<Value>, template: Value, min_size: usize) -> Self {
        Self {
            items,
            template,
            min_size,
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Value] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Replace items index-aligned; extra entries on either side keep
    /// their current value
    pub fn apply_edits(&mut self, updated: Vec<Value>) {
        for (slot, value) in self.items.iter_mut().zip(updated) {
            *slot = value;
        }
    }

    /// Append one item built from the template
    pub fn append(&mut self) {
        self.items.push(self.template.clone());
    }

    /// Whether remove_last would currently do anything
    pub fn can_remove(&self) -> bool {
        self.items.len() > self.min_size
    }

    /// Remove the last item; a no-op at the minimum size.
    /// Returns whether an item was removed.
    pub fn remove_last(&mut self) -> bool {
        if self.can_remove() {
            self.items.pop();
            true
        } else {
            false
        }
    }
}

/// Owns every list state for one editing session, keyed by list path
/// (e.g. `pricing.plans`, `pricing.plans.0.features`)
#[derive(Debug, Default)]
pub struct ListRegistry {
    lists: HashMap<String, ListState>,
}

impl ListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a list state, seeding it on first access
    pub fn get_or_seed(
        &mut self,
        key: &str,
        seed: impl FnOnce() -> ListState,
    ) -> &mut ListState {
        self.lists.entry(key.to_string()).or_insert_with(seed)
    }

    pub fn get(&self, key: &str) -> Option<&ListState> {
        self.lists.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ListState> {
        self.lists.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lists.contains_key(key)
    }

    /// Drop a list state (used when its parent item is removed)
    pub fn remove(&mut self, key: &str) {
        self.lists.remove(key);
    }

    /// Forget everything; the next access reseeds from the document
    pub fn reset(&mut self) {
        self.lists.clear();
    }
}
