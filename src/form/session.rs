//! One editing session over the persisted documents
//!
//! A session loads each document once, owns the dynamic list states for
//! everything edited during the session, and writes documents back
//! wholesale on an explicit save. Restarting the session (or the
//! process) resets all list state to what the documents hold.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

use crate::doc::get_path;
use crate::error::{Result, unknown_list};
use crate::form::binder;
use crate::form::list::ListRegistry;
use crate::form::schema::{FieldValues, Widget};
use crate::form::sections::{ItemKind, SectionSchema};
use crate::store::{Document, DocumentStore};

/// Where a list name resolved to: a section list, or a sublist of one item
enum ResolvedList {
    Top { registry_key: String },
    Sub { registry_key: String },
}

pub struct EditSession {
    store: DocumentStore,
    documents: HashMap<String, Document>,
    registry: ListRegistry,
}

impl EditSession {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            documents: HashMap::new(),
            registry: ListRegistry::new(),
        }
    }

    /// The backing document for a section, loaded once per session
    pub fn document(&mut self, name: &str) -> Result<&Document> {
        if !self.documents.contains_key(name) {
            let doc = self.store.load(name)?;
            self.documents.insert(name.to_string(), doc);
        }
        Ok(&self.documents[name])
    }

    /// Current mapping of one section (empty when absent)
    pub fn section_current(&mut self, section: &SectionSchema) -> Result<Mapping> {
        let doc = self.document(section.doc)?;
        Ok(match get_path(doc, section.key) {
            Some(Value::Mapping(map)) => map.clone(),
            _ => Mapping::new(),
        })
    }

    /// Make sure every list state for a section exists
    pub fn ensure_lists(&mut self, section: &SectionSchema) -> Result<()> {
        let current = self.section_current(section)?;
        binder::ensure_lists(section, &current, &mut self.registry);
        Ok(())
    }

    /// Seed the widgets for a section (the UI contract)
    pub fn widgets(&mut self, section: &SectionSchema) -> Result<Vec<Widget>> {
        self.ensure_lists(section)?;
        let current = self.section_current(section)?;
        Ok(binder::widgets_for_section(section, &current, &self.registry))
    }

    /// Apply flat edited values onto the session list states
    pub fn apply_edits(&mut self, section: &SectionSchema, values: &FieldValues) -> Result<()> {
        self.ensure_lists(section)?;
        binder::apply_list_edits(section, values, &mut self.registry)
    }

    /// Append one templated item to a named list
    pub fn append(&mut self, section: &SectionSchema, list_name: &str) -> Result<()> {
        self.ensure_lists(section)?;
        match self.resolve_list(section, list_name)? {
            ResolvedList::Top { registry_key } | ResolvedList::Sub { registry_key } => {
                let state = self
                    .registry
                    .get_mut(&registry_key)
                    .ok_or_else(|| unknown_list(list_name))?;
                state.append();
            }
        }
        // A fresh record item may carry sublists of its own
        for list in &section.lists {
            binder::ensure_sublists(section, list, &mut self.registry);
        }
        Ok(())
    }

    /// Remove the last item of a named list; a no-op at the minimum size.
    /// Returns whether an item was removed.
    pub fn remove_last(&mut self, section: &SectionSchema, list_name: &str) -> Result<bool> {
        self.ensure_lists(section)?;
        let resolved = self.resolve_list(section, list_name)?;

        match resolved {
            ResolvedList::Sub { registry_key } => {
                let state = self
                    .registry
                    .get_mut(&registry_key)
                    .ok_or_else(|| unknown_list(list_name))?;
                Ok(state.remove_last())
            }
            ResolvedList::Top { registry_key } => {
                let state = self
                    .registry
                    .get_mut(&registry_key)
                    .ok_or_else(|| unknown_list(list_name))?;
                let removed_index = state.len().checked_sub(1);
                let removed = state.remove_last();

                // Drop sublist states owned by the removed item so a
                // later append starts from the template again
                if removed {
                    if let Some(index) = removed_index {
                        let list = section
                            .lists
                            .iter()
                            .find(|l| l.key == list_name)
                            .ok_or_else(|| unknown_list(list_name))?;
                        if let ItemKind::Record { sublists, .. } = &list.item {
                            for sub in sublists {
                                self.registry
                                    .remove(&binder::sublist_key(section, list, index, sub));
                            }
                        }
                    }
                }
                Ok(removed)
            }
        }
    }

    /// Rebuild the section from edits and list states, into the document
    pub fn commit(&mut self, section: &SectionSchema, values: &FieldValues) -> Result<()> {
        self.ensure_lists(section)?;
        let current = self.section_current(section)?;
        let rebuilt = binder::rebuild_section(section, &current, values, &self.registry)?;

        let doc_name = section.doc.to_string();
        self.document(&doc_name)?;
        if let Some(doc) = self.documents.get_mut(&doc_name) {
            doc.insert(
                Value::String(section.key.to_string()),
                Value::Mapping(rebuilt),
            );
        }
        Ok(())
    }

    /// Persist one document wholesale
    pub fn save(&mut self, name: &str) -> Result<()> {
        let doc_name = name.to_string();
        self.document(&doc_name)?;
        let doc = &self.documents[&doc_name];
        self.store.save(name, doc)
    }

    /// Forget all session list state; the next access reseeds from the
    /// documents
    pub fn restart(&mut self) {
        self.registry.reset();
        self.documents.clear();
    }

    /// Resolve a list name (`plans`, or `plans.0.features` for a
    /// sublist) to its registry key
    fn resolve_list(&self, section: &SectionSchema, name: &str) -> Result<ResolvedList> {
        for list in &section.lists {
            if list.key == name {
                return Ok(ResolvedList::Top {
                    registry_key: binder::list_key(section, list),
                });
            }

            if let ItemKind::Record { sublists, .. } = &list.item {
                for sub in sublists {
                    let Some(rest) = name
                        .strip_prefix(list.key.as_str())
                        .and_then(|r| r.strip_prefix('.'))
                    else {
                        continue;
                    };
                    let Some(index) = rest
                        .strip_suffix(sub.key.as_str())
                        .and_then(|r| r.strip_suffix('.'))
                        .and_then(|i| i.parse::<usize>().ok())
                    else {
                        continue;
                    };

                    let registry_key = binder::sublist_key(section, list, index, sub);
                    if self.registry.contains(&registry_key) {
                        return Ok(ResolvedList::Sub { registry_key });
                    }
                }
            }
        }
        Err(unknown_list(name))
    }
}
