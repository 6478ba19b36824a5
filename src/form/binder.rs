//! Schema-driven form binding
//!
//! The binder is the bridge between section schemas and documents:
//! it seeds widgets from the current document (or schema defaults),
//! maintains the session list states, and reassembles the edited
//! section mapping from flat field values plus those states. Fixed
//! fields are injected here; conditional fields are omitted entirely
//! when their gate is off.

use serde_yaml::{Mapping, Value};

use crate::doc::{get_path, get_str, remove_path, scalar_to_string, set_path, truthy};
use crate::error::{Result, unknown_list};
use crate::form::list::{ListRegistry, ListState};
use crate::form::schema::{FieldValues, RecordField, Widget};
use crate::form::sections::{ItemKind, ListSchema, SectionSchema};

/// Registry key of a section's top-level list
pub fn list_key(section: &SectionSchema, list: &ListSchema) -> String {
    format!("{}.{}", section.key, list.key)
}

/// Registry key of a sublist inside one list item
pub fn sublist_key(
    section: &SectionSchema,
    list: &ListSchema,
    index: usize,
    sub: &ListSchema,
) -> String {
    format!("{}.{}.{}.{}", section.key, list.key, index, sub.key)
}

/// Document items when present and non-empty, the schema seed otherwise
fn items_or_seed(list: &ListSchema, current: Option<&Value>) -> Vec<Value> {
    match current {
        Some(Value::Sequence(seq)) if !seq.is_empty() => seq.clone(),
        _ => list.seed.clone(),
    }
}

/// Ensure every session list state for a section exists, seeding from
/// the document on first access
pub fn ensure_lists(section: &SectionSchema, current: &Mapping, registry: &mut ListRegistry) {
    for list in &section.lists {
        let key = list_key(section, list);
        let items = items_or_seed(list, get_path(current, &list.key));
        registry.get_or_seed(&key, || {
            ListState::new(items, list.template.clone(), list.min_size)
        });
        ensure_sublists(section, list, registry);
    }
}

/// Ensure sublist states exist for every current item of a record list
pub fn ensure_sublists(section: &SectionSchema, list: &ListSchema, registry: &mut ListRegistry) {
    let ItemKind::Record { sublists, .. } = &list.item else {
        return;
    };
    if sublists.is_empty() {
        return;
    }

    let key = list_key(section, list);
    let parent_items: Vec<Value> = match registry.get(&key) {
        Some(state) => state.items().to_vec(),
        None => return,
    };

    for (index, item) in parent_items.iter().enumerate() {
        for sub in sublists {
            let sub_items = match item.as_mapping() {
                Some(map) => items_or_seed(sub, get_path(map, &sub.key)),
                None => sub.seed.clone(),
            };
            registry.get_or_seed(&sublist_key(section, list, index, sub), || {
                ListState::new(sub_items, sub.template.clone(), sub.min_size)
            });
        }
    }
}

/// Apply flat edited values onto the session list states, index-aligned
/// and in place. Runs before any append/remove-last operation so that
/// structural changes never discard unsaved edits.
pub fn apply_list_edits(
    section: &SectionSchema,
    values: &FieldValues,
    registry: &mut ListRegistry,
) -> Result<()> {
    for list in &section.lists {
        let key = list_key(section, list);
        let len = registry.get(&key).map_or(0, ListState::len);

        match &list.item {
            ItemKind::Record { fields, sublists } => {
                for index in 0..len {
                    for field in fields {
                        let id = format!("{}.{}.{}", list.key, index, field.schema.key);
                        let Some(raw) = values.get(&id) else { continue };
                        let value = field.schema.to_value(raw, &id)?;
                        if let Some(state) = registry.get_mut(&key) {
                            if let Some(Value::Mapping(item)) = state.items_mut().get_mut(index) {
                                set_path(item, &field.schema.key, value);
                            }
                        }
                    }
                    for sub in sublists {
                        let sub_key = sublist_key(section, list, index, sub);
                        let sub_len = registry.get(&sub_key).map_or(0, ListState::len);
                        for j in 0..sub_len {
                            let id = format!("{}.{}.{}.{}", list.key, index, sub.key, j);
                            let Some(raw) = values.get(&id) else { continue };
                            if let Some(state) = registry.get_mut(&sub_key) {
                                if let Some(slot) = state.items_mut().get_mut(j) {
                                    *slot = Value::String(raw.clone());
                                }
                            }
                        }
                    }
                }
            }
            ItemKind::Scalar => {
                for index in 0..len {
                    let id = format!("{}.{}", list.key, index);
                    let Some(raw) = values.get(&id) else { continue };
                    if let Some(state) = registry.get_mut(&key) {
                        if let Some(slot) = state.items_mut().get_mut(index) {
                            *slot = Value::String(raw.clone());
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Reassemble the section mapping from the loaded section, the flat
/// edited values, and the session list states
pub fn rebuild_section(
    section: &SectionSchema,
    current: &Mapping,
    values: &FieldValues,
    registry: &ListRegistry,
) -> Result<Mapping> {
    let mut out = current.clone();

    // Ungated scalars first so gates read post-edit values
    for field in section.fields.iter().filter(|f| f.when.is_none()) {
        apply_scalar(&mut out, section.key, field, values)?;
    }
    for field in section.fields.iter().filter(|f| f.when.is_some()) {
        let gate = field.when.as_deref().unwrap_or_default();
        if truthy(get_path(&out, gate)) {
            apply_scalar(&mut out, section.key, field, values)?;
        } else {
            remove_path(&mut out, &field.schema.key);
        }
    }

    for (path, value) in &section.fixed {
        set_path(&mut out, path, value.clone());
    }
    for (path, value, gate) in &section.fixed_when {
        if truthy(get_path(&out, gate)) {
            set_path(&mut out, path, value.clone());
        } else {
            remove_path(&mut out, path);
        }
    }

    for list in &section.lists {
        let key = list_key(section, list);
        let state = registry.get(&key).ok_or_else(|| unknown_list(&key))?;
        let items = rebuild_items(section, list, state, registry)?;
        set_path(&mut out, &list.key, Value::Sequence(items));
    }

    prune_empty_mappings(&mut out);
    Ok(out)
}

fn apply_scalar(
    out: &mut Mapping,
    section_key: &str,
    field: &RecordField,
    values: &FieldValues,
) -> Result<()> {
    let id = format!("{}.{}", section_key, field.schema.key);

    if let Some(raw) = values.get(&field.schema.key) {
        if field.omit_when_empty && raw.is_empty() {
            remove_path(out, &field.schema.key);
            return Ok(());
        }
        let value = field.schema.to_value(raw, &id)?;
        set_path(out, &field.schema.key, value);
    } else if get_path(out, &field.schema.key).is_none() {
        // No edit and no current value: seed the declared default
        if field.omit_when_empty && field.schema.default.is_empty() {
            return Ok(());
        }
        let value = field.schema.to_value(&field.schema.default, &id)?;
        set_path(out, &field.schema.key, value);
    }

    Ok(())
}

fn rebuild_items(
    section: &SectionSchema,
    list: &ListSchema,
    state: &ListState,
    registry: &ListRegistry,
) -> Result<Vec<Value>> {
    match &list.item {
        ItemKind::Scalar => Ok(state.items().to_vec()),
        ItemKind::Record { fields, sublists } => {
            let mut items = Vec::with_capacity(state.len());
            for (index, item) in state.items().iter().enumerate() {
                items.push(rebuild_record_item(
                    section, list, fields, sublists, index, item, registry,
                )?);
            }
            Ok(items)
        }
    }
}

/// Build one record item fresh, in schema order, from its edited state
fn rebuild_record_item(
    section: &SectionSchema,
    list: &ListSchema,
    fields: &[RecordField],
    sublists: &[ListSchema],
    index: usize,
    item: &Value,
    registry: &ListRegistry,
) -> Result<Value> {
    let current = item.as_mapping().cloned().unwrap_or_default();
    let mut out = Mapping::new();

    for field in fields {
        if let Some(gate) = &field.when {
            if !truthy(get_path(&current, gate)) {
                continue;
            }
        }

        let id = format!("{}.{}.{}", list.key, index, field.schema.key);
        let value = match get_path(&current, &field.schema.key) {
            Some(v) => v.clone(),
            None => field.schema.to_value(&field.schema.default, &id)?,
        };

        if field.omit_when_empty && matches!(&value, Value::String(s) if s.is_empty()) {
            continue;
        }
        set_path(&mut out, &field.schema.key, value);
    }

    for sub in sublists {
        let sub_key = sublist_key(section, list, index, sub);
        let sub_state = registry.get(&sub_key).ok_or_else(|| unknown_list(&sub_key))?;
        set_path(&mut out, &sub.key, Value::Sequence(sub_state.items().to_vec()));
    }

    Ok(Value::Mapping(out))
}

/// Drop mappings left empty by conditional removal
fn prune_empty_mappings(map: &mut Mapping) {
    let keys: Vec<Value> = map.keys().cloned().collect();
    for key in keys {
        if let Some(Value::Mapping(child)) = map.get_mut(&key) {
            prune_empty_mappings(child);
            if child.is_empty() {
                map.remove(&key);
            }
        }
    }
}

/// Seed the widget list for a section: the schema-to-widget contract
pub fn widgets_for_section(
    section: &SectionSchema,
    current: &Mapping,
    registry: &ListRegistry,
) -> Vec<Widget> {
    let mut widgets = Vec::new();

    for field in &section.fields {
        if let Some(gate) = &field.when {
            if !truthy(get_path(current, gate)) {
                continue;
            }
        }
        widgets.push(Widget {
            id: field.schema.key.clone(),
            label: field.schema.label.clone(),
            kind: field.schema.kind.clone(),
            value: get_str(current, &field.schema.key, &field.schema.default),
            help: field.schema.help.clone(),
        });
    }

    for list in &section.lists {
        widgets.extend(widgets_for_list(section, list, registry));
    }

    widgets
}

fn widgets_for_list(
    section: &SectionSchema,
    list: &ListSchema,
    registry: &ListRegistry,
) -> Vec<Widget> {
    let mut widgets = Vec::new();
    let key = list_key(section, list);
    let Some(state) = registry.get(&key) else {
        return widgets;
    };

    for (index, item) in state.items().iter().enumerate() {
        match &list.item {
            ItemKind::Record { fields, sublists } => {
                let item_map = item.as_mapping().cloned().unwrap_or_default();
                for field in fields {
                    if let Some(gate) = &field.when {
                        if !truthy(get_path(&item_map, gate)) {
                            continue;
                        }
                    }
                    widgets.push(Widget {
                        id: format!("{}.{}.{}", list.key, index, field.schema.key),
                        label: format!("{} #{}", field.schema.label, index + 1),
                        kind: field.schema.kind.clone(),
                        value: get_str(&item_map, &field.schema.key, &field.schema.default),
                        help: field.schema.help.clone(),
                    });
                }
                for sub in sublists {
                    let sub_key = sublist_key(section, list, index, sub);
                    let Some(sub_state) = registry.get(&sub_key) else {
                        continue;
                    };
                    for (j, sub_item) in sub_state.items().iter().enumerate() {
                        widgets.push(Widget {
                            id: format!("{}.{}.{}.{}", list.key, index, sub.key, j),
                            label: format!("{} #{}-{}", sub.item_label, index + 1, j + 1),
                            kind: crate::form::schema::WidgetKind::Text,
                            value: scalar_to_string(sub_item).unwrap_or_default(),
                            help: None,
                        });
                    }
                }
            }
            ItemKind::Scalar => {
                widgets.push(Widget {
                    id: format!("{}.{}", list.key, index),
                    label: format!("{} #{}", list.item_label, index + 1),
                    kind: crate::form::schema::WidgetKind::Text,
                    value: scalar_to_string(item).unwrap_or_default(),
                    help: None,
                });
            }
        }
    }

    widgets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::sections::find_section;

    fn empty() -> Mapping {
        Mapping::new()
    }

    #[test]
    fn test_empty_document_seeds_default_pricing_plan() {
        let section = find_section("pricing").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        let rebuilt =
            rebuild_section(&section, &empty(), &FieldValues::new(), &registry).unwrap();

        assert_eq!(
            get_path(&rebuilt, "section_id").unwrap(),
            &Value::String("pricing".into())
        );
        assert_eq!(
            get_path(&rebuilt, "feature_icon").unwrap(),
            &Value::String("fas fa-check".into())
        );
        assert_eq!(
            get_path(&rebuilt, "title").unwrap(),
            &Value::String("Choose Your Plan".into())
        );
        assert_eq!(
            get_path(&rebuilt, "plans.0.name").unwrap(),
            &Value::String("Free Plan".into())
        );
        assert_eq!(
            get_path(&rebuilt, "plans.0.button.link").unwrap(),
            &Value::String("https://www.patreon.com/c/3droid/membership".into())
        );

        let features = get_path(&rebuilt, "plans.0.features")
            .unwrap()
            .as_sequence()
            .unwrap();
        assert_eq!(
            features,
            &vec![
                Value::String("Basic layout templates".into()),
                Value::String("Social sharing features".into()),
                Value::String("Basic code optimization".into()),
            ]
        );
    }

    #[test]
    fn test_badge_present_only_when_popular() {
        let section = find_section("pricing").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        // Default plan is not popular: no badge key at all
        let rebuilt =
            rebuild_section(&section, &empty(), &FieldValues::new(), &registry).unwrap();
        assert!(get_path(&rebuilt, "plans.0.popular_badge_text").is_none());

        // Flip the checkbox: the badge appears with its default text
        let mut values = FieldValues::new();
        values.insert("plans.0.is_popular".into(), "true".into());
        apply_list_edits(&section, &values, &mut registry).unwrap();
        let rebuilt = rebuild_section(&section, &empty(), &values, &registry).unwrap();
        assert_eq!(
            get_path(&rebuilt, "plans.0.popular_badge_text").unwrap(),
            &Value::String("Most Popular".into())
        );
    }

    #[test]
    fn test_cta_icon_omitted_when_empty() {
        let section = find_section("demo").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        // The seeded button carries an icon
        let rebuilt =
            rebuild_section(&section, &empty(), &FieldValues::new(), &registry).unwrap();
        assert!(get_path(&rebuilt, "cta_buttons.0.icon").is_some());

        // Clearing the icon removes the key, it is not stored empty
        let mut values = FieldValues::new();
        values.insert("cta_buttons.0.icon".into(), String::new());
        apply_list_edits(&section, &values, &mut registry).unwrap();
        let rebuilt = rebuild_section(&section, &empty(), &values, &registry).unwrap();
        assert!(get_path(&rebuilt, "cta_buttons.0.icon").is_none());
        assert!(get_path(&rebuilt, "cta_buttons.0.text").is_some());
    }

    #[test]
    fn test_hero_video_block_follows_source() {
        let section = find_section("hero").unwrap();
        let registry = ListRegistry::new();

        // No source configured: no video block at all
        let rebuilt =
            rebuild_section(&section, &empty(), &FieldValues::new(), &registry).unwrap();
        assert!(get_path(&rebuilt, "video").is_none());
        assert_eq!(
            get_path(&rebuilt, "cta_button.link").unwrap(),
            &Value::String("/app".into())
        );

        // Configuring a source brings the fixed type with it
        let mut values = FieldValues::new();
        values.insert("video.source".into(), "intro.mp4".into());
        let rebuilt = rebuild_section(&section, &empty(), &values, &registry).unwrap();
        assert_eq!(
            get_path(&rebuilt, "video.source").unwrap(),
            &Value::String("intro.mp4".into())
        );
        assert_eq!(
            get_path(&rebuilt, "video.type").unwrap(),
            &Value::String("video/mp4".into())
        );
    }

    #[test]
    fn test_edits_survive_append_and_remove_last() {
        let section = find_section("faq").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        let mut values = FieldValues::new();
        values.insert("faq_items.0.question".into(), "How much?".into());
        apply_list_edits(&section, &values, &mut registry).unwrap();

        let key = list_key(&section, &section.lists[0]);
        let state = registry.get_mut(&key).unwrap();
        state.append();
        state.remove_last();

        let rebuilt = rebuild_section(&section, &empty(), &values, &registry).unwrap();
        assert_eq!(
            get_path(&rebuilt, "faq_items.0.question").unwrap(),
            &Value::String("How much?".into())
        );
        assert_eq!(
            get_path(&rebuilt, "faq_items").unwrap().as_sequence().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_unknown_keys_in_section_survive_rebuild() {
        let section = find_section("faq").unwrap();
        let mut registry = ListRegistry::new();

        let current: Mapping =
            serde_yaml::from_str("custom_note: keep me\ntitle: FAQs\n").unwrap();
        ensure_lists(&section, &current, &mut registry);

        let rebuilt =
            rebuild_section(&section, &current, &FieldValues::new(), &registry).unwrap();
        assert_eq!(
            get_path(&rebuilt, "custom_note").unwrap(),
            &Value::String("keep me".into())
        );
        // Existing value wins over the schema default
        assert_eq!(
            get_path(&rebuilt, "title").unwrap(),
            &Value::String("FAQs".into())
        );
    }

    #[test]
    fn test_widgets_seed_from_document_then_defaults() {
        let section = find_section("hero").unwrap();
        let registry = ListRegistry::new();

        let current: Mapping = serde_yaml::from_str("heading: Custom Heading\n").unwrap();
        let widgets = widgets_for_section(&section, &current, &registry);

        let heading = widgets.iter().find(|w| w.id == "heading").unwrap();
        assert_eq!(heading.value, "Custom Heading");

        let cta = widgets.iter().find(|w| w.id == "cta_button.text").unwrap();
        assert_eq!(cta.value, "Try Now");
    }

    #[test]
    fn test_widget_ids_for_list_items_are_indexed() {
        let section = find_section("pricing").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        let widgets = widgets_for_section(&section, &empty(), &registry);
        assert!(widgets.iter().any(|w| w.id == "plans.0.name"));
        assert!(widgets.iter().any(|w| w.id == "plans.0.button.text"));
        assert!(widgets.iter().any(|w| w.id == "plans.0.features.2"));
        // Not popular: no badge widget offered
        assert!(!widgets.iter().any(|w| w.id == "plans.0.popular_badge_text"));

        let name = widgets.iter().find(|w| w.id == "plans.0.name").unwrap();
        assert_eq!(name.label, "Plan Name #1");
    }

    #[test]
    fn test_social_links_rebuild_to_empty_sequence() {
        let section = find_section("footer").unwrap();
        let mut registry = ListRegistry::new();
        ensure_lists(&section, &empty(), &mut registry);

        let rebuilt =
            rebuild_section(&section, &empty(), &FieldValues::new(), &registry).unwrap();
        assert_eq!(
            get_path(&rebuilt, "social_links").unwrap(),
            &Value::Sequence(vec![])
        );
    }
}
