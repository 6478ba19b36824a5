//! Edit command implementation
//!
//! Two paths share the same binder contract: the interactive path
//! prompts through the seeded widgets, the scripted path takes the
//! flat field values from `--set` flags. Either way edits land on the
//! session lists first, structural operations run after, and the
//! section is rebuilt and saved wholesale.

use std::path::PathBuf;

use console::Style;

use crate::cli::EditArgs;
use crate::error::{Result, invalid_field};
use crate::form::schema::FieldValues;
use crate::form::sections::{SectionSchema, all_sections, find_section};
use crate::form::session::EditSession;
use crate::site::Site;
use crate::store::DocumentStore;
use crate::ui::display;
use crate::ui::prompts::{self, SectionAction};

/// Run edit command
pub fn run(site: Option<PathBuf>, args: EditArgs) -> Result<()> {
    let site = Site::resolve(site)?;
    let store = DocumentStore::new(site);
    let mut session = EditSession::new(store);

    let scripted = !args.set.is_empty() || !args.append.is_empty() || !args.remove_last.is_empty();

    let section = match &args.section {
        Some(name) => find_section(name)?,
        None if scripted => {
            return Err(invalid_field(
                "section",
                "a section argument is required with --set, --append or --remove-last",
            ));
        }
        None => {
            let sections = all_sections();
            match prompts::select_section(&sections)? {
                Some(index) => sections[index].clone(),
                None => return Ok(()),
            }
        }
    };

    if scripted {
        run_scripted(&mut session, &section, &args)
    } else {
        run_interactive(&mut session, &section, args.no_save)
    }
}

/// Parse `FIELD=VALUE` pairs into the flat binder values
fn parse_set(pairs: &[String]) -> Result<FieldValues> {
    let mut values = FieldValues::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((field, value)) => {
                values.insert(field.trim().to_string(), value.to_string());
            }
            None => return Err(invalid_field(pair, "expected FIELD=VALUE")),
        }
    }
    Ok(values)
}

fn run_scripted(session: &mut EditSession, section: &SectionSchema, args: &EditArgs) -> Result<()> {
    let values = parse_set(&args.set)?;

    // Item edits are applied in place before any structural operation,
    // so appends and removals never discard them
    session.apply_edits(section, &values)?;

    for list in &args.append {
        session.append(section, list)?;
    }
    for list in &args.remove_last {
        if !session.remove_last(section, list)? {
            println!(
                "{}",
                Style::new()
                    .dim()
                    .apply_to(format!("{} is at its minimum size, nothing removed", list))
            );
        }
    }

    session.commit(section, &values)?;

    if args.no_save {
        println!(
            "{}",
            Style::new().dim().apply_to("Edits applied but not saved (--no-save)")
        );
    } else {
        session.save(section.doc)?;
        display::display_saved(section.doc);
    }
    Ok(())
}

fn run_interactive(
    session: &mut EditSession,
    section: &SectionSchema,
    no_save: bool,
) -> Result<()> {
    display::display_section_header(section);

    loop {
        let widgets = session.widgets(section)?;
        let values = prompts::prompt_widgets(&widgets)?;
        session.apply_edits(section, &values)?;

        loop {
            match prompts::select_action(section)? {
                SectionAction::Save => {
                    session.commit(section, &values)?;
                    if no_save {
                        println!(
                            "{}",
                            Style::new()
                                .dim()
                                .apply_to("Edits applied but not saved (--no-save)")
                        );
                    } else {
                        session.save(section.doc)?;
                        display::display_saved(section.doc);
                    }
                    return Ok(());
                }
                SectionAction::Append(list) => {
                    session.append(section, &list)?;
                    // Re-prompt so the new item's fields can be filled in
                    break;
                }
                SectionAction::RemoveLast(list) => {
                    if !session.remove_last(section, &list)? {
                        println!(
                            "{}",
                            Style::new()
                                .dim()
                                .apply_to("List is at its minimum size, nothing removed")
                        );
                    }
                }
                SectionAction::EditAgain => break,
                SectionAction::Discard => {
                    println!("{}", Style::new().dim().apply_to("Discarded"));
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let values = parse_set(&[
            "title=Plans".to_string(),
            "plans.0.name=Starter Plan".to_string(),
            "note=a=b".to_string(),
        ])
        .unwrap();
        assert_eq!(values.get("title").map(String::as_str), Some("Plans"));
        assert_eq!(
            values.get("plans.0.name").map(String::as_str),
            Some("Starter Plan")
        );
        // Only the first '=' splits
        assert_eq!(values.get("note").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_parse_set_rejects_missing_equals() {
        assert!(parse_set(&["title".to_string()]).is_err());
    }
}
