//! Display functions for documents and sections

use console::Style;

use crate::error::Result;
use crate::form::sections::SectionSchema;
use crate::store::Document;

/// Print a whole document as styled YAML
pub fn display_document(name: &str, document: &Document) -> Result<()> {
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(format!("{}.yaml", name))
    );

    if document.is_empty() {
        println!("  {}", Style::new().dim().apply_to("(empty)"));
        return Ok(());
    }

    let yaml = serde_yaml::to_string(document)?;
    for line in yaml.lines() {
        println!("  {}", line);
    }
    Ok(())
}

/// Print the section header shown before an editing pass
pub fn display_section_header(section: &SectionSchema) {
    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to(section.title),
        Style::new()
            .dim()
            .apply_to(format!("({}.yaml · {})", section.doc, section.key))
    );
}

/// Print the post-save confirmation
pub fn display_saved(doc: &str) {
    println!(
        "{} {}",
        Style::new().green().apply_to("Saved"),
        Style::new().bold().apply_to(format!("{}.yaml", doc))
    );
}
