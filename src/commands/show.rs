//! Show command implementation
//!
//! Prints the persisted YAML for one or both documents, the CLI
//! counterpart of the original editor's configuration view.

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::site::Site;
use crate::store::{DOCUMENTS, DocumentStore};
use crate::ui::display;

/// Run show command
pub fn run(site: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let site = Site::resolve(site)?;
    let store = DocumentStore::new(site);

    let names: Vec<&str> = match &args.doc {
        Some(name) => {
            DocumentStore::validate_name(name)?;
            vec![name.as_str()]
        }
        None => DOCUMENTS.to_vec(),
    };

    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let document = store.load(name)?;
        display::display_document(name, &document)?;
    }

    Ok(())
}
