//! Render command implementation
//!
//! Renders one page, or every registered page, into the output
//! directory. The auxiliary `--vars` context feeds the navbar's raw
//! substitution; pages whose template file is missing are skipped with
//! a note during a render-all (a single-page render reports the error).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::RenderArgs;
use crate::error::{PagesmithError, Result};
use crate::render::pages::{self, PAGES, Page};
use crate::render::vars::VarContext;
use crate::site::{OUTPUT_DIR, Site};
use crate::store::DocumentStore;

/// Run render command
pub fn run(site: Option<PathBuf>, args: RenderArgs) -> Result<()> {
    let site = Site::resolve(site)?;
    let store = DocumentStore::new(site.clone());
    let aux = load_vars(args.vars.as_deref())?;
    let out_dir = args.out.unwrap_or_else(|| site.root.join(OUTPUT_DIR));

    match args.page.as_deref() {
        Some(name) => {
            let page = pages::find_page(name)?;
            let html = pages::render_page(&site, &store, page, &aux)?;
            let path = write_output(&out_dir, page, &html)?;
            println!(
                "{} {}",
                Style::new().green().apply_to("Rendered"),
                path.display()
            );
            Ok(())
        }
        None => render_all(&site, &store, &aux, &out_dir),
    }
}

fn render_all(
    site: &Site,
    store: &DocumentStore,
    aux: &VarContext,
    out_dir: &Path,
) -> Result<()> {
    let style = ProgressStyle::default_bar()
        .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let bar = ProgressBar::new(PAGES.len() as u64);
    bar.set_style(style);

    let mut rendered = 0usize;
    let mut skipped = Vec::new();

    for page in PAGES {
        bar.set_message(page.name.to_string());
        match pages::render_page(site, store, page, aux) {
            Ok(html) => {
                write_output(out_dir, page, &html)?;
                rendered += 1;
            }
            Err(PagesmithError::TemplateNotFound { .. }) => {
                skipped.push(page.name);
            }
            Err(other) => {
                bar.abandon();
                return Err(other);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "{} {} page(s) to {}",
        Style::new().green().apply_to("Rendered"),
        rendered,
        out_dir.display()
    );
    if !skipped.is_empty() {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("Skipped (no template file): {}", skipped.join(", ")))
        );
    }

    let extra = pages::unregistered_templates(site);
    if !extra.is_empty() {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "Templates without a registered page: {}",
                extra.join(", ")
            ))
        );
    }

    Ok(())
}

/// Load the auxiliary variable context from a JSON file
fn load_vars(path: Option<&Path>) -> Result<VarContext> {
    let Some(path) = path else {
        return Ok(VarContext::new());
    };

    let text = fs::read_to_string(path).map_err(|e| PagesmithError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let vars: HashMap<String, String> =
        serde_json::from_str(&text).map_err(|e| PagesmithError::VarsParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(vars)
}

fn write_output(out_dir: &Path, page: &Page, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|e| PagesmithError::FileWriteFailed {
        path: out_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let path = out_dir.join(format!("{}.html", page.name));
    fs::write(&path, html).map_err(|e| PagesmithError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_vars_missing_flag_is_empty() {
        assert!(load_vars(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_vars_parses_json_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        std::fs::write(&path, r#"{"username": "ada", "plan": "Pro"}"#).unwrap();

        let vars = load_vars(Some(&path)).unwrap();
        assert_eq!(vars.get("username").map(String::as_str), Some("ada"));
        assert_eq!(vars.get("plan").map(String::as_str), Some("Pro"));
    }

    #[test]
    fn test_load_vars_rejects_non_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        assert!(matches!(
            load_vars(Some(&path)).unwrap_err(),
            PagesmithError::VarsParseFailed { .. }
        ));
    }

    #[test]
    fn test_load_vars_missing_file() {
        assert!(matches!(
            load_vars(Some(Path::new("/no/such/file.json"))).unwrap_err(),
            PagesmithError::FileReadFailed { .. }
        ));
    }
}
