//! Page registry and rendering entry points
//!
//! Each page fragment pairs one template file under `template/html/`
//! with the document that feeds it. The navbar is the one raw-mode
//! page: its section values are substituted directly after resolving
//! `{{var}}` references against the runtime context.

use std::fs;

use serde_yaml::Value;
use walkdir::WalkDir;

use crate::doc::get_path;
use crate::error::{PagesmithError, Result, unknown_page};
use crate::render::{template, vars};
use crate::site::Site;
use crate::store::{AUTH, DocumentStore, LANDING};

/// How a page's template is merged with its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Placeholder/loop/conditional rendering against the whole document
    Template,
    /// Raw `{{name}}` substitution from one section, after resolving
    /// auxiliary references
    Raw { section: &'static str },
}

/// One renderable page fragment
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Page name on the CLI and output file stem
    pub name: &'static str,

    /// Template file stem under `template/html/`
    pub template: &'static str,

    /// Backing document
    pub doc: &'static str,

    pub mode: RenderMode,
}

/// Every known page, in render order
pub const PAGES: &[Page] = &[
    Page {
        name: "landing",
        template: "landing",
        doc: LANDING,
        mode: RenderMode::Template,
    },
    Page {
        name: "footer",
        template: "footer",
        doc: AUTH,
        mode: RenderMode::Template,
    },
    Page {
        name: "login",
        template: "login",
        doc: AUTH,
        mode: RenderMode::Template,
    },
    Page {
        name: "privacy",
        template: "privacy_policy",
        doc: AUTH,
        mode: RenderMode::Template,
    },
    Page {
        name: "terms",
        template: "terms_of_service",
        doc: AUTH,
        mode: RenderMode::Template,
    },
    Page {
        name: "navbar",
        template: "navbar",
        doc: AUTH,
        mode: RenderMode::Raw { section: "navbar" },
    },
    Page {
        name: "styles",
        template: "styles",
        doc: LANDING,
        mode: RenderMode::Template,
    },
];

/// Look up a page by name
pub fn find_page(name: &str) -> Result<&'static Page> {
    PAGES
        .iter()
        .find(|page| page.name == name)
        .ok_or_else(|| unknown_page(name))
}

/// Read a page's template file
fn read_template(site: &Site, page: &Page) -> Result<String> {
    let path = site.template_path(page.template);
    if !path.is_file() {
        return Err(PagesmithError::TemplateNotFound {
            path: path.display().to_string(),
        });
    }
    fs::read_to_string(&path).map_err(|e| PagesmithError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Render one page to its output text
pub fn render_page(
    site: &Site,
    store: &DocumentStore,
    page: &Page,
    aux: &vars::VarContext,
) -> Result<String> {
    let text = read_template(site, page)?;
    let document = store.load(page.doc)?;

    match page.mode {
        RenderMode::Template => template::render(&text, &document),
        RenderMode::Raw { section } => {
            let section_map = match get_path(&document, section) {
                Some(Value::Mapping(map)) => map.clone(),
                _ => serde_yaml::Mapping::new(),
            };
            let resolved = vars::resolve_aux_refs(&section_map, aux);
            Ok(vars::substitute_raw(&text, &resolved))
        }
    }
}

/// Template file stems present on disk but absent from the registry
pub fn unregistered_templates(site: &Site) -> Vec<String> {
    let mut extra = Vec::new();
    for entry in WalkDir::new(site.html_dir())
        .min_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !PAGES.iter().any(|page| page.template == stem) {
            extra.push(stem.to_string());
        }
    }
    extra.sort();
    extra
}
