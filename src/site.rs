//! Site root handling for Pagesmith
//!
//! A site is any directory containing the fixed `template/` tree:
//!
//! ```text
//! template/
//! ├── config/
//! │   ├── landing.yaml   # Landing page content
//! │   └── auth.yaml      # Auth page content (footer, login, policies, navbar)
//! └── html/              # Page templates
//! ```
//!
//! File locations below the site root are fixed constants; only the root
//! itself can be moved (via `--site` or `PAGESMITH_SITE`).

use std::path::{Path, PathBuf};

use crate::error::{PagesmithError, Result};

/// Template tree directory name
pub const TEMPLATE_DIR: &str = "template";

/// Config subdirectory (relative to the site root)
pub const CONFIG_DIR: &str = "template/config";

/// HTML template subdirectory (relative to the site root)
pub const HTML_DIR: &str = "template/html";

/// Default output directory for rendered pages
pub const OUTPUT_DIR: &str = "rendered";

/// Represents a Pagesmith site
#[derive(Debug, Clone)]
pub struct Site {
    /// Root directory of the site (where template/ is located)
    pub root: PathBuf,
}

impl Site {
    /// Detect if a site exists at the given path
    pub fn exists(root: &Path) -> bool {
        root.join(TEMPLATE_DIR).is_dir()
    }

    /// Find a site by searching upward from the given path
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::exists(&current) {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Open a site at the given path
    pub fn open(root: &Path) -> Result<Self> {
        if !Self::exists(root) {
            return Err(PagesmithError::SiteNotFound {
                path: root.display().to_string(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Resolve a site from an optional CLI override, falling back to an
    /// upward search from the current directory
    pub fn resolve(site: Option<PathBuf>) -> Result<Self> {
        let start = match site {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| PagesmithError::IoError {
                message: format!("Failed to get current directory: {}", e),
            })?,
        };

        let root = Self::find_from(&start).ok_or_else(|| PagesmithError::SiteNotFound {
            path: start.display().to_string(),
        })?;

        Self::open(&root)
    }

    /// Path to a named document file
    pub fn config_path(&self, name: &str) -> PathBuf {
        self.root.join(CONFIG_DIR).join(format!("{}.yaml", name))
    }

    /// Path to the config directory
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Path to a template file
    pub fn template_path(&self, file: &str) -> PathBuf {
        self.root.join(HTML_DIR).join(format!("{}.html", file))
    }

    /// Path to the HTML template directory
    pub fn html_dir(&self) -> PathBuf {
        self.root.join(HTML_DIR)
    }
}
