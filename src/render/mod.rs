//! Template rendering for page fragments
//!
//! - [`template`]: placeholder / loop / conditional rendering
//! - [`vars`]: raw navbar substitution with auxiliary-reference resolution
//! - [`pages`]: the page registry and per-page rendering

pub mod pages;
pub mod template;
pub mod vars;

// Re-export commonly used items
pub use pages::{PAGES, Page, RenderMode, find_page, render_page};
pub use template::render;
pub use vars::{MISSING_VAR, VarContext, resolve_aux_refs, substitute_raw};
