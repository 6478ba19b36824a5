//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - edit: Edit command arguments
//! - show: Show command arguments
//! - render: Render command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod edit;
pub mod render;
pub mod show;

pub use completions::CompletionsArgs;
pub use edit::EditArgs;
pub use render::RenderArgs;
pub use show::ShowArgs;

/// Pagesmith - landing site content editor
///
/// Edit the YAML content behind a landing site and render it into HTML pages.
#[derive(Parser, Debug)]
#[command(
    name = "pagesmith",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Form-driven content editor and template renderer for a landing site",
    long_about = "Pagesmith edits the textual content of a marketing landing page and its \
                  auth pages (footer, login, privacy policy, terms, navbar), persisted as \
                  YAML documents, and renders them into HTML page fragments.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pagesmith edit                               \x1b[90m# Pick a section interactively\x1b[0m\n   \
                  pagesmith edit pricing --set title=Plans     \x1b[90m# Scripted edit\x1b[0m\n   \
                  pagesmith edit pricing --append plans        \x1b[90m# Add a templated plan\x1b[0m\n   \
                  pagesmith show --doc landing                 \x1b[90m# Print the saved YAML\x1b[0m\n   \
                  pagesmith render                             \x1b[90m# Render every page\x1b[0m\n   \
                  pagesmith render navbar --vars session.json  \x1b[90m# Render with runtime vars\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site root directory (defaults to an upward search from the current directory)
    #[arg(long, short = 's', global = true, env = "PAGESMITH_SITE")]
    pub site: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit a content section
    Edit(EditArgs),

    /// Print a saved document
    Show(ShowArgs),

    /// Render pages to HTML
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
