//! Render command arguments

use clap::Parser;
use std::path::PathBuf;

/// Arguments for render command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Render every page:\n    pagesmith render\n\n\
                  Render one page to a custom directory:\n    pagesmith render landing --out dist\n\n\
                  Render the navbar with runtime session info:\n    \
                  pagesmith render navbar --vars session.json")]
pub struct RenderArgs {
    /// Page to render (landing, footer, login, privacy, terms, navbar,
    /// styles); every page when omitted
    pub page: Option<String>,

    /// JSON file with the auxiliary variable context (membership /
    /// session info) used by the navbar
    #[arg(long, value_name = "FILE")]
    pub vars: Option<PathBuf>,

    /// Output directory (defaults to rendered/ in the site root)
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,
}
