//! Show command arguments

use clap::Parser;

/// Arguments for show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Document to print (landing or auth); both when omitted
    #[arg(long)]
    pub doc: Option<String>,
}
