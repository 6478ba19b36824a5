//! Pagesmith - landing site content editor
//!
//! A command line tool for editing the YAML content behind a marketing
//! landing page and its auth pages (footer, login, privacy policy,
//! terms of service, navbar), and rendering that content into HTML
//! page fragments.

use clap::Parser;

mod cli;
mod commands;
mod doc;
mod error;
mod form;
mod render;
mod site;
mod store;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Edit(args) => commands::edit::run(cli.site, args),
        Commands::Show(args) => commands::show::run(cli.site, args),
        Commands::Render(args) => commands::render::run(cli.site, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
