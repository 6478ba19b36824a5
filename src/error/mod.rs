//! Error types and handling for Pagesmith
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration document errors
//! - [`fs`]: File system errors
//! - [`template`]: Template errors
//! - [`form`]: Form / editing errors

#![allow(dead_code)]

// Declare submodules
pub mod config;
pub mod form;
pub mod fs;
pub mod template;

// Re-export convenience constructors from submodules (used in tests only)
#[allow(unused_imports)]
pub use config::{
    parse_failed as config_parse_failed, read_failed as config_read_failed, unknown_document,
    write_failed as config_write_failed,
};
#[allow(unused_imports)]
pub use form::{invalid_field, unknown_list, unknown_section};
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use template::{
    malformed as template_malformed, not_found as template_not_found, unknown_page,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Pagesmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum PagesmithError {
    // Site errors
    #[error("Site root not found from: {path}")]
    #[diagnostic(
        code(pagesmith::site::not_found),
        help("Run inside a site directory (one containing template/config/), or pass --site")
    )]
    SiteNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(pagesmith::config::parse_failed),
        help("Fix the YAML syntax, or delete the file to start from defaults")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(pagesmith::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to write configuration file: {path}")]
    #[diagnostic(code(pagesmith::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    #[error("Unknown document: {name}")]
    #[diagnostic(
        code(pagesmith::config::unknown_document),
        help("Valid documents: landing, auth")
    )]
    UnknownDocument { name: String },

    // Form errors
    #[error("Unknown section: {name}")]
    #[diagnostic(
        code(pagesmith::form::unknown_section),
        help("Run 'pagesmith edit' without arguments to pick a section interactively")
    )]
    UnknownSection { name: String },

    #[error("Unknown list: {name}")]
    #[diagnostic(code(pagesmith::form::unknown_list))]
    UnknownList { name: String },

    #[error("Invalid value for field '{field}': {reason}")]
    #[diagnostic(code(pagesmith::form::invalid_field))]
    InvalidField { field: String, reason: String },

    // Template errors
    #[error("Template not found: {path}")]
    #[diagnostic(
        code(pagesmith::template::not_found),
        help("Templates live under template/html/ in the site root")
    )]
    TemplateNotFound { path: String },

    #[error("Malformed template: {reason}")]
    #[diagnostic(code(pagesmith::template::malformed))]
    TemplateMalformed { reason: String },

    #[error("Unknown page: {name}")]
    #[diagnostic(
        code(pagesmith::template::unknown_page),
        help("Run 'pagesmith render' without arguments to render every page")
    )]
    UnknownPage { name: String },

    // Auxiliary context errors
    #[error("Failed to parse variables file: {path}")]
    #[diagnostic(
        code(pagesmith::vars::parse_failed),
        help("The --vars file must be a JSON object of string values")
    )]
    VarsParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(pagesmith::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(pagesmith::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pagesmith::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PagesmithError {
    fn from(err: std::io::Error) -> Self {
        PagesmithError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PagesmithError {
    fn from(err: serde_yaml::Error) -> Self {
        PagesmithError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PagesmithError {
    fn from(err: serde_json::Error) -> Self {
        PagesmithError::VarsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for PagesmithError {
    fn from(err: inquire::InquireError) -> Self {
        PagesmithError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PagesmithError>;
