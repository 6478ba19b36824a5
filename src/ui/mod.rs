//! Terminal UI helpers
//!
//! - [`display`]: console-styled output for documents and sections
//! - [`prompts`]: inquire adapters for the widget contract

pub mod display;
pub mod prompts;
