//! Form binding for content documents
//!
//! This module contains the schema-driven editing engine:
//! - [`schema`]: field schemas and the schema-to-widget contract
//! - [`sections`]: declarative section definitions for both documents
//! - [`list`]: session-scoped dynamic list state
//! - [`binder`]: widget seeding and section reassembly
//! - [`session`]: one editing session over the persisted documents

pub mod binder;
pub mod list;
pub mod schema;
pub mod sections;
pub mod session;

// Re-export commonly used types
pub use list::{ListRegistry, ListState};
pub use schema::{FieldSchema, FieldValues, RecordField, Widget, WidgetKind};
pub use sections::{ItemKind, ListSchema, PolicySection, SectionSchema};
pub use session::EditSession;
