//! Template errors

use super::PagesmithError;

/// Creates a template not found error
pub fn not_found(path: impl Into<String>) -> PagesmithError {
    PagesmithError::TemplateNotFound { path: path.into() }
}

/// Creates a malformed template error
pub fn malformed(reason: impl Into<String>) -> PagesmithError {
    PagesmithError::TemplateMalformed {
        reason: reason.into(),
    }
}

/// Creates an unknown page error
pub fn unknown_page(name: impl Into<String>) -> PagesmithError {
    PagesmithError::UnknownPage { name: name.into() }
}
