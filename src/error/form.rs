//! Form and editing errors

use super::PagesmithError;

/// Creates an unknown section error
pub fn unknown_section(name: impl Into<String>) -> PagesmithError {
    PagesmithError::UnknownSection { name: name.into() }
}

/// Creates an unknown list error
pub fn unknown_list(name: impl Into<String>) -> PagesmithError {
    PagesmithError::UnknownList { name: name.into() }
}

/// Creates an invalid field error
pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> PagesmithError {
    PagesmithError::InvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}
