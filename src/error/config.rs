//! Configuration document errors

use super::PagesmithError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PagesmithError {
    PagesmithError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PagesmithError {
    PagesmithError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PagesmithError {
    PagesmithError::ConfigWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown document error
pub fn unknown_document(name: impl Into<String>) -> PagesmithError {
    PagesmithError::UnknownDocument { name: name.into() }
}
