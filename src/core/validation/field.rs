//! Field-scoped validation errors
//!
//! Ordered, append-only error list with a fixed taxonomy. Every entry points
//! at the part of the declared configuration it concerns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A referenced resource does not exist
    NotFound,
    /// A resource exists but its state does not satisfy a requirement
    Invalid,
    /// The probe failed; nothing can be said about the resource
    Internal,
}

impl ErrorKind {
    /// Whether this kind aborts the check that produced it
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorKind::NotFound | ErrorKind::Internal)
    }

    fn label(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not found",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::Internal => "Internal error",
        }
    }
}

/// Dotted/bracketed locator into the declared configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    path: String,
}

impl FieldPath {
    pub fn new(root: &str) -> Self {
        Self {
            path: root.to_string(),
        }
    }

    /// Append a named child: `a` -> `a.b`
    pub fn child(&self, name: &str) -> Self {
        Self {
            path: format!("{}.{}", self.path, name),
        }
    }

    /// Mark "any element" of a list: `a` -> `a[]`
    pub fn each(&self) -> Self {
        Self {
            path: format!("{}[]", self.path),
        }
    }

    /// Address one list element: `a` -> `a[3]`
    pub fn index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_value: Option<String>,
    pub detail: String,
}

impl ValidationError {
    pub fn not_found(path: &FieldPath, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            field: path.to_string(),
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }

    pub fn invalid(path: &FieldPath, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Invalid,
            field: path.to_string(),
            bad_value: Some(value.into()),
            detail: detail.into(),
        }
    }

    pub fn internal(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            field: path.to_string(),
            bad_value: None,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind.label())?;
        if let Some(value) = &self.bad_value {
            write!(f, ": {:?}", value)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered collector of [`ValidationError`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorList {
    errors: Vec<ValidationError>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn not_found(&mut self, path: &FieldPath, value: impl Into<String>, detail: impl Into<String>) {
        self.push(ValidationError::not_found(path, value, detail));
    }

    pub fn invalid(&mut self, path: &FieldPath, value: impl Into<String>, detail: impl Into<String>) {
        self.push(ValidationError::invalid(path, value, detail));
    }

    pub fn internal(&mut self, path: &FieldPath, detail: impl Into<String>) {
        self.push(ValidationError::internal(path, detail));
    }

    /// Append all entries of another list, preserving their order
    pub fn extend(&mut self, other: ErrorList) {
        self.errors.extend(other.errors);
    }

    /// Whether any entry is a `NotFound` or `Internal` abort
    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(|e| e.kind.is_fatal())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl IntoIterator for ErrorList {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
