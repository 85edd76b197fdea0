//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the hierarchy model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid hierarchy path '{path}': {reason}")]
    InvalidHierarchyPath { path: String, reason: String },

    #[error("parent node not found for '{key}': {parent}")]
    MissingParent { key: String, parent: String },

    #[error("unknown node identity '{0}' (expected 'path' or 'name')")]
    UnknownIdentity(String),
}
