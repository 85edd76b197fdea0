//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A parameter as returned by the parameter store.
///
/// Only `name` drives tree construction; `kind` and `version` are carried
/// along for the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRecord {
    /// Fully-qualified hierarchy path, e.g. `/Servers/Prod/DbHost`
    pub name: String,
    /// Store type, e.g. `String`, `StringList`, `SecureString`
    pub kind: String,
    /// Parameter version as reported by the store
    pub version: i64,
}

impl ParameterRecord {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, version: i64) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version,
        }
    }

    pub fn meta(&self) -> ParameterMeta {
        ParameterMeta {
            kind: self.kind.clone(),
            version: self.version,
        }
    }
}

/// Metadata attached to the leaf node of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMeta {
    pub kind: String,
    pub version: i64,
}

impl fmt::Display for ParameterMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.kind, self.version)
    }
}

/// How nodes are identified (and therefore deduplicated) while building a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIdentity {
    /// Full path from root: `/X/Name` and `/Y/Z/Name` are different nodes.
    #[default]
    Path,
    /// Bare segment name: equal names anywhere in the hierarchy share one node.
    Name,
}

impl NodeIdentity {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeIdentity::Path => "path",
            NodeIdentity::Name => "name",
        }
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeIdentity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" => Ok(NodeIdentity::Path),
            "name" => Ok(NodeIdentity::Name),
            other => Err(DomainError::UnknownIdentity(other.to_string())),
        }
    }
}
