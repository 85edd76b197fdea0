//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod path;

pub use arena::{InsertOutcome, NodeData, ParameterTree, TreeNode};
pub use builder::{build_tree, build_tree_from_records, TreeBuilder};
pub use entities::*;
pub use error::DomainError;
pub use path::{decompose, HierarchyPath, Segment, PATH_SEPARATOR};
