//! Parameter tree service
//!
//! Collects parameters from the store and builds the segment hierarchy.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::services::PathCollector;
use crate::application::ApplicationResult;
use crate::domain::{build_tree_from_records, NodeIdentity, ParameterTree};
use crate::infrastructure::traits::{ParameterQuery, ParameterStore};

/// Service building a `ParameterTree` for a hierarchy path.
pub struct TreeService {
    collector: PathCollector,
    identity: NodeIdentity,
}

impl TreeService {
    pub fn new(store: Arc<dyn ParameterStore>, identity: NodeIdentity) -> Self {
        Self {
            collector: PathCollector::new(store),
            identity,
        }
    }

    /// Query the store and build the tree. An empty result yields an empty tree.
    #[instrument(level = "debug", skip(self), fields(path = %query.path))]
    pub fn build(&self, query: &ParameterQuery) -> ApplicationResult<ParameterTree> {
        let records = self.collector.collect(query)?;
        let tree = build_tree_from_records(&records, self.identity);
        info!(
            "{} parameters -> {} nodes in {} root(s), identity: {}",
            records.len(),
            tree.len(),
            tree.roots().len(),
            self.identity
        );
        Ok(tree)
    }
}
