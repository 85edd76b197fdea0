//! Tree builder turning flat parameter names into a segment hierarchy.

use generational_arena::Index;
use tracing::{debug, trace};

use crate::domain::arena::{InsertOutcome, ParameterTree};
use crate::domain::entities::{NodeIdentity, ParameterRecord};
use crate::domain::path::decompose;

/// Incrementally builds a `ParameterTree`, one parameter path at a time.
///
/// Segments already in the tree are skipped, so shared prefixes become
/// shared ancestors. Segments whose parent cannot be resolved are skipped
/// and counted, the build never fails.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: ParameterTree,
    skipped: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(NodeIdentity::default())
    }
}

impl TreeBuilder {
    pub fn new(identity: NodeIdentity) -> Self {
        Self {
            tree: ParameterTree::new(identity),
            skipped: 0,
        }
    }

    /// Insert every segment of `path`. Returns the leaf node if the last
    /// segment is in the tree afterwards.
    pub fn add_path(&mut self, path: &str) -> Option<Index> {
        let mut leaf = None;
        for segment in decompose(path) {
            leaf = match self.tree.insert(&segment) {
                Ok(InsertOutcome::Inserted(idx)) => Some(idx),
                Ok(InsertOutcome::AlreadyPresent(idx)) => {
                    trace!("already present: {}", segment.key(self.tree.identity()));
                    Some(idx)
                }
                Err(e) => {
                    debug!("skipping segment of {}: {}", path, e);
                    self.skipped += 1;
                    None
                }
            };
        }
        leaf
    }

    /// Insert a parameter and attach its type and version to the leaf node.
    pub fn add_record(&mut self, record: &ParameterRecord) {
        if let Some(leaf) = self.add_path(&record.name) {
            self.tree.attach_meta(leaf, record.meta());
        }
    }

    /// Number of segments skipped because their parent was missing.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> ParameterTree {
        self.tree
    }
}

/// Build a tree from parameter names.
pub fn build_tree<I, S>(paths: I, identity: NodeIdentity) -> ParameterTree
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TreeBuilder::new(identity);
    for path in paths {
        builder.add_path(path.as_ref());
    }
    builder.finish()
}

/// Build a tree from parameter records, keeping leaf metadata.
pub fn build_tree_from_records(records: &[ParameterRecord], identity: NodeIdentity) -> ParameterTree {
    let mut builder = TreeBuilder::new(identity);
    for record in records {
        builder.add_record(record);
    }
    debug!(
        "built tree: {} parameters, {} nodes, {} skipped",
        records.len(),
        builder.tree.len(),
        builder.skipped
    );
    builder.finish()
}
