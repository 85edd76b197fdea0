use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{NodeIdentity, ParameterMeta};
use crate::domain::error::DomainError;
use crate::domain::path::Segment;

/// Data payload for tree nodes representing hierarchy segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Identity key (full path or bare name, depending on the tree's identity mode)
    pub key: String,
    /// Display label, always the bare segment name
    pub label: String,
    /// Parameter metadata if this node is the leaf of a returned parameter
    pub meta: Option<ParameterMeta>,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Segment data for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Result of an idempotent insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(Index),
    AlreadyPresent(Index),
}

impl InsertOutcome {
    pub fn index(&self) -> Index {
        match self {
            InsertOutcome::Inserted(idx) | InsertOutcome::AlreadyPresent(idx) => *idx,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }
}

/// Arena-based forest of parameter path segments.
///
/// Uses generational arena for memory-safe node references and a key index
/// for O(1) identity lookups. Shared path prefixes collapse into shared
/// ancestors; a tree may have several roots.
#[derive(Debug)]
pub struct ParameterTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Root nodes in insertion order
    roots: Vec<Index>,
    /// Identity key -> node
    keys: HashMap<String, Index>,
    identity: NodeIdentity,
}

impl Default for ParameterTree {
    fn default() -> Self {
        Self::new(NodeIdentity::default())
    }
}

impl ParameterTree {
    pub fn new(identity: NodeIdentity) -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            keys: HashMap::new(),
            identity,
        }
    }

    pub fn identity(&self) -> NodeIdentity {
        self.identity
    }

    /// Insert a segment unless a node with its identity key already exists.
    ///
    /// Fails with `MissingParent` if the segment names a parent key that is
    /// not in the tree; nothing is inserted in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, segment: &Segment) -> Result<InsertOutcome, DomainError> {
        let key = segment.key(self.identity);
        if let Some(&idx) = self.keys.get(key) {
            return Ok(InsertOutcome::AlreadyPresent(idx));
        }

        let parent = match segment.parent_key(self.identity) {
            Some(parent_key) => Some(*self.keys.get(parent_key).ok_or_else(|| {
                DomainError::MissingParent {
                    key: key.to_string(),
                    parent: parent_key.to_string(),
                }
            })?),
            None => None,
        };

        let data = NodeData {
            key: key.to_string(),
            label: segment.name.clone(),
            meta: None,
        };
        let idx = self.insert_node(data, parent);
        Ok(InsertOutcome::Inserted(idx))
    }

    fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let key = data.key.clone();
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.roots.push(node_idx);
        }
        self.keys.insert(key, node_idx);

        node_idx
    }

    /// Attach metadata to a node that does not carry any yet.
    ///
    /// Returns false if the node is unknown or already has metadata.
    pub fn attach_meta(&mut self, idx: Index, meta: ParameterMeta) -> bool {
        match self.arena.get_mut(idx) {
            Some(node) if node.data.meta.is_none() => {
                node.data.meta = Some(meta);
                true
            }
            _ => false,
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Look up a node by identity key.
    pub fn find(&self, key: &str) -> Option<(Index, &TreeNode)> {
        let idx = *self.keys.get(key)?;
        self.arena.get(idx).map(|node| (idx, node))
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Labels of the children of the node with the given key, in insertion order.
    pub fn children_labels(&self, key: &str) -> Vec<&str> {
        self.find(key)
            .map(|(_, node)| {
                node.children
                    .iter()
                    .filter_map(|&child| self.get_node(child))
                    .map(|child| child.data.label.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Labels of the root nodes, in insertion order.
    pub fn root_labels(&self) -> Vec<&str> {
        self.roots
            .iter()
            .filter_map(|&idx| self.get_node(idx))
            .map(|node| node.data.label.as_str())
            .collect()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of levels of the deepest branch, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.roots
            .iter()
            .map(|&root| self.calculate_depth(root))
            .max()
            .unwrap_or(0)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the identity keys of all leaf nodes (nodes with no children).
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.key.clone())
            .collect()
    }
}

/// Pre-order, left-to-right traversal over all roots.
pub struct TreeIterator<'a> {
    tree: &'a ParameterTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a ParameterTree) -> Self {
        let stack = tree.roots.iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
