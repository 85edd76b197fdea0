//! Conversion of a `ParameterTree` into printable `termtree` trees.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{ParameterTree, TreeNode};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append `[Type vN]` to nodes that carry parameter metadata
    pub details: bool,
}

pub trait ToTermTree {
    /// One `termtree::Tree` per root, children ordered by label.
    fn to_term_trees(&self, options: &RenderOptions) -> Vec<Tree<String>>;
}

impl ToTermTree for ParameterTree {
    #[instrument(level = "debug", skip(self))]
    fn to_term_trees(&self, options: &RenderOptions) -> Vec<Tree<String>> {
        fn label(node: &TreeNode, options: &RenderOptions) -> String {
            match (&node.data.meta, options.details) {
                (Some(meta), true) => format!("{} [{}]", node.data.label, meta),
                _ => node.data.label.clone(),
            }
        }

        fn sorted<'a>(tree: &'a ParameterTree, indices: &[Index]) -> Vec<(Index, &'a TreeNode)> {
            let mut nodes: Vec<_> = indices
                .iter()
                .filter_map(|&idx| tree.get_node(idx).map(|node| (idx, node)))
                .collect();
            // stable: equal labels keep insertion order
            nodes.sort_by(|a, b| a.1.data.label.cmp(&b.1.data.label));
            nodes
        }

        fn build(tree: &ParameterTree, node: &TreeNode, options: &RenderOptions) -> Tree<String> {
            let leaves: Vec<_> = sorted(tree, &node.children)
                .into_iter()
                .map(|(_, child)| build(tree, child, options))
                .collect();
            Tree::new(label(node, options)).with_leaves(leaves)
        }

        sorted(self, self.roots())
            .into_iter()
            .map(|(_, root)| build(self, root, options))
            .collect()
    }
}

/// Render the whole tree as text, one block per root.
pub fn render(tree: &ParameterTree, options: &RenderOptions) -> String {
    tree.to_term_trees(options)
        .iter()
        .map(|t| t.to_string())
        .collect()
}
