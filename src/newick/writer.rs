//! Newick string writing.

use crate::model::{NodeIndex, PhyloTree};

/// Extra buffer in Newick string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Returns the Newick representation of the tree with closing semicolon.
///
/// A leaf is written as `name[:length]`, an inner node as
/// `(child_1,...,child_k)name[:length]`; absent names and lengths stay
/// absent.
///
/// # Example
/// ```
/// use nwkit::newick::{parse_str, to_newick};
///
/// let tree = parse_str("(a:1.1)b").unwrap();
/// assert_eq!(to_newick(&tree), "(a:1.1)b;");
/// ```
pub fn to_newick(tree: &PhyloTree) -> String {
    subtree_to_newick(tree, tree.root_index())
}

/// Returns the Newick representation of the subtree rooted at `index`,
/// closed with a semicolon like a full tree.
pub fn subtree_to_newick(tree: &PhyloTree, index: NodeIndex) -> String {
    // Recursive helper for building the Newick string
    fn build_newick(tree: &PhyloTree, newick: &mut String, index: NodeIndex) {
        let node = &tree[index];

        if !node.is_leaf() {
            newick.push('(');
            for (i, &child) in node.children().iter().enumerate() {
                if i > 0 {
                    newick.push(',');
                }
                build_newick(tree, newick, child);
            }
            newick.push(')');
        }

        newick.push_str(node.name());
        if node.has_branch_length() {
            newick.push(':');
            newick.push_str(node.branch_length());
        }
    }

    let mut newick = String::with_capacity(estimate_newick_len(tree, index));
    build_newick(tree, &mut newick, index);
    newick.push(';');
    newick
}

/// Estimates the length of the Newick string of the subtree at `index`.
fn estimate_newick_len(tree: &PhyloTree, index: NodeIndex) -> usize {
    tree.post_order_iter_from(index)
        .map(|(_, node)| {
            // label, ':' + length, and ',' or parentheses
            node.name().len() + node.branch_length().len() + 2
        })
        .sum::<usize>()
        + BUFFER_CHARS
}

// ============================================================================
// Convenience method on the tree (pub)
// ============================================================================
impl PhyloTree {
    /// Convenience method to convert this tree to a Newick string,
    /// see [to_newick].
    pub fn to_newick(&self) -> String {
        to_newick(self)
    }

    /// Convenience method to convert a subtree to a Newick string,
    /// see [subtree_to_newick].
    pub fn subtree_to_newick(&self, index: NodeIndex) -> String {
        subtree_to_newick(self, index)
    }
}
