//! In-place structural rewrites of a [PhyloTree].
//!
//! * [PhyloTree::remove_redundant_nodes] contracts nodes with a single child
//! * [PhyloTree::resolve_polytomies] turns every node with more than two
//!   children into a right-leaning binary caterpillar
//!
//! Both keep the root index and the left-to-right order of leaves.

use crate::model::node::{Node, format_branch_length};
use crate::model::tree::{NodeIndex, PhyloTree};
use crate::model::tree_error::TreeError;
use log::{debug, trace};

impl PhyloTree {
    /// Contracts every node that has exactly one child.
    ///
    /// Nodes are processed in post-order, so chains of unary nodes collapse
    /// completely in one pass. For a contracted node:
    /// * its name is replaced by the child's name,
    /// * if it has a branch length, that becomes the sum of its own and the
    ///   child's length (formatted with six decimals); without a branch length
    ///   it stays without one,
    /// * the child's children take the child's place.
    ///
    /// # Returns
    /// * `Ok(&mut Self)` for chaining
    /// * [TreeError::InvalidBranchLength] if a length to be summed is not a
    ///   number; nodes visited before stay contracted
    ///
    /// # Example
    /// ```
    /// use nwkit::parse_newick_str;
    ///
    /// let mut tree = parse_newick_str("((c,d)a:1.0)b:1.0").unwrap();
    /// tree.remove_redundant_nodes().unwrap();
    /// assert_eq!(tree.to_newick(), "(c,d)a:2.000000;");
    /// ```
    pub fn remove_redundant_nodes(&mut self) -> Result<&mut Self, TreeError> {
        let order = self.postorder_traversal();
        let mut num_contracted = 0;

        for index in order {
            if self[index].num_children() != 1 {
                continue;
            }
            let child_index = self[index].children()[0];
            if self[index].has_branch_length() {
                let length =
                    self[index].branch_length_as_f64()? + self[child_index].branch_length_as_f64()?;
                self[index].set_branch_length(format_branch_length(length));
            }

            let mut child = std::mem::take(&mut self[child_index]);
            trace!("Contracting {:?} into {:?}", child.name(), self[index].name());

            let node = &mut self[index];
            node.set_name(child.name());
            *node.children_mut() = std::mem::take(child.children_mut());

            self.release(child_index);
            num_contracted += 1;
        }

        debug!("Removed {num_contracted} redundant node(s)");
        Ok(self)
    }

    /// Resolves every polytomy into binary branching, top-down.
    ///
    /// A node with `k > 2` children keeps its first child; children `2..k`
    /// move, in order, under a new unnamed node without branch length, which
    /// becomes the second child. The new node is resolved in turn, so each
    /// polytomy becomes a right-leaning caterpillar. Applying this twice is
    /// the same as applying it once.
    ///
    /// # Example
    /// ```
    /// use nwkit::parse_newick_str;
    ///
    /// let mut tree = parse_newick_str("(a,b,c,d)e").unwrap();
    /// tree.resolve_polytomies();
    /// assert_eq!(tree.to_newick(), "(a,(b,(c,d)))e;");
    /// assert!(tree.is_binary());
    /// ```
    pub fn resolve_polytomies(&mut self) -> &mut Self {
        let mut stack: Vec<NodeIndex> = vec![self.root_index()];
        let mut num_created = 0;

        while let Some(index) = stack.pop() {
            if self[index].num_children() > 2 {
                let moved = self[index].children_mut().split_off(1);
                trace!(
                    "Resolving polytomy at {:?} with {} children",
                    self[index].name(),
                    moved.len() + 1
                );
                let group = self.allocate(Node::default());
                *self[group].children_mut() = moved;
                self[index].children_mut().push(group);
                num_created += 1;
            }

            stack.extend(self[index].children().iter().rev());
        }

        debug!("Created {num_created} node(s) resolving polytomies");
        self
    }
}
