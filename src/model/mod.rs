//! Data model for phylogenetic trees with arbitrary branching.
//!
//! # Tree representation
//! Trees are represented by [PhyloTree], which uses the arena pattern to store
//! [Node]s referenced by [NodeIndex]. Each node keeps its label and branch
//! length as text, plus the ordered indices of its children.
//!
//! # Rewrites
//! Trees can be rewritten in place (see [rewrite]):
//! * [PhyloTree::remove_redundant_nodes] - contract nodes with one child
//! * [PhyloTree::resolve_polytomies] - make the tree binary
//!
//! Node indices are stable during rewrites; the root index never changes.

pub mod node;
pub mod rewrite;
pub mod tree;
pub mod tree_error;

pub use node::Node;
pub use tree::NodeIndex;
pub use tree::PhyloTree;
pub use tree::{PostOrderIter, PreOrderIter};
pub use tree_error::TreeError;
