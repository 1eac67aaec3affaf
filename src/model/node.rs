//! Tree node type.
//!
//! A [Node] stores a label, the textual branch length of its incoming edge,
//! and the ordered [NodeIndex]es of its children within the owning
//! [PhyloTree](crate::model::PhyloTree).

use crate::model::tree::NodeIndex;
use crate::model::tree_error::TreeError;

/// Decimal digits used when a branch length is computed rather than copied.
pub(crate) const BRANCH_LENGTH_DECIMALS: usize = 6;

/// A node of a [PhyloTree](crate::model::PhyloTree).
///
/// Both `name` and `branch_length` are kept as text exactly as read from the
/// Newick string; an empty `branch_length` means no length was given.
/// Children are ordered as in the source string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    name: String,
    branch_length: String,
    children: Vec<NodeIndex>,
}

impl Node {
    /// Creates a new childless node.
    pub fn new(name: impl Into<String>, branch_length: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branch_length: branch_length.into(),
            children: Vec::new(),
        }
    }

    /// Returns the label of this node (possibly empty).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the label of this node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the branch length as written in the source (possibly empty).
    pub fn branch_length(&self) -> &str {
        &self.branch_length
    }

    /// Sets the textual branch length; pass an empty string to remove it.
    pub fn set_branch_length(&mut self, branch_length: impl Into<String>) {
        self.branch_length = branch_length.into();
    }

    /// Returns whether a branch length is set.
    pub fn has_branch_length(&self) -> bool {
        !self.branch_length.is_empty()
    }

    /// Returns the branch length as number.
    ///
    /// # Returns
    /// * `Ok(0.0)` - if no branch length is set
    /// * `Ok(value)` - the parsed branch length
    /// * [TreeError::InvalidBranchLength] - if the text is not a number
    ///
    /// # Example
    /// ```
    /// use nwkit::model::Node;
    ///
    /// assert_eq!(Node::new("a", "1.0").branch_length_as_f64().unwrap(), 1.0);
    /// assert_eq!(Node::new("a", "").branch_length_as_f64().unwrap(), 0.0);
    /// assert!(Node::new("a", "one").branch_length_as_f64().is_err());
    /// ```
    pub fn branch_length_as_f64(&self) -> Result<f64, TreeError> {
        if self.branch_length.is_empty() {
            return Ok(0.0);
        }
        self.branch_length
            .trim()
            .parse::<f64>()
            .map_err(|_| TreeError::InvalidBranchLength {
                name: self.name.clone(),
                value: self.branch_length.clone(),
            })
    }

    /// Returns the indices of the children of this node, in order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns the number of children of this node.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeIndex> {
        &mut self.children
    }

    /// Length of the label in characters, as used for rendering.
    pub(crate) fn label_width(&self) -> usize {
        self.name.chars().count()
    }
}

/// Formats a computed branch length with [BRANCH_LENGTH_DECIMALS] decimals.
pub(crate) fn format_branch_length(value: f64) -> String {
    format!("{:.*}", BRANCH_LENGTH_DECIMALS, value)
}
