//! Provides the arena-based tree representation.
//!
//! Provides core data structures for representing phylogenetic trees:
//! * [PhyloTree] - Tree structure using the arena pattern on [Node]s
//! * [NodeIndex] as type used to index nodes in a tree
//! * [PostOrderIter] and [PreOrderIter] as stack-based traversals

use crate::model::node::Node;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A phylogenetic tree with arbitrary branching, represented using the
/// arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex],
/// which stays stable while the tree is rewritten in place.
///
/// # Structure
/// - The root is created with the tree and its index never changes.
/// - Each node index is the child of at most one node; there are no parent
///   references, all traversals go top-down.
/// - Slots of nodes removed by a rewrite are released and reused for nodes
///   created later, so the arena does not grow with repeated rewrites.
///   Indices of removed nodes must not be used afterwards.
///
/// # Construction
/// Usually built by the parser, see [crate::newick::parse_str]. Manually,
/// create the tree from its root and attach children top-down:
/// ```
/// use nwkit::model::{Node, PhyloTree};
///
/// let mut tree = PhyloTree::new(Node::new("root", ""));
/// let root = tree.root_index();
/// let inner = tree.add_child(root, Node::new("inner", "0.5"));
/// tree.add_child(inner, Node::new("A", "1.0"));
/// tree.add_child(inner, Node::new("B", "1.0"));
/// tree.add_child(root, Node::new("C", "1.5"));
///
/// assert_eq!(tree.num_leaves(), 3);
/// assert_eq!(tree.to_newick(), "((A:1.0,B:1.0)inner:0.5,C:1.5)root;");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhyloTree {
    /// Nodes of this tree (arena pattern), including released slots
    nodes: Vec<Node>,

    /// Released slots available for reuse
    free: Vec<NodeIndex>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl PhyloTree {
    /// Creates a new tree consisting only of the given root.
    pub fn new(root: Node) -> Self {
        Self::with_capacity(root, 1)
    }

    /// Creates a new tree consisting only of the given root, reserving space
    /// for `capacity` nodes in total.
    pub fn with_capacity(root: Node, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(root);
        PhyloTree {
            nodes,
            free: Vec::new(),
            root_index: 0,
        }
    }

    /// Adds `node` as new last child of `parent` and returns its index.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds.
    pub fn add_child(&mut self, parent: NodeIndex, node: Node) -> NodeIndex {
        let index = self.allocate(node);
        self.nodes[parent].children_mut().push(index);
        index
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    /// Returns a mutable reference to the root node.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.nodes[self.root_index]
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self[index]
    }

    /// Returns a mutable reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self[index]
    }

    /// Returns references to the children of the node at `index`, in order.
    pub fn children_of(&self, index: NodeIndex) -> impl Iterator<Item = &Node> + '_ {
        self[index].children().iter().map(move |&child| &self.nodes[child])
    }

    /// Returns the number of nodes reachable from the root.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.post_order_iter().filter(|(_, node)| node.is_leaf()).count()
    }

    /// Returns the largest number of children of any node.
    pub fn max_degree(&self) -> usize {
        self.post_order_iter()
            .map(|(_, node)| node.num_children())
            .max()
            .unwrap_or(0)
    }

    /// Returns whether no node has more than two children.
    pub fn is_binary(&self) -> bool {
        self.max_degree() <= 2
    }

    /// Returns the names of all leaves from left to right.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.post_order_iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.name())
            .collect()
    }

    /// Calls `visitor` once for each node in pre-order (parent before children),
    /// passing the node and its depth below the root (root has depth 0).
    ///
    /// # Example
    /// ```
    /// use nwkit::parse_newick_str;
    ///
    /// let mut tree = parse_newick_str("(a:1.1,c)b").unwrap();
    /// tree.visit(|node, depth| {
    ///     let name = format!("{}_{}", node.name(), depth);
    ///     node.set_name(name);
    /// });
    /// assert_eq!(tree.to_newick(), "(a_1:1.1,c_1)b_0;");
    /// ```
    pub fn visit<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Node, usize),
    {
        let mut stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = stack.pop() {
            visitor(&mut self.nodes[index], depth);

            // Push children (last first, so first is visited first)
            let children = self.nodes[index].children();
            stack.extend(children.iter().rev().map(|&child| (child, depth + 1)));
        }
    }
}

// ============================================================================
// Arena management (pub(crate))
// ============================================================================
impl PhyloTree {
    /// Stores `node` in a free slot (or a new one) and returns its index.
    /// The node is not attached to any parent.
    pub(crate) fn allocate(&mut self, node: Node) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Clears the node at `index` and marks its slot for reuse.
    /// Caller must have detached it from its parent before.
    pub(crate) fn release(&mut self, index: NodeIndex) {
        debug_assert_ne!(index, self.root_index, "root must never be released");
        self.nodes[index] = Node::default();
        self.free.push(index);
    }
}

impl std::ops::Index<NodeIndex> for PhyloTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl std::ops::IndexMut<NodeIndex> for PhyloTree {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl PhyloTree {
    /// Returns the node indices of the tree in post-order
    /// (children before parents, left before right).
    ///
    /// The list is computed upfront, so it remains usable while node
    /// contents are mutated.
    ///
    /// # Example
    /// ```
    /// use nwkit::parse_newick_str;
    ///
    /// let tree = parse_newick_str("((5,6)3,2,4)1").unwrap();
    /// let names: Vec<_> = tree
    ///     .postorder_traversal()
    ///     .into_iter()
    ///     .map(|i| tree[i].name())
    ///     .collect();
    /// assert_eq!(names, ["5", "6", "3", "2", "4", "1"]);
    /// ```
    pub fn postorder_traversal(&self) -> Vec<NodeIndex> {
        self.post_order_iter().map(|(index, _)| index).collect()
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self, self.root_index)
    }

    /// Returns an iterator over the subtree rooted at `index` in post-order.
    pub fn post_order_iter_from(&self, index: NodeIndex) -> PostOrderIter<'_> {
        PostOrderIter::new(self, index)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self, self.root_index)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses an explicit stack of `(node, next child to descend into)`
/// frames instead of recursion, so the stack depth is bounded by the tree
/// depth and deep trees cannot overflow the call stack.
pub struct PostOrderIter<'a> {
    tree: &'a PhyloTree,
    stack: Vec<(NodeIndex, usize)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a PhyloTree, start: NodeIndex) -> Self {
        PostOrderIter {
            tree,
            stack: vec![(start, 0)],
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let (index, next_child) = *frame;
            let tree = self.tree;
            let node = &tree.nodes[index];

            match node.children().get(next_child) {
                Some(&child) => {
                    // Descend into next child, come back for its sibling afterwards
                    frame.1 += 1;
                    self.stack.push((child, 0));
                }
                None => {
                    // All children emitted (or leaf)
                    self.stack.pop();
                    return Some((index, node));
                }
            }
        }
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
pub struct PreOrderIter<'a> {
    tree: &'a PhyloTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a PhyloTree, start: NodeIndex) -> Self {
        PreOrderIter {
            tree,
            stack: vec![start],
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (NodeIndex, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[index];

        // Push children onto stack (last first, so first is processed first)
        self.stack.extend(node.children().iter().rev());

        Some((index, node))
    }
}
