//! Box-drawing rendering of a tree, left to right.
//!
//! Each leaf gets its own row; an inner node's label is attached at the
//! vertical middle of its children's rows and connected to them with corner,
//! tee and crossing glyphs. For `((x,y)a,b,cc)c`:
//! ```text
//!         ┌x
//!     ┌a──┤
//!     │   └y
//! ─c──┤
//!     ├b
//!     └cc
//! ```
//! Labels are padded with `─` to the longest label of the rendered
//! subtree, so all children of a node start in the same column. Glyphs
//! depend only on names and tree shape, never on branch lengths.

use crate::model::{NodeIndex, PhyloTree};

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
const FIRST_CORNER: &str = "┌";
const LAST_CORNER: &str = "└";
const TEE_LEFT: &str = "┤";
const TEE_RIGHT: &str = "├";
const CROSSING: &str = "┼";

/// Renders the whole tree, see [ascii_art_of].
///
/// # Example
/// ```
/// use nwkit::newick::parse_str;
/// use nwkit::render::ascii_art;
///
/// let tree = parse_str("(a,b)cc").unwrap();
/// assert_eq!(ascii_art(&tree), ["    ┌a", "─cc─┤", "    └b"]);
/// ```
pub fn ascii_art(tree: &PhyloTree) -> Vec<String> {
    ascii_art_of(tree, tree.root_index())
}

/// Renders the subtree rooted at `index` as lines of box-drawing text.
///
/// The label width is the longest label (in characters) within the subtree.
pub fn ascii_art_of(tree: &PhyloTree, index: NodeIndex) -> Vec<String> {
    let max_len = tree
        .post_order_iter_from(index)
        .map(|(_, node)| node.label_width())
        .max()
        .unwrap_or(0);
    render(tree, index, HORIZONTAL, max_len)
}

/// Renders the subtree at `index` whose incoming edge is drawn as `connector`.
fn render(tree: &PhyloTree, index: NodeIndex, connector: &str, max_len: usize) -> Vec<String> {
    let node = &tree[index];
    if node.is_leaf() {
        return remove_spacers(vec![format!("{connector}{}", node.name())]);
    }

    let pad = " ".repeat(max_len + 2);
    let pad_minus_1 = " ".repeat(max_len + 1);

    // Lines of all children, separated by a pipe line
    let num_children = node.num_children();
    let mut block: Vec<String> = Vec::new();
    for (i, &child) in node.children().iter().enumerate() {
        let child_connector = if num_children == 1 {
            HORIZONTAL
        } else if i == 0 {
            FIRST_CORNER
        } else if i == num_children - 1 {
            LAST_CORNER
        } else {
            HORIZONTAL
        };
        if i > 0 {
            block.push(VERTICAL.to_string());
        }
        block.extend(render(tree, child, child_connector, max_len));
    }

    // Rows of the first child (lo), the last child (hi) and where to attach (mid)
    let (mut lo, mut hi, mut mid) = (0, 0, 0);
    for (i, line) in block.iter().enumerate() {
        if line.starts_with(FIRST_CORNER) {
            lo = i;
        } else if line.starts_with(LAST_CORNER) {
            hi = i;
            break;
        } else if line.starts_with(HORIZONTAL) {
            // only child
            mid = i;
        }
    }
    if hi != 0 {
        mid = lo + (hi - lo) / 2;
    }

    let pad_first = format!("{pad}{FIRST_CORNER}");
    let pad_last = format!("{pad}{LAST_CORNER}");
    let label = format!(
        "{connector}{}{}{HORIZONTAL}",
        node.name(),
        HORIZONTAL.repeat(max_len.saturating_sub(node.label_width()))
    );

    let mut lines = Vec::with_capacity(block.len());
    for (i, mut line) in block.into_iter().enumerate() {
        let mut prefix = pad.clone();

        if i == mid {
            prefix = label.clone();
            if hi != 0 && line.starts_with(HORIZONTAL) {
                // middle one of an odd number of children
                line.replace_range(..HORIZONTAL.len(), CROSSING);
            } else if line.starts_with(VERTICAL) {
                line.replace_range(..VERTICAL.len(), TEE_LEFT);
            } else if line.starts_with(&pad_last) || line.starts_with(&pad_first) {
                line.remove(0);
                prefix.push_str(TEE_LEFT);
            }
        } else if (connector == LAST_CORNER && i < mid) || (connector == FIRST_CORNER && i > mid) {
            // between this node's row and its sibling
            prefix = format!("{VERTICAL}{pad_minus_1}");
        } else if i > lo && i < hi && line.starts_with(HORIZONTAL) {
            // an interior child
            prefix = format!("{pad}{TEE_RIGHT}");
            line.replace_range(..HORIZONTAL.len(), "");
        } else if i > lo && i < hi && !line.starts_with(VERTICAL) && !line.is_empty() {
            prefix = format!("{pad}{VERTICAL}");
            line.remove(0);
        }

        lines.push(prefix + &line);
    }

    remove_spacers(lines)
}

/// Drops lines that only consist of spaces and one or two pipes.
///
/// More pipes cannot accumulate, since every level is compacted.
fn remove_spacers(mut lines: Vec<String>) -> Vec<String> {
    lines.retain(|line| {
        let content: String = line.chars().filter(|&c| c != ' ').collect();
        content != VERTICAL && content != "││"
    });
    lines
}

// ============================================================================
// Convenience methods on the tree (pub)
// ============================================================================
impl PhyloTree {
    /// Convenience method to render this tree as ASCII art, see [ascii_art].
    pub fn ascii_art(&self) -> Vec<String> {
        ascii_art(self)
    }

    /// Convenience method to render a subtree as ASCII art, see [ascii_art_of].
    pub fn ascii_art_of(&self, index: NodeIndex) -> Vec<String> {
        ascii_art_of(self, index)
    }
}
