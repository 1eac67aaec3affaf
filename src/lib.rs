//! Nwkit is a library to parse, rewrite, and draw phylogenetic trees given
//! as Newick strings.
//!
//! Core functionality provided:
//! - Newick: Parse a single Newick string (or file holding one) into a
//!   [PhyloTree] with arbitrary branching, and write it back.
//! - Rewrites (in place):
//!   - [PhyloTree::remove_redundant_nodes]: contract nodes with exactly one
//!     child, summing branch lengths.
//!   - [PhyloTree::resolve_polytomies]: make the tree binary by grouping all
//!     but the first child of a polytomy under a new node.
//! - ASCII art: draw a tree left to right with box-drawing characters, see
//!   [crate::render].
//! - Tree model: arena pattern, so only node indices are handed out,
//!   no direct node references are stored. See [crate::model].
//!
//! Limitations:
//! - Labels and branch lengths are taken verbatim;
//!   no quoting, comments, or annotations
//! - Malformed input is not diagnosed, except for unbalanced `)`
//!
//! # Example
//! ```
//! use nwkit::parse_newick_str;
//!
//! let mut tree = parse_newick_str("((a,b,c,d)e)f;").unwrap();
//! tree.remove_redundant_nodes().unwrap().resolve_polytomies();
//! assert_eq!(tree.to_newick(), "(a,(b,(c,d)))e;");
//!
//! for line in tree.ascii_art() {
//!     println!("{line}");
//! }
//! ```

pub mod model;
pub mod newick;
pub mod parser;
pub mod render;

use crate::model::PhyloTree;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Newick API
// ============================================================================
/// Parse a Newick string, returning a [PhyloTree].
///
/// See [`newick::parse_str`] for full documentation of this convenience function.
pub fn parse_newick_str<S: AsRef<str>>(newick: S) -> Result<PhyloTree, ParsingError> {
    newick::parse_str(newick)
}

/// Parse a file containing one Newick string, returning a [PhyloTree].
///
/// See [`newick::parse_file`] for full documentation of this convenience function.
pub fn parse_newick_file<P: AsRef<Path>>(path: P) -> Result<PhyloTree, ParsingError> {
    newick::parse_file(path)
}
