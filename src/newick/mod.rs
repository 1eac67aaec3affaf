//! Newick format parsing and writing.
//!
//! # Quick API
//! * [`parse_str`] - parses a single Newick string into a [PhyloTree]
//! * [`parse_chars`] - same, from an already decoded character buffer
//! * [`parse_file`] - reads a file holding one Newick string and parses it
//! * [`to_newick`] / [`PhyloTree::to_newick`](crate::model::PhyloTree::to_newick) - serializes a tree
//!
//! # Format
//! The Newick format has the following simple grammar:
//! * `tree ::= vertex [';']`
//! * `vertex ::= leaf | internal_vertex`
//! * `internal_vertex ::= '(' vertex {',' vertex} ')' [name] [':' length]`
//! * `leaf ::= name [':' length]`
//!
//! Any number of children is allowed, as are unary nodes. Names and branch
//! lengths are taken verbatim as character runs, so whitespace is part of
//! a label. Comments, quoting and other extended features are not
//! supported, and malformed input is not diagnosed except for a `)`
//! without matching `(`.

pub mod writer;

pub use writer::{subtree_to_newick, to_newick};

use crate::model::PhyloTree;
use crate::parser::{NewickString, ParsingError};
use log::debug;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string into a [PhyloTree].
///
/// # Arguments
/// * `newick` - The Newick string; the terminating `;` is optional
///
/// # Returns
/// * [PhyloTree] - Tree parsed from the string
/// * [ParsingError] - If parentheses close more scopes than were opened
///
/// An empty string yields a tree consisting of a single unnamed root.
///
/// # Example
/// ```
/// use nwkit::newick::parse_str;
///
/// let tree = parse_str("((Fratercula_arctica,Fratercula_corniculata),Fratercula_cirrhata);")?;
/// assert_eq!(tree.num_leaves(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<PhyloTree, ParsingError> {
    let chars: Vec<char> = newick.as_ref().chars().collect();
    parse_chars(&chars)
}

/// Parses a Newick tree from a character buffer.
///
/// See [`parse_str`].
pub fn parse_chars(chars: &[char]) -> Result<PhyloTree, ParsingError> {
    Ok(NewickString::from_chars(chars)?.to_tree())
}

/// Reads the file at `path` into memory and parses the single Newick tree
/// it contains. Leading and trailing whitespace (e.g. a final newline) is
/// ignored.
///
/// # Returns
/// * [PhyloTree] - Tree parsed from the file
/// * [ParsingError] - If the file could not be read or is unbalanced
///
/// # Example
/// ```no_run
/// use nwkit::newick::parse_file;
///
/// let tree = parse_file("anseriformes.nwk")?;
/// println!("Parsed tree with {} leaves", tree.num_leaves());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PhyloTree, ParsingError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    debug!(
        "Read {} bytes from {}",
        contents.len(),
        path.as_ref().display()
    );
    parse_str(contents.trim())
}
