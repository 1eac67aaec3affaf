//! Errors raised by operations on a built tree.

use thiserror::Error;

/// Errors that can occur when reading or rewriting a [PhyloTree](crate::model::PhyloTree).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// A non-empty branch length that does not parse as a number.
    #[error("Branch length {value:?} of node {name:?} is not a number")]
    InvalidBranchLength { name: String, value: String },
}
