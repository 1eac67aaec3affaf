//! Error types for the Newick parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while turning characters into a tree.

use thiserror::Error;

/// Default length of context provided by error from parser
pub(crate) const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================$=
/// Error types that can occur during Newick parsing.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// A `)` without a matching `(` before it.
    #[error("Unbalanced parenthesis - closing ')' without matching '('")]
    UnbalancedParenthesis,
    #[error("IO error - {0}")]
    IoError(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and following characters).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at position {position}{}", format_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn format_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} chars): {}", context.chars().count(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type, the character position and
    /// the input it occurred in.
    pub fn at(kind: ParsingErrorType, position: usize, input: &[char]) -> Self {
        let context = input
            .iter()
            .skip(position)
            .take(DEFAULT_CONTEXT_LENGTH)
            .collect();
        Self {
            kind,
            position,
            context,
        }
    }

    /// Convenience constructor for UnbalancedParenthesis
    pub fn unbalanced_parenthesis(position: usize, input: &[char]) -> Self {
        Self::at(ParsingErrorType::UnbalancedParenthesis, position, input)
    }

    /// Create a ParsingError without parser context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position (in characters) where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        Self::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
