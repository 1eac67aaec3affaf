//! Level-aware Newick tokenizer, subtree segmenter, and error handling.
//!
//! Parsing goes characters → [token::tokenize] → [NewickString] →
//! [NewickString::to_tree]. No grammar is checked; the tree shape follows
//! from token depths and comma positions alone.

pub mod newick_string;
pub mod parsing_error;
pub mod token;

pub use newick_string::NewickString;
pub use parsing_error::{ParsingError, ParsingErrorType};
pub use token::{Token, TokenKind};
