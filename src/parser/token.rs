//! Level-aware tokenizer for Newick strings.
//!
//! [tokenize] turns raw characters into a flat sequence of [Token]s, each
//! annotated with the nesting depth it occurs at. No grammar is applied here;
//! the structure is recovered later from the depths alone
//! (see [NewickString](crate::parser::NewickString)).
//!
//! Depth conventions:
//! * `(` has the depth of the scope it opens *from outside*, i.e. of the enclosing scope
//! * `)` has the depth of the scope it closes, again as seen from outside
//! * Characters, `,` and `:` have the depth of the scope containing them
//! * `;` is dropped

use crate::parser::parsing_error::ParsingError;
use log::{debug, warn};

// =#========================================================================#=
// TOKEN
// =#========================================================================$=
/// Kind of a [Token].
///
/// Only `PlainChar`, `OpenParen`, `CloseParen`, `Comma`, and `Colon` are
/// emitted by [tokenize]; the remaining kinds are reserved for quoted labels,
/// comments, whitespace and terminal markers, which are currently not
/// distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    PlainChar,
    QuotedWord,
    Comment,
    Whitespace,
    OpenParen,
    CloseParen,
    Comma,
    Colon,
    Semicolon,
}

/// A single character of a Newick string together with its kind and nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    character: char,
    kind: TokenKind,
    depth: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(character: char, kind: TokenKind, depth: usize) -> Self {
        Self {
            character,
            kind,
            depth,
        }
    }

    /// Returns the character of this token.
    pub fn character(&self) -> char {
        self.character
    }

    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the nesting depth of this token.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================$=
/// Tokenizes the given characters in a single left-to-right pass.
///
/// # Arguments
/// * `chars` - Characters of one Newick string (trailing `;` optional)
///
/// # Returns
/// * `Ok(Vec<Token>)` - Tokens in input order, `;` omitted
/// * [ParsingError] - If a `)` appears without matching `(`, which would
///   take the depth below zero
///
/// Parentheses left open at the end of the input are not an error; the
/// resulting tree shape is then unspecified.
///
/// # Example
/// ```
/// use nwkit::parser::token::{tokenize, TokenKind};
///
/// let chars: Vec<char> = "(a,b)c;".chars().collect();
/// let tokens = tokenize(&chars).unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0].kind(), TokenKind::OpenParen);
/// assert_eq!(tokens[0].depth(), 0);
/// assert_eq!(tokens[1].depth(), 1);
/// assert_eq!(tokens[4].kind(), TokenKind::CloseParen);
/// assert_eq!(tokens[4].depth(), 0);
/// ```
pub fn tokenize(chars: &[char]) -> Result<Vec<Token>, ParsingError> {
    let mut tokens = Vec::with_capacity(chars.len());
    let mut depth: usize = 0;

    for (position, &character) in chars.iter().enumerate() {
        match character {
            ';' => {}
            ',' => tokens.push(Token::new(character, TokenKind::Comma, depth)),
            ':' => tokens.push(Token::new(character, TokenKind::Colon, depth)),
            '(' => {
                tokens.push(Token::new(character, TokenKind::OpenParen, depth));
                depth += 1;
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParsingError::unbalanced_parenthesis(position, chars))?;
                tokens.push(Token::new(character, TokenKind::CloseParen, depth));
            }
            _ => tokens.push(Token::new(character, TokenKind::PlainChar, depth)),
        }
    }

    if depth > 0 {
        warn!("Newick string ends with {depth} unclosed parenthesis/es");
    }
    debug!("Tokenized {} characters into {} tokens", chars.len(), tokens.len());

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parsing_error::ParsingErrorType;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_semicolon_dropped() {
        let tokens = tokenize(&chars("a;")).unwrap();
        assert_eq!(tokens, vec![Token::new('a', TokenKind::PlainChar, 0)]);
    }

    #[test]
    fn test_paren_depths() {
        let tokens = tokenize(&chars("((a))")).unwrap();
        let depths: Vec<usize> = tokens.iter().map(Token::depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_comma_and_colon_depths() {
        let tokens = tokenize(&chars("(a:1,b)")).unwrap();
        assert_eq!(tokens[2], Token::new(':', TokenKind::Colon, 1));
        assert_eq!(tokens[4], Token::new(',', TokenKind::Comma, 1));
    }

    #[test]
    fn test_unmatched_close_paren() {
        let err = tokenize(&chars("(a))b")).unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::UnbalancedParenthesis);
        assert_eq!(err.position(), 3);
        assert_eq!(err.context(), ")b");
    }

    #[test]
    fn test_unclosed_paren_tolerated() {
        let tokens = tokenize(&chars("(a,b")).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].depth(), 1);
    }
}
