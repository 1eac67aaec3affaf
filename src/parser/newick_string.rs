//! Token sequence of one subtree and the tree builder on top of it.
//!
//! A [NewickString] holds the tokens belonging to one subtree together with
//! the depth at which that subtree's own content sits (`min_level`). From it:
//! * [NewickString::descendants] splits off the token sequences of the
//!   immediate children, using only depth and comma position,
//! * [NewickString::to_node] recovers the subtree root's own name and branch
//!   length from its trailing tokens,
//! * [NewickString::to_tree] builds the whole subtree as [PhyloTree].

use crate::model::{Node, NodeIndex, PhyloTree};
use crate::parser::parsing_error::ParsingError;
use crate::parser::token::{Token, TokenKind, tokenize};
use log::debug;

// =#========================================================================#=
// NEWICK STRING
// =#========================================================================$=
/// Tokens of one subtree and the depth of its own content.
///
/// # Example
/// ```
/// use nwkit::parser::NewickString;
///
/// let ns = NewickString::from_chars(&['(', 'a', ',', 'b', ')', 'c']).unwrap();
/// assert_eq!(ns.min_level(), 0);
///
/// let descendants = ns.descendants();
/// assert_eq!(descendants.len(), 2);
/// assert_eq!(descendants[0].min_level(), 1);
/// assert_eq!(ns.to_node().name(), "c");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NewickString {
    tokens: Vec<Token>,
    min_level: usize,
}

// ============================================================================
// Construction, Getters (pub)
// ============================================================================
impl NewickString {
    /// Tokenizes raw characters of a complete Newick string (`min_level` 0).
    ///
    /// # Returns
    /// * `Ok(NewickString)` - tokens of the whole tree
    /// * [ParsingError] - if the parentheses are unbalanced
    ///   (see [tokenize])
    pub fn from_chars(chars: &[char]) -> Result<Self, ParsingError> {
        Ok(Self {
            tokens: tokenize(chars)?,
            min_level: 0,
        })
    }

    /// Creates a [NewickString] from a token subsequence, taking the depth of
    /// its first token as `min_level` (0 if empty).
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let min_level = tokens.first().map_or(0, Token::depth);
        Self { tokens, min_level }
    }

    /// Returns the tokens of this subtree.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the depth at which this subtree's own content sits.
    pub fn min_level(&self) -> usize {
        self.min_level
    }
}

impl std::str::FromStr for NewickString {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        Self::from_chars(&chars)
    }
}

// ============================================================================
// Segmenting and building (pub)
// ============================================================================
impl NewickString {
    /// Splits the tokens into the token sequences of the immediate children,
    /// in order.
    ///
    /// A comma exactly one level below `min_level` separates two children.
    /// Tokens at `min_level` (the closing parenthesis, name and branch
    /// length of this subtree's root) belong to no child. A subtree with a
    /// single child yields one sequence, a leaf yields none.
    pub fn descendants(&self) -> Vec<NewickString> {
        let mut descendants = Vec::new();
        let mut current = Vec::new();
        let mut comma_seen = false;

        for &token in &self.tokens {
            if token.kind() == TokenKind::Comma && token.depth() == self.min_level + 1 {
                comma_seen = true;
                descendants.push(NewickString::from_tokens(std::mem::take(&mut current)));
            } else if token.depth() > self.min_level {
                current.push(token);
            }
        }
        if comma_seen || !current.is_empty() {
            descendants.push(NewickString::from_tokens(current));
        }

        descendants
    }

    /// Returns the childless [Node] for the root of this subtree, with the
    /// name and branch length taken from the trailing tokens at `min_level`.
    ///
    /// Everything before the first `:` is the name, everything after it the
    /// branch length (further colons are dropped).
    pub fn to_node(&self) -> Node {
        let mut label: Vec<&Token> = self
            .tokens
            .iter()
            .rev()
            .take_while(|token| token.depth() == self.min_level)
            .filter(|token| token.kind() != TokenKind::CloseParen)
            .collect();
        label.reverse();

        let mut name = String::new();
        let mut branch_length = String::new();
        let mut in_name = true;
        for token in label {
            if token.kind() == TokenKind::Colon {
                in_name = false;
            } else if in_name {
                name.push(token.character());
            } else {
                branch_length.push(token.character());
            }
        }

        Node::new(name, branch_length)
    }

    /// Builds the tree described by this [NewickString].
    ///
    /// The builder works top-down with an explicit work list; children are
    /// attached in the order of [descendants](Self::descendants).
    pub fn to_tree(&self) -> PhyloTree {
        let capacity = self
            .tokens
            .iter()
            .filter(|t| matches!(t.kind(), TokenKind::Comma | TokenKind::OpenParen))
            .count()
            + 1;
        let mut tree = PhyloTree::with_capacity(self.to_node(), capacity);

        let mut pending: Vec<(NewickString, NodeIndex)> = self
            .descendants()
            .into_iter()
            .map(|descendant| (descendant, tree.root_index()))
            .collect();
        pending.reverse();

        while let Some((newick_string, parent)) = pending.pop() {
            let index = tree.add_child(parent, newick_string.to_node());
            let descendants = newick_string.descendants();
            pending.extend(descendants.into_iter().rev().map(|d| (d, index)));
        }

        debug!(
            "Built tree with {} nodes from {} tokens",
            tree.num_nodes(),
            self.tokens.len()
        );
        tree
    }
}
