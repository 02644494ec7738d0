//! Token list and its shaping algebra
//!
//! A `TokenList` is the tokenizer's output and the working unit of every
//! consumer: split on delimiters, trim the edges, then consume the tokens the
//! grammar of the moment expects.

use super::token::{Token, TokenKind};
use crate::utils::Span;
use std::collections::VecDeque;

/// Result type for fallible token-list operations
pub type TokenListResult<T> = Result<T, TokenListError>;

/// Errors raised by `consume`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenListError {
    #[error("Unexpected token: expected {expected}, found {found} '{text}' at {span}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        text: String,
        span: Span,
    },

    #[error("Unexpected end of tokens: expected {expected}")]
    UnexpectedEnd { expected: TokenKind },
}

/// An ordered sequence of tokens supporting split/trim/consume operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: VecDeque<Token>,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Peek at the front token without consuming it
    pub fn first(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Partition on every token of the given kind.
    ///
    /// Delimiter tokens are discarded. N delimiters always yield exactly N+1
    /// groups; adjacent delimiters and delimiters at the edges produce empty
    /// groups.
    pub fn split(self, kind: TokenKind) -> Vec<TokenList> {
        let mut groups = Vec::new();
        let mut current = TokenList::default();

        for token in self.tokens {
            if token.kind() == kind {
                groups.push(std::mem::take(&mut current));
            } else {
                current.tokens.push_back(token);
            }
        }

        groups.push(current);
        groups
    }

    /// Remove tokens of the given kinds from both edges.
    ///
    /// Interior tokens are untouched even when their kind is in the set.
    pub fn trim(&mut self, kinds: &[TokenKind]) {
        while self
            .tokens
            .front()
            .map_or(false, |t| kinds.contains(&t.kind()))
        {
            self.tokens.pop_front();
        }
        while self
            .tokens
            .back()
            .map_or(false, |t| kinds.contains(&t.kind()))
        {
            self.tokens.pop_back();
        }
    }

    /// Remove and return the front token, which must be of the expected kind.
    ///
    /// On mismatch the list is left unchanged.
    pub fn consume(&mut self, expected: TokenKind) -> TokenListResult<Token> {
        match self.tokens.pop_front() {
            Some(token) if token.kind() == expected => Ok(token),
            Some(token) => {
                let error = TokenListError::UnexpectedToken {
                    expected,
                    found: token.kind(),
                    text: token.text().to_string(),
                    span: token.span(),
                };
                self.tokens.push_front(token);
                Err(error)
            }
            None => Err(TokenListError::UnexpectedEnd { expected }),
        }
    }

    /// Remove front tokens while their kind is in the set, concatenating
    /// their texts. Zero matches yield an empty string.
    pub fn consume_all(&mut self, kinds: &[TokenKind]) -> String {
        let mut text = String::new();
        while self
            .tokens
            .front()
            .map_or(false, |t| kinds.contains(&t.kind()))
        {
            if let Some(token) = self.tokens.pop_front() {
                text.push_str(token.text());
            }
        }
        text
    }

    /// Join the texts of all remaining tokens, for diagnostics
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text()).collect()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::collections::vec_deque::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
