//! Token and kind tag types

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric kind tag attached to every token.
///
/// The engine never interprets tags; consumers declare their own as `const`
/// items and compare them when shaping token lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenKind(u16);

impl TokenKind {
    pub const fn new(tag: u16) -> Self {
        Self(tag)
    }

    pub const fn tag(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single matched token: kind tag, resolved text, and source span.
///
/// For section tokens the text is the unescaped interior, so the span covers
/// more input bytes than the text holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Consume the token, keeping only its text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_roundtrip() {
        const DATA: TokenKind = TokenKind::new(7);
        assert_eq!(DATA.tag(), 7);
        assert_eq!(DATA, TokenKind::new(7));
        assert_ne!(DATA, TokenKind::new(8));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::new(3), "abc".to_string(), Span::dummy());
        assert_eq!(token.to_string(), "#3 'abc'");
    }

    #[test]
    fn test_into_text() {
        let token = Token::new(TokenKind::new(0), "value".to_string(), Span::dummy());
        assert_eq!(token.into_text(), "value");
    }
}
