//! Rule variants and character classes
//!
//! The rule set is a closed hierarchy: the engine matches against these four
//! variants and nothing else. Consumers compose them into a `Grammar` rather
//! than implementing matching behavior themselves.

use crate::tokens::TokenKind;

/// Character class predicate for run rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any character at all
    Any,
    /// Unicode whitespace
    Whitespace,
    /// ASCII decimal digits
    Digit,
    /// Alphabetic characters
    Letter,
    /// Alphabetic characters or ASCII digits
    LetterOrDigit,
}

impl CharClass {
    pub fn contains(self, ch: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::Whitespace => ch.is_whitespace(),
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Letter => ch.is_alphabetic(),
            CharClass::LetterOrDigit => ch.is_alphabetic() || ch.is_ascii_digit(),
        }
    }
}

/// One declarative matching rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRule {
    /// Greedy run of characters in a class. The run is fenced by
    /// earlier-declared rules: it neither starts nor continues at a position
    /// where one of them matches, which lets a total class like
    /// [`CharClass::Any`] serve as a catch-all when declared last.
    ClassRun { kind: TokenKind, class: CharClass },

    /// Exact text match
    Literal { kind: TokenKind, text: String },

    /// Delimited span. The token text is the interior with delimiters
    /// stripped and escapes resolved.
    Section {
        kind: TokenKind,
        start: String,
        end: String,
    },

    /// Escape marker for section scanning. Never yields a token.
    Escape { marker: char },
}

impl TokenRule {
    /// The kind this rule emits, if it emits tokens at all
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            TokenRule::ClassRun { kind, .. }
            | TokenRule::Literal { kind, .. }
            | TokenRule::Section { kind, .. } => Some(*kind),
            TokenRule::Escape { .. } => None,
        }
    }

    /// Whether this rule claims the start of the given input suffix.
    ///
    /// Used to fence class runs declared after this rule.
    pub(crate) fn claims(&self, rest: &str) -> bool {
        match self {
            TokenRule::ClassRun { class, .. } => {
                rest.chars().next().map_or(false, |ch| class.contains(ch))
            }
            TokenRule::Literal { text, .. } => rest.starts_with(text.as_str()),
            TokenRule::Section { start, .. } => rest.starts_with(start.as_str()),
            TokenRule::Escape { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_class_membership() {
        assert!(CharClass::Any.contains('\u{0}'));
        assert!(CharClass::Whitespace.contains('\t'));
        assert!(!CharClass::Whitespace.contains('x'));
        assert!(CharClass::Digit.contains('7'));
        assert!(!CharClass::Digit.contains('a'));
        assert!(CharClass::Letter.contains('é'));
        assert!(CharClass::LetterOrDigit.contains('7'));
        assert!(CharClass::LetterOrDigit.contains('z'));
        assert!(!CharClass::LetterOrDigit.contains('-'));
    }

    #[test]
    fn test_rule_kind() {
        let rule = TokenRule::Literal {
            kind: TokenKind::new(4),
            text: ",".to_string(),
        };
        assert_eq!(rule.kind(), Some(TokenKind::new(4)));

        let escape = TokenRule::Escape { marker: '\\' };
        assert_eq!(escape.kind(), None);
    }

    #[test]
    fn test_claims() {
        let literal = TokenRule::Literal {
            kind: TokenKind::new(0),
            text: "\r\n".to_string(),
        };
        assert!(literal.claims("\r\nrest"));
        assert!(!literal.claims("\rrest"));

        let section = TokenRule::Section {
            kind: TokenKind::new(1),
            start: "\"".to_string(),
            end: "\"".to_string(),
        };
        assert!(section.claims("\"quoted\""));
        assert!(!section.claims("plain"));

        let escape = TokenRule::Escape { marker: '\\' };
        assert!(!escape.claims("\\x"));
    }
}
