//! Immutable rule grammar and its builder

use super::definition::{CharClass, TokenRule};
use crate::log_warning;
use crate::tokens::TokenKind;

/// An ordered, immutable rule set.
///
/// Declaration order is priority order: when two rules match the same length
/// at the same position, the earlier-declared rule wins, and class runs are
/// fenced by every rule declared before them. Grammars are cheap to share
/// across threads and tokenizer calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<TokenRule>,
    escapes: Vec<char>,
}

impl Grammar {
    pub fn rules(&self) -> &[TokenRule] {
        &self.rules
    }

    /// Whether the character is a declared escape marker
    pub fn is_escape(&self, ch: char) -> bool {
        self.escapes.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for [`Grammar`]. Rules take priority in the order they are added;
/// declare specific rules first and any catch-all class run last.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    rules: Vec<TokenRule>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a character-class run rule
    pub fn with_class_run(mut self, kind: TokenKind, class: CharClass) -> Self {
        self.rules.push(TokenRule::ClassRun { kind, class });
        self
    }

    /// Add an exact-text rule
    pub fn with_literal(mut self, kind: TokenKind, text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "Literal rule text must not be empty");
        self.rules.push(TokenRule::Literal { kind, text });
        self
    }

    /// Add a delimited-section rule
    pub fn with_section(
        mut self,
        kind: TokenKind,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        let start = start.into();
        let end = end.into();
        debug_assert!(
            !start.is_empty() && !end.is_empty(),
            "Section delimiters must not be empty"
        );
        self.rules.push(TokenRule::Section { kind, start, end });
        self
    }

    /// Add an escape marker for section scanning
    pub fn with_escape(mut self, marker: char) -> Self {
        self.rules.push(TokenRule::Escape { marker });
        self
    }

    pub fn build(self) -> Grammar {
        let has_catch_all = self
            .rules
            .iter()
            .any(|rule| matches!(rule, TokenRule::ClassRun { class: CharClass::Any, .. }));
        if !has_catch_all {
            log_warning!("Grammar has no catch-all rule, unmatched input will be an error",
                "rule_count" => self.rules.len()
            );
        }

        let escapes = self
            .rules
            .iter()
            .filter_map(|rule| match rule {
                TokenRule::Escape { marker } => Some(*marker),
                _ => None,
            })
            .collect();

        Grammar {
            rules: self.rules,
            escapes,
        }
    }
}
