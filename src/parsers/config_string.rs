//! Key/value configuration-string parser
//!
//! Parses `key=value` entries joined by a separator, with double-quoted
//! value segments and backslash escapes. Same tokenize-then-shape flow as
//! the row parser, plus per-entry structure enforcement through `consume`.

use crate::logging::codes;
use crate::{log_error, log_success};
use crate::rules::{CharClass, GrammarBuilder};
use crate::tokenizer::{TokenizeError, Tokenizer};
use crate::tokens::{TokenKind, TokenListError};
use std::collections::HashMap;

/// Kind tags for the config grammar
pub const DATA: TokenKind = TokenKind::new(0);
pub const WHITESPACE: TokenKind = TokenKind::new(1);
pub const SEPARATOR: TokenKind = TokenKind::new(2);
pub const EQUALS: TokenKind = TokenKind::new(3);
pub const QUOTED: TokenKind = TokenKind::new(4);

/// Config-string parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("Malformed entry '{entry}': {source}")]
    MalformedEntry {
        entry: String,
        #[source]
        source: TokenListError,
    },
}

/// Parser for separator-joined `key=value` configuration strings.
pub struct ConfigStringParser {
    tokenizer: Tokenizer,
}

impl ConfigStringParser {
    /// Semicolon-separated parser
    pub fn new() -> Self {
        Self::with_separator(";")
    }

    /// Parser with a custom entry separator (may be multi-character).
    ///
    /// The separator and equals literals come before the whitespace run so
    /// that a whitespace-class separator keeps its own kind.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        let grammar = GrammarBuilder::new()
            .with_literal(SEPARATOR, separator)
            .with_literal(EQUALS, "=")
            .with_class_run(WHITESPACE, CharClass::Whitespace)
            .with_section(QUOTED, "\"", "\"")
            .with_escape('\\')
            .with_class_run(DATA, CharClass::Any)
            .build();

        Self {
            tokenizer: Tokenizer::new(grammar),
        }
    }

    /// Parse the input into a key/value map.
    ///
    /// Entries that are empty after whitespace trimming are skipped, so
    /// trailing separators are tolerated. Duplicate keys overwrite: the last
    /// entry wins. Each remaining entry must be key, equals sign, value;
    /// anything else is a malformed entry naming the offending text.
    pub fn parse(&self, text: &str) -> Result<HashMap<String, String>, ConfigParseError> {
        let tokens = self.tokenizer.tokenize(text)?;

        let mut values = HashMap::new();
        for mut entry in tokens.split(SEPARATOR) {
            let raw = entry.text().trim().to_string();
            entry.trim(&[WHITESPACE]);
            if entry.is_empty() {
                continue;
            }

            let key = entry
                .consume(DATA)
                .map_err(|source| malformed(&raw, source))?;
            entry.trim(&[WHITESPACE]);
            entry
                .consume(EQUALS)
                .map_err(|source| malformed(&raw, source))?;
            entry.trim(&[WHITESPACE]);
            let value = entry.consume_all(&[DATA, WHITESPACE, QUOTED]);

            values.insert(key.into_text(), value);
        }

        log_success!(codes::success::CONFIG_PARSED, "Config string parsed",
            "entry_count" => values.len()
        );

        Ok(values)
    }
}

impl Default for ConfigStringParser {
    fn default() -> Self {
        Self::new()
    }
}

fn malformed(raw: &str, source: TokenListError) -> ConfigParseError {
    log_error!(codes::parsers::MALFORMED_ENTRY, "Malformed configuration entry",
        "entry" => raw,
        "cause" => source
    );
    ConfigParseError::MalformedEntry {
        entry: raw.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_basic_entries() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("key1=abc; key2 = def ;key3=ghi").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values["key1"], "abc");
        assert_eq!(values["key2"], "def");
        assert_eq!(values["key3"], "ghi");
    }

    #[test]
    fn test_quoted_value_segments_fuse() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("key1=abc\"def\"ghi").unwrap();
        assert_eq!(values["key1"], "abcdefghi");
    }

    #[test]
    fn test_quoted_separator_stays_in_value() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("a=\"x;y\";b=2").unwrap();
        assert_eq!(values["a"], "x;y");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_value_keeps_interior_whitespace() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("key = a b  c ").unwrap();
        assert_eq!(values["key"], "a b  c");
    }

    #[test]
    fn test_escaped_quote_in_value() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("key=\"say \\\"hi\\\"\"").unwrap();
        assert_eq!(values["key"], "say \"hi\"");
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("a=1;a=2").unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["a"], "2");
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("a=1;; ;b=2;").unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_missing_equals_is_malformed() {
        let parser = ConfigStringParser::new();
        let result = parser.parse("a=1;key;b=2");
        assert_matches!(
            result,
            Err(ConfigParseError::MalformedEntry { entry, source: TokenListError::UnexpectedEnd { .. } })
                if entry == "key"
        );
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let parser = ConfigStringParser::new();
        let result = parser.parse("=1");
        assert_matches!(
            result,
            Err(ConfigParseError::MalformedEntry { entry, .. }) if entry == "=1"
        );
    }

    #[test]
    fn test_unterminated_quote_propagates() {
        let parser = ConfigStringParser::new();
        let result = parser.parse("a=\"abc");
        assert_matches!(
            result,
            Err(ConfigParseError::Tokenize(TokenizeError::UnterminatedSection { .. }))
        );
    }

    #[test]
    fn test_custom_multi_char_separator() {
        let parser = ConfigStringParser::with_separator("&&");
        let values = parser.parse("a=1&&b=2").unwrap();
        assert_eq!(values["a"], "1");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_tab_separator_keeps_its_own_kind() {
        let parser = ConfigStringParser::with_separator("\t");
        let values = parser.parse("a=1\tb=2").unwrap();
        assert_eq!(values["a"], "1");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_empty_value() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("a=;b=2").unwrap();
        assert_eq!(values["a"], "");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_empty_input_is_empty_map() {
        let parser = ConfigStringParser::new();
        let values = parser.parse("").unwrap();
        assert!(values.is_empty());
    }
}
