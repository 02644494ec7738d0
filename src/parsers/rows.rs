//! Delimited-row parser
//!
//! Parses separator-delimited rows (CSV-like input) with double-quoted
//! fields and backslash escapes. Built entirely on the tokenizer and the
//! token-list algebra: tokenize once, split on newlines, split each row on
//! the separator, trim and assemble each field.

use crate::logging::codes;
use crate::log_success;
use crate::rules::{CharClass, GrammarBuilder};
use crate::tokenizer::{TokenizeError, Tokenizer};
use crate::tokens::TokenKind;

/// Kind tags for the row grammar
pub const DATA: TokenKind = TokenKind::new(0);
pub const WHITESPACE: TokenKind = TokenKind::new(1);
pub const NEWLINE: TokenKind = TokenKind::new(2);
pub const SEPARATOR: TokenKind = TokenKind::new(3);
pub const QUOTED: TokenKind = TokenKind::new(4);

/// Parser for separator-delimited rows.
pub struct RowParser {
    tokenizer: Tokenizer,
}

impl RowParser {
    /// Comma-separated parser
    pub fn new() -> Self {
        Self::with_separator(',')
    }

    /// Parser with a custom field separator.
    ///
    /// Newline and separator literals come before the whitespace run so that
    /// a whitespace-class separator such as tab keeps its own kind; CRLF is
    /// declared before bare LF so longest-match picks it up as one newline.
    /// The catch-all data run is declared last.
    pub fn with_separator(separator: char) -> Self {
        let grammar = GrammarBuilder::new()
            .with_literal(NEWLINE, "\r\n")
            .with_literal(NEWLINE, "\n")
            .with_literal(SEPARATOR, separator.to_string())
            .with_class_run(WHITESPACE, CharClass::Whitespace)
            .with_section(QUOTED, "\"", "\"")
            .with_escape('\\')
            .with_class_run(DATA, CharClass::Any)
            .build();

        Self {
            tokenizer: Tokenizer::new(grammar),
        }
    }

    /// Parse the input into rows of fields.
    ///
    /// Fields are whitespace-trimmed at the edges; interior whitespace and
    /// quoted sections are kept. Empty input is one row with one empty field,
    /// and a trailing newline yields a final empty row, both following from
    /// the N+1 split contract.
    pub fn parse_rows(&self, text: &str) -> Result<Vec<Vec<String>>, TokenizeError> {
        let tokens = self.tokenizer.tokenize(text)?;

        let mut rows = Vec::new();
        for row in tokens.split(NEWLINE) {
            let mut fields = Vec::new();
            for mut field in row.split(SEPARATOR) {
                field.trim(&[WHITESPACE]);
                fields.push(field.consume_all(&[DATA, WHITESPACE, QUOTED]));
            }
            rows.push(fields);
        }

        log_success!(codes::success::ROWS_PARSED, "Row parsing completed",
            "row_count" => rows.len()
        );

        Ok(rows)
    }

    /// Convenience for single-row input: parse and return the first row
    pub fn parse_row(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(self
            .parse_rows(text)?
            .into_iter()
            .next()
            .unwrap_or_default())
    }
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_mixed_fields() {
        let parser = RowParser::new();
        let fields = parser
            .parse_row(", 1 ,2 , abc, \"hello world\" ,3,\"hello\\\" again\", 1  2 3 ")
            .unwrap();
        assert_eq!(
            fields,
            vec![
                "",
                "1",
                "2",
                "abc",
                "hello world",
                "3",
                "hello\" again",
                "1  2 3",
            ]
        );
    }

    #[test]
    fn test_field_count_is_separator_count_plus_one() {
        let parser = RowParser::new();
        let fields = parser.parse_row(",,a,,").unwrap();
        assert_eq!(fields, vec!["", "", "a", "", ""]);
    }

    #[test]
    fn test_no_separator_yields_single_trimmed_field() {
        let parser = RowParser::new();
        let fields = parser.parse_row("  plain value  ").unwrap();
        assert_eq!(fields, vec!["plain value"]);
    }

    #[test]
    fn test_quoted_separator_stays_in_field() {
        let parser = RowParser::new();
        let fields = parser.parse_row("a,\"b,c\",d").unwrap();
        assert_eq!(fields, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_adjacent_quoted_and_plain_segments_fuse() {
        let parser = RowParser::new();
        let fields = parser.parse_row("abc\"def\"ghi").unwrap();
        assert_eq!(fields, vec!["abcdefghi"]);
    }

    #[test]
    fn test_escaped_quote_as_whole_field() {
        let parser = RowParser::new();
        let fields = parser.parse_row("\"\\\"\"").unwrap();
        assert_eq!(fields, vec!["\""]);
    }

    #[test]
    fn test_multiple_rows() {
        let parser = RowParser::new();
        let rows = parser.parse_rows("a,b\nc,d").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_crlf_rows() {
        let parser = RowParser::new();
        let rows = parser.parse_rows("a,b\r\nc,d").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_empty_input_is_one_empty_field() {
        let parser = RowParser::new();
        let rows = parser.parse_rows("").unwrap();
        assert_eq!(rows, vec![vec![String::new()]]);
    }

    #[test]
    fn test_trailing_newline_yields_final_empty_row() {
        let parser = RowParser::new();
        let rows = parser.parse_rows("a,b\n").unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "b".to_string()], vec![String::new()]]);
    }

    #[test]
    fn test_tab_separator_keeps_its_own_kind() {
        let parser = RowParser::with_separator('\t');
        let fields = parser.parse_row("a\tb\tc").unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tab_separator_with_surrounding_spaces() {
        let parser = RowParser::with_separator('\t');
        let fields = parser.parse_row(" a \tb\t c ").unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_custom_separator() {
        let parser = RowParser::with_separator(';');
        let fields = parser.parse_row("a;b,c;d").unwrap();
        assert_eq!(fields, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_unterminated_quote_is_fatal() {
        let parser = RowParser::new();
        assert_matches!(
            parser.parse_row("a,\"bc"),
            Err(TokenizeError::UnterminatedSection { .. })
        );
    }

    #[test]
    fn test_parse_row_returns_first_row() {
        let parser = RowParser::new();
        let fields = parser.parse_row("a,b\nc,d").unwrap();
        assert_eq!(fields, vec!["a", "b"]);
    }
}
