//! The tokenizer: cursor loop, longest-match selection, section scanning
//!
//! At every position each rule in the grammar is evaluated in declaration
//! order; the longest match wins and ties go to the earliest-declared rule.
//! Every character must be consumed by some rule. Tokenization is pure per
//! call, so one tokenizer can serve many inputs and threads.

use crate::config::constants::compile_time::tokenizer::*;
use crate::config::runtime::TokenizerPreferences;
use crate::logging::codes::{self, Code};
use crate::rules::{Grammar, TokenRule};
use crate::tokens::{Token, TokenKind, TokenList};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Tokenization errors. All are fatal: no partial token list is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("Unterminated section: no closing '{end}' for the section opened at line {line}, column {column}")]
    UnterminatedSection { end: String, line: u32, column: u32 },

    #[error("No rule matched character '{character}' at line {line}, column {column}")]
    NoMatchingRule {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize },

    #[error("Section too large: {length} characters (max {MAX_SECTION_LENGTH})")]
    SectionTooLarge { length: usize },

    #[error("Input too large: {length} bytes (max {MAX_INPUT_LENGTH})")]
    InputTooLarge { length: usize },
}

impl TokenizeError {
    /// Map this error to its logging code
    pub fn error_code(&self) -> Code {
        match self {
            TokenizeError::UnterminatedSection { .. } => codes::tokenizer::UNTERMINATED_SECTION,
            TokenizeError::NoMatchingRule { .. } => codes::tokenizer::NO_MATCHING_RULE,
            TokenizeError::TooManyTokens { .. } => codes::tokenizer::TOO_MANY_TOKENS,
            TokenizeError::SectionTooLarge { .. } => codes::tokenizer::SECTION_TOO_LARGE,
            TokenizeError::InputTooLarge { .. } => codes::tokenizer::INPUT_TOO_LARGE,
        }
    }
}

/// Per-call tokenization metrics
#[derive(Debug, Clone, Default)]
pub struct TokenizerMetrics {
    pub total_tokens: usize,
    pub class_run_tokens: usize,
    pub literal_tokens: usize,
    pub section_tokens: usize,
    pub max_section_length: usize,
    /// Rule index to match count, populated when rule usage tracking is on
    pub rule_usage: HashMap<usize, usize>,
}

/// One winning match at a position
struct RuleMatch {
    rule_index: usize,
    kind: TokenKind,
    /// Bytes of input consumed, delimiters and escapes included
    consumed: usize,
    /// Resolved token text
    text: String,
}

/// Rule-driven tokenizer over an immutable grammar.
pub struct Tokenizer {
    grammar: Grammar,
    preferences: TokenizerPreferences,
}

impl Tokenizer {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            preferences: TokenizerPreferences::default(),
        }
    }

    pub fn with_preferences(grammar: Grammar, preferences: TokenizerPreferences) -> Self {
        Self {
            grammar,
            preferences,
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Tokenize the whole input into a token list.
    ///
    /// Fatal on the first position no rule matches, on an unterminated
    /// section, and on any limit violation.
    pub fn tokenize(&self, text: &str) -> Result<TokenList, TokenizeError> {
        self.tokenize_with_metrics(text).map(|(tokens, _)| tokens)
    }

    /// Tokenize and return the per-call metrics alongside the token list.
    ///
    /// Metric detail follows the tokenizer preferences: per-variant counts
    /// need `collect_detailed_metrics` and the rule usage map needs
    /// `track_rule_usage`.
    pub fn tokenize_with_metrics(
        &self,
        text: &str,
    ) -> Result<(TokenList, TokenizerMetrics), TokenizeError> {
        log_debug!("Starting tokenization",
            "input_len" => text.len(),
            "rule_count" => self.grammar.len()
        );

        if text.len() > MAX_INPUT_LENGTH {
            let error = TokenizeError::InputTooLarge { length: text.len() };
            self.log_failure(&error, Position::start());
            return Err(error);
        }

        let mut tokens = Vec::new();
        let mut metrics = TokenizerMetrics::default();
        let mut pos = Position::start();

        while pos.offset < text.len() {
            if tokens.len() >= MAX_TOKEN_COUNT {
                let error = TokenizeError::TooManyTokens {
                    count: tokens.len() + 1,
                };
                self.log_failure(&error, pos);
                return Err(error);
            }

            match self.match_at(text, pos) {
                Ok(Some(matched)) => {
                    let raw = &text[pos.offset..pos.offset + matched.consumed];
                    let end = pos.advance_str(raw);
                    let span = Span::new(pos, end);

                    self.record_match(&mut metrics, &matched);
                    tokens.push(Token::new(matched.kind, matched.text, span));
                    pos = end;
                }
                Ok(None) => {
                    let character = text[pos.offset..].chars().next().unwrap_or('\u{FFFD}');
                    let error = TokenizeError::NoMatchingRule {
                        character,
                        line: pos.line,
                        column: pos.column,
                    };
                    self.log_failure(&error, pos);
                    return Err(error);
                }
                Err(error) => {
                    self.log_failure(&error, pos);
                    return Err(error);
                }
            }
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "token_count" => metrics.total_tokens,
            "section_tokens" => metrics.section_tokens,
            "max_section_length" => metrics.max_section_length
        );

        Ok((TokenList::new(tokens), metrics))
    }

    /// Evaluate every rule at the position and pick the winner.
    ///
    /// Longest consumed length wins; the earliest-declared rule keeps a tie
    /// because later candidates must strictly beat the current best.
    fn match_at(&self, text: &str, pos: Position) -> Result<Option<RuleMatch>, TokenizeError> {
        let rest = &text[pos.offset..];
        let mut best: Option<RuleMatch> = None;

        for (index, rule) in self.grammar.rules().iter().enumerate() {
            let candidate = match rule {
                TokenRule::ClassRun { kind, class } => {
                    self.match_class_run(index, *kind, *class, text, pos.offset)
                }
                TokenRule::Literal { kind, text: literal } => {
                    if rest.starts_with(literal.as_str()) {
                        Some(RuleMatch {
                            rule_index: index,
                            kind: *kind,
                            consumed: literal.len(),
                            text: literal.clone(),
                        })
                    } else {
                        None
                    }
                }
                TokenRule::Section { kind, start, end } => {
                    self.match_section(index, *kind, start, end, rest, pos)?
                }
                TokenRule::Escape { .. } => None,
            };

            if let Some(candidate) = candidate {
                let improves = best
                    .as_ref()
                    .map_or(true, |current| candidate.consumed > current.consumed);
                if improves {
                    best = Some(candidate);
                }
            }
        }

        Ok(best)
    }

    /// Match a greedy class run, fenced by earlier-declared rules.
    ///
    /// The run neither starts nor continues at a position an earlier rule
    /// claims; that fencing is what lets a total class act as a catch-all.
    fn match_class_run(
        &self,
        index: usize,
        kind: TokenKind,
        class: crate::rules::CharClass,
        text: &str,
        offset: usize,
    ) -> Option<RuleMatch> {
        let earlier = &self.grammar.rules()[..index];
        let mut end = offset;

        for (byte_index, ch) in text[offset..].char_indices() {
            let at = offset + byte_index;
            if !class.contains(ch) {
                break;
            }
            if earlier.iter().any(|rule| rule.claims(&text[at..])) {
                break;
            }
            end = at + ch.len_utf8();
        }

        if end > offset {
            Some(RuleMatch {
                rule_index: index,
                kind,
                consumed: end - offset,
                text: text[offset..end].to_string(),
            })
        } else {
            None
        }
    }

    /// Scan a delimited section starting at `rest`.
    ///
    /// Escape markers are checked before the end delimiter, so an escaped
    /// delimiter stays in the interior. The returned text is the unescaped
    /// interior; consumed bytes cover both delimiters and all escape markers.
    fn match_section(
        &self,
        index: usize,
        kind: TokenKind,
        start: &str,
        end_delim: &str,
        rest: &str,
        pos: Position,
    ) -> Result<Option<RuleMatch>, TokenizeError> {
        if !rest.starts_with(start) {
            return Ok(None);
        }

        let unterminated = || TokenizeError::UnterminatedSection {
            end: end_delim.to_string(),
            line: pos.line,
            column: pos.column,
        };

        let mut interior = String::new();
        let mut cursor = start.len();

        loop {
            let remaining = &rest[cursor..];
            let ch = match remaining.chars().next() {
                Some(ch) => ch,
                None => return Err(unterminated()),
            };

            if self.grammar.is_escape(ch) {
                cursor += ch.len_utf8();
                match rest[cursor..].chars().next() {
                    Some(escaped) => {
                        interior.push(escaped);
                        cursor += escaped.len_utf8();
                    }
                    None => return Err(unterminated()),
                }
            } else if remaining.starts_with(end_delim) {
                cursor += end_delim.len();
                return Ok(Some(RuleMatch {
                    rule_index: index,
                    kind,
                    consumed: cursor,
                    text: interior,
                }));
            } else {
                interior.push(ch);
                cursor += ch.len_utf8();
            }

            if interior.len() > MAX_SECTION_LENGTH {
                return Err(TokenizeError::SectionTooLarge {
                    length: interior.len(),
                });
            }
        }
    }

    fn record_match(&self, metrics: &mut TokenizerMetrics, matched: &RuleMatch) {
        metrics.total_tokens += 1;

        if self.preferences.collect_detailed_metrics {
            match &self.grammar.rules()[matched.rule_index] {
                TokenRule::ClassRun { .. } => metrics.class_run_tokens += 1,
                TokenRule::Literal { .. } => metrics.literal_tokens += 1,
                TokenRule::Section { .. } => {
                    metrics.section_tokens += 1;
                    let length = matched.text.chars().count();
                    if length > metrics.max_section_length {
                        metrics.max_section_length = length;
                    }
                    if self.preferences.log_section_statistics {
                        log_debug!("Section token scanned", "length" => length);
                    }
                }
                TokenRule::Escape { .. } => {}
            }
        }

        if self.preferences.track_rule_usage {
            *metrics.rule_usage.entry(matched.rule_index).or_insert(0) += 1;
        }
    }

    fn log_failure(&self, error: &TokenizeError, pos: Position) {
        if self.preferences.include_position_in_errors {
            log_error!(error.error_code(), "Tokenization failed",
                "error" => error,
                "line" => pos.line,
                "column" => pos.column
            );
        } else {
            log_error!(error.error_code(), "Tokenization failed", "error" => error);
        }
    }
}
