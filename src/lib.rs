//! Rule-driven string tokenizer with a token-list shaping algebra.
//!
//! A [`Grammar`] declares what counts as a token (class runs, literals,
//! delimited sections, escape markers); the [`Tokenizer`] turns input text
//! into a [`TokenList`]; the list's split/trim/consume operations shape
//! tokens into whatever structure a consumer needs. Two ready-made consumers
//! ship with the crate: [`RowParser`] for separator-delimited rows and
//! [`ConfigStringParser`] for `key=value` configuration strings.

// Internal modules
pub mod config;
#[macro_use]
pub mod logging;
pub mod parsers;
pub mod rules;
pub mod tokenizer;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use parsers::{ConfigParseError, ConfigStringParser, RowParser};
pub use rules::{CharClass, Grammar, GrammarBuilder, TokenRule};
pub use tokenizer::{TokenizeError, Tokenizer, TokenizerMetrics};
pub use tokens::{Token, TokenKind, TokenList, TokenListError};
pub use utils::{Position, Span, Spanned};
