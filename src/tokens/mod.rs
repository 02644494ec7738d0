//! Token types and the token-list algebra

pub mod token;
pub mod token_list;

pub use token::{Token, TokenKind};
pub use token_list::{TokenList, TokenListError, TokenListResult};
