//! Rule-driven matching engine

pub mod engine;

pub use engine::{Tokenizer, TokenizeError, TokenizerMetrics};
