//! Ready-made consumer parsers built on the tokenizer

pub mod config_string;
pub mod rows;

pub use config_string::{ConfigParseError, ConfigStringParser};
pub use rows::RowParser;
