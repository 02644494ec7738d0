//! Declarative token rules and grammar assembly

pub mod definition;
pub mod grammar;

pub use definition::{CharClass, TokenRule};
pub use grammar::{Grammar, GrammarBuilder};
