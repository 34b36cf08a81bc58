pub mod checker;

pub use checker::{GrammarChecker, PlaceholderGrammarChecker};
