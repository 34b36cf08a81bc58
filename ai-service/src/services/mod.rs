pub mod analyzer;

pub use analyzer::{PlaceholderAnalyzer, TextAnalyzer};
