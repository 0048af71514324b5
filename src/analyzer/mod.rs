pub mod builder;
mod error;
mod lexicon;
mod model;
mod utils;

pub use builder::SentimentAnalyzerBuilder;
pub use error::AnalyzerError;
pub use lexicon::{BuiltinLexicon, Lexicon};
pub use model::{Sentiment, SentimentAnalyzer};

/// Information about the current state and configuration of an analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerInfo {
    /// Number of words in the positive lexicon
    pub positive_words: usize,
    /// Number of words in the negative lexicon
    pub negative_words: usize,
}
