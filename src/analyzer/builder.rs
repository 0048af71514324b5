use std::collections::HashSet;
use std::sync::Arc;

use log::info;

use super::error::AnalyzerError;
use super::lexicon::{BuiltinLexicon, Lexicon};
use super::model::SentimentAnalyzer;

/// A builder for constructing a SentimentAnalyzer with a fluent interface.
#[derive(Default, Debug)]
pub struct SentimentAnalyzerBuilder {
    positive: Option<HashSet<String>>,
    negative: Option<HashSet<String>>,
}

impl SentimentAnalyzerBuilder {
    /// Creates a new empty SentimentAnalyzerBuilder instance
    ///
    /// # Example
    /// ```
    /// use limbic::SentimentAnalyzerBuilder;
    ///
    /// let builder = SentimentAnalyzerBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            positive: None,
            negative: None,
        }
    }

    /// Sets the word lists to use for analysis using a built-in lexicon
    ///
    /// # Arguments
    /// * `lexicon` - The BuiltinLexicon variant to use (e.g., English)
    ///
    /// # Returns
    /// * `Result<Self, AnalyzerError>` - The builder instance if successful,
    ///   or an error if a lexicon was already set
    ///
    /// # Example
    /// ```
    /// use limbic::{SentimentAnalyzerBuilder, BuiltinLexicon};
    ///
    /// let builder = SentimentAnalyzerBuilder::new()
    ///     .with_lexicon(BuiltinLexicon::English);
    /// ```
    pub fn with_lexicon(mut self, lexicon: BuiltinLexicon) -> Result<Self, AnalyzerError> {
        if self.positive.is_some() || self.negative.is_some() {
            return Err(AnalyzerError::BuildError("Lexicon already set".to_string()));
        }

        let (positive, negative) = lexicon.word_sets();
        info!(
            "Loaded builtin lexicon {:?} ({} positive / {} negative words)",
            lexicon,
            positive.len(),
            negative.len()
        );

        self.positive = Some(positive);
        self.negative = Some(negative);
        Ok(self)
    }

    /// Sets custom word lists for the analyzer
    ///
    /// Words are normalized to lowercase before storage, so matching is
    /// case-insensitive either way.
    ///
    /// # Arguments
    /// * `positive` - Words that signal positive sentiment
    /// * `negative` - Words that signal negative sentiment
    ///
    /// # Returns
    /// * `Result<Self, AnalyzerError>` - The builder instance if successful, or an error if:
    ///   - A lexicon was already set
    ///   - Either word list is empty
    ///   - Any word is empty or contains non-alphabetic characters
    ///   - A word appears in both lists
    ///
    /// # Example
    /// ```
    /// use limbic::SentimentAnalyzerBuilder;
    ///
    /// let builder = SentimentAnalyzerBuilder::new()
    ///     .with_custom_lexicon(
    ///         vec!["solid", "sturdy"],
    ///         vec!["flimsy", "brittle"],
    ///     );
    /// ```
    pub fn with_custom_lexicon(
        mut self,
        positive: Vec<impl Into<String>>,
        negative: Vec<impl Into<String>>,
    ) -> Result<Self, AnalyzerError> {
        if self.positive.is_some() || self.negative.is_some() {
            return Err(AnalyzerError::BuildError("Lexicon already set".to_string()));
        }

        let positive = Self::normalize_words(positive)?;
        let negative = Self::normalize_words(negative)?;
        Self::validate_lexicon(&positive, &negative)?;

        info!(
            "Loaded custom lexicon ({} positive / {} negative words)",
            positive.len(),
            negative.len()
        );

        self.positive = Some(positive);
        self.negative = Some(negative);
        Ok(self)
    }

    /// Lowercases the words and rejects any word the tokenizer could never
    /// produce (empty, or containing non-ASCII-alphabetic characters).
    fn normalize_words(words: Vec<impl Into<String>>) -> Result<HashSet<String>, AnalyzerError> {
        let mut normalized = HashSet::new();
        for word in words {
            let word: String = word.into();
            if word.is_empty() {
                return Err(AnalyzerError::ValidationError(
                    "Lexicon words cannot be empty".to_string(),
                ));
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AnalyzerError::ValidationError(format!(
                    "Word '{}' contains non-alphabetic characters and would never match a token",
                    word
                )));
            }
            normalized.insert(word.to_lowercase());
        }
        Ok(normalized)
    }

    /// Validates lexicon data according to the following rules:
    /// - Both word sets must be non-empty
    /// - The sets must be disjoint (a word cannot signal both polarities)
    fn validate_lexicon(
        positive: &HashSet<String>,
        negative: &HashSet<String>,
    ) -> Result<(), AnalyzerError> {
        if positive.is_empty() {
            return Err(AnalyzerError::ValidationError(
                "Positive word list cannot be empty".to_string(),
            ));
        }
        if negative.is_empty() {
            return Err(AnalyzerError::ValidationError(
                "Negative word list cannot be empty".to_string(),
            ));
        }
        if let Some(word) = positive.intersection(negative).next() {
            return Err(AnalyzerError::ValidationError(format!(
                "Word '{}' appears in both the positive and negative lists",
                word
            )));
        }
        Ok(())
    }

    /// Builds and returns the final SentimentAnalyzer instance
    ///
    /// # Returns
    /// * `Result<SentimentAnalyzer, AnalyzerError>` - The constructed analyzer
    ///   if successful, or an error if no lexicon has been set
    ///
    /// # Example
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use limbic::{SentimentAnalyzerBuilder, BuiltinLexicon};
    ///
    /// let analyzer = SentimentAnalyzerBuilder::new()
    ///     .with_lexicon(BuiltinLexicon::English)?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<SentimentAnalyzer, AnalyzerError> {
        let positive = self
            .positive
            .ok_or_else(|| AnalyzerError::BuildError("No lexicon set".to_string()))?;
        let negative = self
            .negative
            .ok_or_else(|| AnalyzerError::BuildError("No lexicon set".to_string()))?;

        Ok(SentimentAnalyzer {
            lexicon: Arc::new(Lexicon::new(positive, negative)),
        })
    }
}
