use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use super::utils::{round2, tokenize};

/// Sentiment polarity assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// A thread-safe, lexicon-based sentiment analyzer.
///
/// # Thread Safety
///
/// This type is automatically `Send + Sync` because all of its fields are
/// thread-safe: the lexicon is immutable and wrapped in `Arc`.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use limbic::{SentimentAnalyzer, BuiltinLexicon};
/// use std::sync::Arc;
/// use std::thread;
///
/// let analyzer = Arc::new(SentimentAnalyzer::builder()
///     .with_lexicon(BuiltinLexicon::English)?
///     .build()?);
///
/// let analyzer_clone = Arc::clone(&analyzer);
/// thread::spawn(move || {
///     analyzer_clone.analyze("test text");
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    pub(crate) lexicon: Arc<Lexicon>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<SentimentAnalyzer>();
    }
};

impl SentimentAnalyzer {
    /// Creates a new SentimentAnalyzerBuilder for fluent construction
    pub fn builder() -> super::builder::SentimentAnalyzerBuilder {
        super::builder::SentimentAnalyzerBuilder::new()
    }

    /// Returns information about the analyzer's current state
    pub fn info(&self) -> super::AnalyzerInfo {
        super::AnalyzerInfo {
            positive_words: self.lexicon.positive_len(),
            negative_words: self.lexicon.negative_len(),
        }
    }

    /// Analyzes the sentiment of the input text.
    ///
    /// The text is lowercased, stripped of every character that is not an
    /// ASCII letter or whitespace, and split into words. Words found in the
    /// positive and negative lexicons are counted (repeats count multiple
    /// times) and the label is decided by strict majority, with ties going
    /// to neutral.
    ///
    /// # Returns
    /// A tuple containing:
    /// * The sentiment label
    /// * A confidence score in `[0, 100]`, rounded to 2 decimal places: the
    ///   share of words that matched either lexicon. Text with no words or
    ///   no lexicon matches scores `(Neutral, 0.0)`.
    ///
    /// # Example
    /// ```rust
    /// # use limbic::{SentimentAnalyzer, BuiltinLexicon, Sentiment};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let analyzer = SentimentAnalyzer::builder()
    /// #     .with_lexicon(BuiltinLexicon::English)?
    /// #     .build()?;
    /// let (sentiment, confidence) = analyzer.analyze("This is great!");
    /// assert_eq!(sentiment, Sentiment::Positive);
    /// assert!(confidence > 0.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze(&self, text: &str) -> (Sentiment, f64) {
        let words = tokenize(text);

        let positive_count = words.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let negative_count = words.iter().filter(|w| self.lexicon.is_negative(w)).count();
        let total_sentiment_words = positive_count + negative_count;

        // Also covers the empty-token case: no words means no matches.
        if total_sentiment_words == 0 {
            return (Sentiment::Neutral, 0.0);
        }

        let confidence = round2(f64::min(
            total_sentiment_words as f64 / words.len() as f64 * 100.0,
            100.0,
        ));

        let sentiment = if positive_count > negative_count {
            Sentiment::Positive
        } else if negative_count > positive_count {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        (sentiment, confidence)
    }
}
