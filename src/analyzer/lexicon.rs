use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "excellent", "amazing", "great", "good", "awesome", "fantastic",
        "wonderful", "perfect", "love", "best", "outstanding", "brilliant",
        "superb", "nice", "beautiful", "incredible", "satisfied", "happy",
        "pleased", "delighted", "impressive", "quality", "recommend",
        "worthwhile", "useful", "helpful", "smooth", "fast", "efficient",
    ]
    .iter()
    .copied()
    .collect();

    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "terrible", "awful", "bad", "horrible", "worst", "hate", "disgusting",
        "disappointing", "poor", "useless", "broken", "defective", "slow",
        "expensive", "overpriced", "waste", "regret", "unhappy", "frustrated",
        "annoying", "difficult", "complicated", "confusing", "cheap",
        "fake", "damaged", "wrong", "failed", "problem", "issue",
    ]
    .iter()
    .copied()
    .collect();
}

/// Built-in lexicons shipped with the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinLexicon {
    /// General-purpose English lexicon tuned for product reviews
    English,
}

impl BuiltinLexicon {
    /// Returns the positive and negative word sets for this lexicon
    pub fn word_sets(&self) -> (HashSet<String>, HashSet<String>) {
        match self {
            Self::English => (
                POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
                NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            ),
        }
    }
}

/// An immutable pair of disjoint word sets, one per sentiment polarity.
///
/// Words are stored lowercase; membership checks assume the caller has
/// already lowercased its tokens.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    pub(crate) fn new(positive: HashSet<String>, negative: HashSet<String>) -> Self {
        Self { positive, negative }
    }

    /// Returns true if the word carries positive sentiment
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Returns true if the word carries negative sentiment
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Number of words in the positive set
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Number of words in the negative set
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}
