//! In-memory storage for analyzed reviews.

use serde::{Deserialize, Serialize};

use crate::analyzer::Sentiment;

/// One stored, immutable analysis result tied to a submitted review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// 1-based id equal to the record's insertion order
    pub id: u64,
    /// Product the review refers to
    pub product: String,
    /// The submitted review text, trimmed
    pub review: String,
    /// Assigned sentiment label
    pub sentiment: Sentiment,
    /// Confidence score in `[0, 100]`
    pub confidence: f64,
}

/// Aggregate counts per sentiment label over the current store contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// An ordered, append-only collection of analyzed reviews.
///
/// The next id is derived from the current length rather than a separate
/// counter, so [`clear`](Self::clear) restarts numbering from 1. Callers
/// that share a store across tasks must guard it with a single lock so
/// that id assignment stays atomic.
#[derive(Debug, Default)]
pub struct ReviewStore {
    records: Vec<ReviewRecord>,
}

impl ReviewStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an analyzed review and returns its assigned id.
    ///
    /// Ids are unique and strictly increasing in insertion order; the
    /// store's length always equals the highest assigned id.
    pub fn append(
        &mut self,
        product: impl Into<String>,
        review: impl Into<String>,
        sentiment: Sentiment,
        confidence: f64,
    ) -> u64 {
        let id = self.records.len() as u64 + 1;
        self.records.push(ReviewRecord {
            id,
            product: product.into(),
            review: review.into(),
            sentiment,
            confidence,
        });
        id
    }

    /// Returns all records in insertion order
    pub fn all(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts records per sentiment label over the current snapshot
    pub fn stats(&self) -> SentimentStats {
        let mut stats = SentimentStats {
            total: self.records.len(),
            ..Default::default()
        };
        for record in &self.records {
            match record.sentiment {
                Sentiment::Positive => stats.positive += 1,
                Sentiment::Negative => stats.negative += 1,
                Sentiment::Neutral => stats.neutral += 1,
            }
        }
        stats
    }

    /// Empties the store; the next append is assigned id 1 again
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
