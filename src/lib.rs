//! A thread-safe, lexicon-based sentiment analyzer for product reviews,
//! with an in-memory review store and an HTTP API on top.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::{SentimentAnalyzer, BuiltinLexicon, Sentiment};
//!
//! let analyzer = SentimentAnalyzer::builder()
//!     .with_lexicon(BuiltinLexicon::English)?
//!     .build()?;
//!
//! let (sentiment, confidence) = analyzer.analyze("This product is excellent and amazing");
//! assert_eq!(sentiment, Sentiment::Positive);
//! println!("{} at {:.2}% confidence", sentiment, confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The analyzer is thread-safe and can be shared across threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use limbic::{SentimentAnalyzer, BuiltinLexicon};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let analyzer = Arc::new(SentimentAnalyzer::builder()
//!     .with_lexicon(BuiltinLexicon::English)?
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let analyzer = Arc::clone(&analyzer);
//!     handles.push(thread::spawn(move || {
//!         analyzer.analyze("test text");
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod server;
pub mod store;

pub use analyzer::{
    AnalyzerError, AnalyzerInfo, BuiltinLexicon, Lexicon, Sentiment, SentimentAnalyzer,
    SentimentAnalyzerBuilder,
};
pub use server::{router, ApiError, AppState};
pub use store::{ReviewRecord, ReviewStore, SentimentStats};

pub fn init_logger() {
    env_logger::init();
}
