use limbic::{ReviewStore, Sentiment, SentimentStats};

#[test]
fn test_ids_match_insertion_order() {
    let mut store = ReviewStore::new();
    for i in 1..=10u64 {
        let id = store.append("Widget", format!("review number {}", i), Sentiment::Neutral, 0.0);
        assert_eq!(id, i);
    }

    assert_eq!(store.len(), 10);
    for (index, record) in store.all().iter().enumerate() {
        assert_eq!(record.id, index as u64 + 1);
    }
}

#[test]
fn test_records_keep_their_fields() {
    let mut store = ReviewStore::new();
    store.append("Headphones", "Crisp sound, really impressive", Sentiment::Positive, 40.0);

    let record = &store.all()[0];
    assert_eq!(record.product, "Headphones");
    assert_eq!(record.review, "Crisp sound, really impressive");
    assert_eq!(record.sentiment, Sentiment::Positive);
    assert!((record.confidence - 40.0).abs() < 1e-9);
}

#[test]
fn test_clear_resets_ids() {
    let mut store = ReviewStore::new();
    store.append("Widget", "good", Sentiment::Positive, 100.0);
    store.append("Widget", "bad", Sentiment::Negative, 100.0);
    assert_eq!(store.len(), 2);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.stats(), SentimentStats::default());

    // Numbering restarts because ids derive from the current length
    assert_eq!(store.append("Widget", "good again", Sentiment::Positive, 100.0), 1);
}

#[test]
fn test_stats_after_mixed_appends() {
    let mut store = ReviewStore::new();
    store.append("A", "excellent", Sentiment::Positive, 100.0);
    store.append("B", "amazing", Sentiment::Positive, 100.0);
    store.append("C", "terrible", Sentiment::Negative, 100.0);

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.positive, 2);
    assert_eq!(stats.negative, 1);
    assert_eq!(stats.neutral, 0);
}
