use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use limbic::{AppState, BuiltinLexicon, SentimentAnalyzer};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_router() -> Router {
    let analyzer = SentimentAnalyzer::builder()
        .with_lexicon(BuiltinLexicon::English)
        .unwrap()
        .build()
        .expect("Failed to create analyzer");
    limbic::router(AppState::new(analyzer))
}

async fn post_analyze(router: &Router, body: Value) -> axum::response::Response {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn get(router: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_analyze_returns_sentiment_and_id() {
    let router = test_router();

    let response = post_analyze(
        &router,
        json!({"review": "This product is excellent and amazing", "product": "Widget"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["product"], "Widget");
    assert_eq!(body["review_id"], 1);
    assert!((body["confidence"].as_f64().unwrap() - 33.33).abs() < 1e-9);
}

#[tokio::test]
async fn test_analyze_trims_and_defaults_product() {
    let router = test_router();

    let response = post_analyze(&router, json!({"review": "  absolutely terrible  "})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sentiment"], "negative");
    assert_eq!(body["product"], "Unknown Product");

    // The stored record carries the trimmed text
    let reviews = body_json(get(&router, "/reviews").await).await;
    assert_eq!(reviews["reviews"][0]["review"], "absolutely terrible");
}

#[tokio::test]
async fn test_empty_review_is_rejected_without_side_effects() {
    let router = test_router();

    let response = post_analyze(&router, json!({"review": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Review text is required");

    // Nothing was appended
    let stats = body_json(get(&router, "/stats").await).await;
    assert_eq!(stats["total_reviews"], 0);
}

#[tokio::test]
async fn test_missing_review_field_is_rejected() {
    let router = test_router();

    let response = post_analyze(&router, json!({"product": "Widget"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Review text is required");
}

#[tokio::test]
async fn test_reviews_listed_in_insertion_order() {
    let router = test_router();

    post_analyze(&router, json!({"review": "excellent"})).await;
    post_analyze(&router, json!({"review": "terrible"})).await;

    let body = body_json(get(&router, "/reviews").await).await;
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["id"], 1);
    assert_eq!(reviews[0]["sentiment"], "positive");
    assert_eq!(reviews[1]["id"], 2);
    assert_eq!(reviews[1]["sentiment"], "negative");
}

#[tokio::test]
async fn test_stats_aggregates_labels() {
    let router = test_router();

    post_analyze(&router, json!({"review": "excellent"})).await;
    post_analyze(&router, json!({"review": "amazing"})).await;
    post_analyze(&router, json!({"review": "terrible"})).await;

    let stats = body_json(get(&router, "/stats").await).await;
    assert_eq!(stats["total_reviews"], 3);
    assert_eq!(stats["positive"], 2);
    assert_eq!(stats["negative"], 1);
    assert_eq!(stats["neutral"], 0);
}

#[tokio::test]
async fn test_clear_wipes_store_and_restarts_ids() {
    let router = test_router();

    post_analyze(&router, json!({"review": "excellent"})).await;

    let response = get(&router, "/clear").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "All reviews cleared");

    let stats = body_json(get(&router, "/stats").await).await;
    assert_eq!(stats["total_reviews"], 0);

    // Ids restart from 1 after a clear
    let body = body_json(post_analyze(&router, json!({"review": "excellent"})).await).await;
    assert_eq!(body["review_id"], 1);
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let router = test_router();

    assert_eq!(get(&router, "/clear").await.status(), StatusCode::OK);
    assert_eq!(get(&router, "/clear").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_concurrent_appends_assign_unique_ids() {
    let router = test_router();

    let mut handles = vec![];
    for _ in 0..8 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            let body = body_json(post_analyze(&router, json!({"review": "excellent"})).await).await;
            body["review_id"].as_u64().unwrap()
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_home_page_is_served() {
    let router = test_router();

    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("text/html"));
}
