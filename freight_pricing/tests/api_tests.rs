use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use freight_pricing::api::{build_router, AppState};
use freight_pricing::config::AppConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::from_config(&AppConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(request).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn personal_estimate_high_frequency() {
    let (status, body) = post(
        "/api/estimate/personal",
        json!({"monthly_emails": 5, "rates_per_email": 50, "usage_frequency": "high"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rates"], 250);
    assert_eq!(body["credit_coefficient"], 1.15);
    assert_eq!(body["total_credits"], 288);
    assert_eq!(body["total_cost"], 2.88);
}

#[tokio::test]
async fn personal_estimate_clamps_non_positive_counts() {
    let (status, body) = post(
        "/api/estimate/personal",
        json!({"monthly_emails": 0, "rates_per_email": -7, "usage_frequency": "low"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rates"], 1);
    assert_eq!(body["total_credits"], 1);
}

#[tokio::test]
async fn enterprise_classification_requires_both_flags() {
    let (_, half) = post(
        "/api/estimate/enterprise",
        json!({"daily_emails": "10-50", "auto_push": true, "history_storage": false}),
    )
    .await;
    assert_eq!(half["plan_name"], "Standard");
    assert_eq!(half["cost_range"], "¥3万-¥8万/年");

    let (status, full) = post(
        "/api/estimate/enterprise",
        json!({"daily_emails": "10-50", "auto_push": true, "history_storage": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(full["plan_name"], "Enhanced");
    assert_eq!(full["cost_range"], "¥5万-¥10万/年");
}

#[tokio::test]
async fn enterprise_rejects_display_label_bucket() {
    let (status, body) = post(
        "/api/estimate/enterprise",
        json!({"daily_emails": "200封以上", "auto_push": false, "history_storage": false}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("unknown daily email bucket"));
}

#[tokio::test]
async fn platform_quote_applies_model_multiplier() {
    let (status, body) = post(
        "/api/quote",
        json!({"monthly_emails": 200, "email_types": 5, "pdf_pages": 100, "images": 50, "model_type": "enterprise"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtotal"], 64.3);
    assert_eq!(body["multiplier"], 2.0);
    assert_eq!(body["total"], 128.6);
}

#[tokio::test]
async fn batch_mixes_calculators() {
    let (status, body) = post(
        "/api/estimate/batch",
        json!({"scenarios": [
            {"name": "solo", "kind": "personal", "monthly_emails": 200, "rates_per_email": 8, "usage_frequency": "low"},
            {"name": "carrier", "kind": "enterprise", "daily_emails": "<10", "auto_push": true, "history_storage": true}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["name"], "solo");
    assert_eq!(body["results"][0]["total_cost"], 16.0);
    assert_eq!(body["results"][1]["plan_name"], "Standard");
}

#[tokio::test]
async fn plans_are_localised() {
    let (status, zh) = get("/api/plans").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(zh[0]["name"], "个人版");

    let (_, en) = get("/api/plans?lang=en").await;
    assert_eq!(en[1]["name"], "Teams");
    assert_eq!(en[1]["highlight"], true);

    let (status, body) = get("/api/plans?lang=fr").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "unknown_language");
}

#[tokio::test]
async fn suggestion_is_accepted() {
    let (status, body) = post(
        "/api/enterprise-suggestion",
        json!({"daily_emails": ">200", "auto_push": true, "history_storage": true}),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["plan_name"], "Large");
}

#[tokio::test]
async fn personal_estimate_accepts_any_json_number() {
    let (status, body) = post(
        "/api/estimate/personal",
        json!({"monthly_emails": u64::MAX, "rates_per_email": 2.5, "usage_frequency": "low"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rates"], u64::MAX);
    assert_eq!(body["total_credits"], u64::MAX);

    let (status, body) = post(
        "/api/estimate/personal",
        json!({"monthly_emails": 9223372036854775808u64, "rates_per_email": 0.4, "usage_frequency": "high"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rates"], 9223372036854775808u64);

    let (status, body) = post(
        "/api/estimate/personal",
        json!({"monthly_emails": 2.5, "rates_per_email": 50, "usage_frequency": "high"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_rates"], 100);
    assert_eq!(body["total_credits"], 115);
}

#[tokio::test]
async fn platform_quote_accepts_out_of_range_numbers() {
    let (status, body) = post(
        "/api/quote",
        json!({"monthly_emails": u64::MAX, "email_types": 0.9, "pdf_pages": -3, "images": 1e30}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 1000 emails, 1 type, 0 pages, 10000 images.
    assert_eq!(body["email_fee"], 94.0);
    assert_eq!(body["email_type_fee"], 10.0);
    assert_eq!(body["pdf_fee"], 0.0);
    assert_eq!(body["image_fee"], 500.0);
}

#[tokio::test]
async fn estimates_carry_labels_when_language_requested() {
    let profile = json!({"monthly_emails": 5, "rates_per_email": 50, "usage_frequency": "medium"});
    let (_, plain) = post("/api/estimate/personal", profile.clone()).await;
    assert!(plain.get("label").is_none());

    let (status, zh) = post("/api/estimate/personal?lang=zh", profile).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(zh["label"], "中频（每周）");
    assert_eq!(zh["total_rates"], 250);

    let (_, en) = post(
        "/api/estimate/enterprise?lang=en",
        json!({"daily_emails": ">200", "auto_push": false, "history_storage": false}),
    )
    .await;
    assert_eq!(en["plan_name"], "Large");
    assert_eq!(en["label"], "Large Enterprise Plan");

    let (_, quote) = post(
        "/api/quote?lang=zh",
        json!({"monthly_emails": 20, "email_types": 1, "model_type": "advanced"}),
    )
    .await;
    assert_eq!(quote["label"], "进阶模型");

    let (status, body) = post(
        "/api/estimate/enterprise?lang=de",
        json!({"daily_emails": "<10", "auto_push": false, "history_storage": false}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "unknown_language");
}
