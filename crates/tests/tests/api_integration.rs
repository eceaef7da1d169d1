use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use zenjourney_api::{build_app, ApiConfig, DEFAULT_API_KEY};

async fn app() -> Router {
    build_app(ApiConfig::default())
        .await
        .expect("app should build")
}

fn plan_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", DEFAULT_API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .await
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    let parsed = read_json(response).await;
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["advisor_timeout_ms"], 2000);
}

#[tokio::test]
async fn plan_requires_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/travel/plan")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "destination": "Paris",
                "start_date": "2025-08-10",
                "end_date": "2025-08-12",
                "budget": 1500
            })
            .to_string(),
        ))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert!(response.headers().get("content-security-policy").is_some());
    assert!(response.headers().get("x-request-id").is_some());
    assert_eq!(read_json(response).await["error"], "unauthorized");
}

#[tokio::test]
async fn allowed_browser_origin_skips_the_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/travel/plan")
        .header("content-type", "application/json")
        .header("origin", "http://localhost:3000")
        .body(Body::from(
            json!({
                "destination": "Rome",
                "start_date": "2025-09-01",
                "end_date": "2025-09-01",
                "budget": 400
            })
            .to_string(),
        ))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn plan_returns_structured_payload() {
    let request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Paris, France",
            "start_date": "2025-08-10",
            "end_date": "2025-08-14",
            "total_budget": 3000,
            "preferences": ["vegan", "fine dining"]
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let parsed = read_json(response).await;
    assert_eq!(parsed["total_days"], 5);
    let itinerary = parsed["itinerary"].as_object().unwrap();
    let keys = itinerary.keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys.len(), 5);
    for day in 1..=5 {
        let entry = &itinerary[&format!("Day {day}")];
        for field in [
            "weather",
            "breakfast",
            "must_visit",
            "local_event",
            "dinner",
            "hotel_suggestion",
            "travel_distance",
        ] {
            assert!(entry[field].is_string(), "Day {day} missing {field}");
        }
    }
    assert_eq!(parsed["hotel_suggestions"].as_array().unwrap().len(), 3);
    assert!(parsed["estimated_cost"].as_f64().unwrap() <= 3000.0);
    assert_eq!(parsed["requested_budget"], 3000.0);

    let report = parsed["report"].as_str().unwrap();
    assert!(report.starts_with("TRAVEL PLAN FOR PARIS, FRANCE"));
    assert!(report.contains("VEGETARIAN/VEGAN IN PARIS"));
    assert!(!report.contains("CLASSIC PARISIAN FOOD"));
    assert!(report.contains("FINE DINING EXPERIENCES"));
    assert!(parsed["unavailable"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn legacy_path_serves_the_same_planner() {
    let request = plan_request(
        "/travel/plan",
        json!({
            "destination": "Tokyo",
            "start_date": "2025-04-01",
            "end_date": "2025-04-02",
            "budget": 1800,
            "preferences": "street food"
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    assert!(parsed["report"]
        .as_str()
        .unwrap()
        .contains("STREET FOOD & MARKETS"));
}

#[tokio::test]
async fn unknown_destination_gets_every_section() {
    let request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Reykjavik",
            "start_date": "2025-06-01",
            "end_date": "2025-06-03",
            "budget": 2200
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let parsed = read_json(response).await;
    let report = parsed["report"].as_str().unwrap();
    for heading in [
        "WEATHER FORECAST:",
        "PACKING SUGGESTIONS:",
        "BUDGET BREAKDOWN (Total: $2200.00):",
        "MUST-VISIT PHOTO SPOTS:",
        "FOOD RECOMMENDATIONS:",
        "TRANSPORTATION:",
        "LOCAL EVENTS DURING YOUR STAY:",
        "ITINERARY SUGGESTIONS:",
        "NOTES:",
    ] {
        assert!(report.contains(heading), "missing {heading}");
    }
    assert!(report.contains("GENERAL FOOD RECOMMENDATIONS"));
}

#[tokio::test]
async fn end_before_start_is_rejected() {
    let request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Bali",
            "start_date": "2025-05-10",
            "end_date": "2025-05-01",
            "budget": 900
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "invalid_trip_request");
    assert!(parsed["message"].as_str().unwrap().contains("before"));
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Bali",
            "start_date": "05/10/2025",
            "end_date": "2025-05-12",
            "budget": 900
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "invalid_trip_request");
}

#[tokio::test]
async fn malformed_body_is_rejected_with_the_same_shape() {
    let request = plan_request("/v1/travel/plan", json!({ "destination": "Bali" }));

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "invalid_trip_request");
    assert!(parsed["message"].is_string());
}

#[tokio::test]
async fn rate_limit_applies_per_client() {
    let config = ApiConfig {
        rate_limit_max: 1,
        ..ApiConfig::default()
    };
    let app = build_app(config).await.expect("app should build");
    let body = json!({
        "destination": "London",
        "start_date": "2025-03-01",
        "end_date": "2025-03-02",
        "budget": 700
    });

    let first = app
        .clone()
        .oneshot(plan_request("/v1/travel/plan", body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(plan_request("/v1/travel/plan", body))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().get("retry-after").is_some());
    assert_eq!(
        second.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn client_supplied_id_is_echoed() {
    let mut request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Rome",
            "start_date": "2025-09-01",
            "end_date": "2025-09-02",
            "budget": 800
        }),
    );
    request
        .headers_mut()
        .insert("x-request-id", "trip-abc".parse().unwrap());

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "trip-abc");
}

#[tokio::test]
async fn spoofed_forwarded_for_does_not_reset_the_limit() {
    let config = ApiConfig {
        rate_limit_max: 1,
        ..ApiConfig::default()
    };
    let app = build_app(config).await.expect("app should build");
    let body = json!({
        "destination": "Dubai",
        "start_date": "2025-03-01",
        "end_date": "2025-03-02",
        "budget": 700
    });

    let mut first = plan_request("/v1/travel/plan", body.clone());
    first
        .headers_mut()
        .insert("x-forwarded-for", "203.0.113.1".parse().unwrap());
    let first = app.clone().oneshot(first).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let mut second = plan_request("/v1/travel/plan", body);
    second
        .headers_mut()
        .insert("x-forwarded-for", "203.0.113.2".parse().unwrap());
    let second = app.oneshot(second).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn overlong_trip_names_the_service_limit() {
    let request = plan_request(
        "/v1/travel/plan",
        json!({
            "destination": "Sydney",
            "start_date": "2025-01-01",
            "end_date": "2025-12-31",
            "budget": 20000
        }),
    );

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let parsed = read_json(response).await;
    assert_eq!(parsed["error"], "invalid_trip_request");
    assert!(parsed["message"]
        .as_str()
        .unwrap()
        .contains("service limit of 90 days"));
}
