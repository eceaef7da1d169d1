mod config;
mod rate_limit;

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{ensure, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Json, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use url::Url;
use zenjourney_agents::{LocalAdvisors, PlannerSettings, TripPlanner};
use zenjourney_core::{PlanError, TripPlanInput};
use zenjourney_observability::{AppMetrics, MetricsSnapshot};

pub use crate::config::{ApiConfig, DEFAULT_API_KEY};
use crate::rate_limit::{IpRateLimiter, RateDecision};

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct ApiState {
    pub planner: TripPlanner<LocalAdvisors>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: Arc<str>,
    pub limiter: IpRateLimiter,
    pub allowed_origins: Arc<Vec<String>>,
    pub trust_forwarded_for: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    advisor_timeout_ms: u64,
    metrics: MetricsSnapshot,
}

pub async fn build_app(config: ApiConfig) -> Result<Router> {
    ensure!(
        !config.api_key.trim().is_empty(),
        "ZENJOURNEY_API_KEY must not be empty"
    );
    ensure!(
        config.rate_limit_max > 0,
        "ZENJOURNEY_API_RATE_LIMIT_MAX must be at least 1"
    );

    let metrics = AppMetrics::shared();
    let planner = TripPlanner::local(
        PlannerSettings {
            advisor_timeout: config.advisor_timeout,
        },
        Arc::clone(&metrics),
    );

    let state = ApiState {
        planner,
        metrics,
        api_key: Arc::from(config.api_key.as_str()),
        limiter: IpRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
        allowed_origins: Arc::new(config.allowed_origins),
        trust_forwarded_for: config.trust_forwarded_for,
    };

    info!(
        advisor_timeout_ms = config.advisor_timeout.as_millis() as u64,
        rate_limit_max = config.rate_limit_max,
        trust_forwarded_for = config.trust_forwarded_for,
        "trip planning api configured"
    );
    Ok(build_router(state))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/travel/plan", post(plan_trip))
        .route("/travel/plan", post(plan_trip))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        // Set must wrap Propagate so generated ids reach the response.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        advisor_timeout_ms: state.planner.settings().advisor_timeout.as_millis() as u64,
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn plan_trip(
    State(state): State<ApiState>,
    body: Result<Json<TripPlanInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.metrics.inc_request();
            state.metrics.inc_validation_rejection();
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_trip_request",
                rejection.body_text(),
            );
        }
    };

    match state.planner.plan_trip(input).await {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(err) => plan_error_response(&err),
    }
}

fn plan_error_response(err: &PlanError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}

fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message.into()
        })),
    )
        .into_response()
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "request handler panicked");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "the server hit an unexpected error",
    )
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if header_key == &*state.api_key {
        return next.run(request).await;
    }

    // First-party browser pages call the API without embedding the key.
    if request_origin_is_allowed(&state, request.headers()) {
        return next.run(request).await;
    }

    error_response(
        StatusCode::UNAUTHORIZED,
        "unauthorized",
        "missing or invalid x-api-key, and request origin is not allowed",
    )
}

fn request_origin_is_allowed(state: &ApiState, headers: &HeaderMap) -> bool {
    request_origin_from_headers(headers).is_some_and(|origin| {
        state
            .allowed_origins
            .iter()
            .any(|allowed| allowed == &origin)
    })
}

fn request_origin_from_headers(headers: &HeaderMap) -> Option<String> {
    let direct_origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty());
    if direct_origin.is_some() {
        return direct_origin;
    }

    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Url::parse(value).ok())
        .map(|url| url.origin().ascii_serialization())
        .filter(|value| value != "null")
}

fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/health")
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:5500")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-key"),
        ])
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    match state.limiter.check(&request_ip(&request, state.trust_forwarded_for)) {
        RateDecision::Allowed { .. } => next.run(request).await,
        RateDecision::Limited { retry_after } => {
            let mut response = error_response(
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "rate limit exceeded for this IP",
            );
            let seconds = retry_after.as_secs().max(1);
            if let Ok(value) = HeaderValue::from_str(&seconds.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
    }
}

/// Client address used as the rate-limit key. `x-forwarded-for` is only
/// honoured when the server sits behind a trusted proxy.
fn request_ip(request: &Request<Body>, trust_forwarded_for: bool) -> String {
    let forwarded = trust_forwarded_for
        .then(|| request.headers().get("x-forwarded-for"))
        .flatten()
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    if let Some(forwarded) = forwarded {
        return forwarded;
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'; base-uri 'none'"),
    );
    response
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn request_origin_parses_origin_header_first() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000/"),
        );
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://elsewhere.example/page"),
        );
        assert_eq!(
            request_origin_from_headers(&headers).as_deref(),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn request_origin_falls_back_to_referer_origin() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://127.0.0.1:5500/planner.html?trip=bali"),
        );
        assert_eq!(
            request_origin_from_headers(&headers).as_deref(),
            Some("http://127.0.0.1:5500")
        );
    }

    #[test]
    fn forwarded_header_is_ignored_unless_trusted() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_ip(&request, true), "203.0.113.9");
        assert_eq!(request_ip(&request, false), "local");

        let mut request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([198, 51, 100, 4], 51234))));
        assert_eq!(request_ip(&request, false), "198.51.100.4");
    }

    #[test]
    fn plan_errors_map_to_bad_request() {
        let response = plan_error_response(&PlanError::EmptyDestination);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn panics_become_a_generic_500() {
        async fn explode() -> &'static str {
            panic!("advisor table corrupted")
        }

        let app = Router::new()
            .route("/explode", get(explode))
            .layer(CatchPanicLayer::custom(panic_response));
        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "internal_error");
        assert!(!parsed["message"]
            .as_str()
            .unwrap()
            .contains("advisor table corrupted"));
    }
}
