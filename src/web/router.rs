//! Router assembly.

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::web::{CorsConfig, HttpConfig};
use crate::verify::verifier::Verifier;
use crate::web::{cors::build_cors, fallback::not_found, health::health, verify::verify_password};

pub const VERIFY_PATH: &str = "/api/verify-password";
pub const HEALTH_PATH: &str = "/health";

/// Builds the application router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | `POST` | `/api/verify-password` | [`verify_password`] |
/// | `GET` | `/health` | [`health`] |
/// | any | anything else | [`not_found`] |
pub fn build_router(verifier: Arc<Verifier>, http: &HttpConfig, cors: &CorsConfig) -> Router {
    Router::new()
        .route(VERIFY_PATH, post(verify_password))
        .route(HEALTH_PATH, get(health))
        .fallback(not_found)
        .layer(Extension(verifier))
        .layer(RequestBodyLimitLayer::new(http.max_body_bytes))
        .layer(build_cors(cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::verify::VerifyConfig;
    use crate::time::clock::FixedClock;

    fn app_on(y: i32, m: u32, d: u32) -> Router {
        let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let verifier = Verifier::new(&VerifyConfig::default(), Arc::new(FixedClock::new(day)));
        build_router(
            Arc::new(verifier),
            &HttpConfig::from_env_with(|_| None),
            &CorsConfig::from_env_with(|_| None),
        )
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(VERIFY_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn target_date_scenario() {
        let (status, body) = send(
            app_on(2025, 4, 26),
            post_json(json!({ "password": "the password.." })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, body) =
            send(app_on(2025, 4, 26), post_json(json!({ "password": "wrong" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": false, "message": "Wrong! Hint: enter 'the password..'" })
        );

        let (status, body) = send(app_on(2025, 4, 26), post_json(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusMessage"], "Password missing");
    }

    #[tokio::test]
    async fn other_date_scenario() {
        let (status, body) = send(
            app_on(2025, 4, 25),
            post_json(json!({ "password": "the password.." })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": false }));
    }

    #[tokio::test]
    async fn health_is_routed() {
        let req = Request::builder()
            .uri(HEALTH_PATH)
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app_on(2025, 4, 26), req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_404() {
        let req = Request::builder()
            .uri("/api/nope")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app_on(2025, 4, 26), req).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["url"], "/api/nope");
    }

    #[tokio::test]
    async fn get_on_verify_path_is_not_allowed() {
        let req = Request::builder()
            .uri(VERIFY_PATH)
            .body(Body::empty())
            .unwrap();

        let res = app_on(2025, 4, 26).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let padding = "x".repeat(32 * 1024);
        let res = app_on(2025, 4, 26)
            .oneshot(post_json(json!({ "password": padding })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
