pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::triage::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/incident", post(handlers::handle_incident))
        .route("/incidents", get(handlers::handle_list_incidents))
        .route("/bedrock-test", post(handlers::handle_bedrock_test))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::completion::testing::ScriptedBackend;
    use crate::completion::BackendError;
    use crate::triage::pipeline::BACKEND_FAILURE_TEXT;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn router_with_script(script: Vec<Result<String, BackendError>>) -> Router {
        let state = crate::state::AppState::for_tests(Arc::new(ScriptedBackend::new(script)));
        build_router(state)
    }

    #[tokio::test]
    async fn test_health_reports_service_identity() {
        let app = router_with_script(vec![]);

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "safelink");
    }

    #[tokio::test]
    async fn test_incident_round_trip_through_http() {
        let app = router_with_script(vec![
            Ok("Trapped occupants in structure fire.".to_string()),
            Ok("1. Get low. 2. Get out.".to_string()),
        ]);

        let response = app
            .clone()
            .oneshot(post_json(
                "/incident",
                r#"{"message": "Building on fire, people trapped inside"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let record = body_json(response).await;
        assert_eq!(record["severity"], "High");
        assert_eq!(record["responder_summary"], "Trapped occupants in structure fire.");

        let response = app.oneshot(get_request("/incidents")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["citizen_guidance"], "1. Get low. 2. Get out.");
    }

    #[tokio::test]
    async fn test_incidents_lists_in_submission_order() {
        // Backend echoes once the script is dry; severity tells them apart.
        let app = router_with_script(vec![]);

        for message in ["fire downtown", "minor scratch", "all quiet"] {
            let body = format!(r#"{{"message": "{message}"}}"#);
            let response = app.clone().oneshot(post_json("/incident", &body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let listed = body_json(app.oneshot(get_request("/incidents")).await.unwrap()).await;
        let severities: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["severity"].as_str().unwrap())
            .collect();
        assert_eq!(severities, vec!["High", "Medium", "Low"]);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected_with_400() {
        let app = router_with_script(vec![]);

        let response = app
            .oneshot(post_json("/incident", r#"{"note": "no message field"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_backend_outage_still_returns_200_with_fallback_text() {
        let app = router_with_script(vec![
            Err(BackendError::Timeout(30)),
            Err(BackendError::Invoke("connection refused".to_string())),
        ]);

        let response = app
            .clone()
            .oneshot(post_json("/incident", r#"{"message": "smoke alarm going off"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "backend outage must not surface as 5xx");

        let record = body_json(response).await;
        assert_eq!(record["responder_summary"], BACKEND_FAILURE_TEXT);
        assert_eq!(record["citizen_guidance"], BACKEND_FAILURE_TEXT);

        let listed = body_json(app.oneshot(get_request("/incidents")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1, "the degraded record is still appended");
    }

    #[tokio::test]
    async fn test_bedrock_test_accepts_empty_body() {
        let app = router_with_script(vec![Ok("Hello!".to_string())]);

        let response = app.oneshot(post_json("/bedrock-test", "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["bedrock_text"], "Hello!");
    }
}
