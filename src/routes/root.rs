//! # 루트(`/`) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET /` → `{ "id", "success", "payload", "userAgent" }`
//!
//! 요청마다:
//! 1. 새 UUID v4 생성 (난수 소스 실패 시 500)
//! 2. 현재 UTC 시각을 RFC 3339로 포맷
//! 3. `User-Agent` 헤더 읽기 (없으면 빈 문자열)
//! 4. `RootResponse`를 JSON으로 반환 (200)

use std::sync::Arc;

use crate::{
    error::AppError,
    models::RootResponse,
    services::{self, IdGenerator},
};
use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    Json,
};

/// 애플리케이션 공유 상태
///
/// 요청 간에 공유되는 것은 상태 없는 UUID 생성기 하나뿐입니다.
/// `Arc`이므로 Axum이 요청마다 clone해도 생성기 자체는 복제되지 않습니다.
#[derive(Clone)]
pub struct AppState {
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self { ids: Arc::new(ids) }
    }
}

/// `GET /` — 새 식별자와 현재 시각, 요청자의 User-Agent를 반환합니다.
///
/// # Extractor
/// - `State(state)`: UUID 생성기
/// - `HeaderMap`: 요청 헤더 전체. `User-Agent`만 읽습니다.
///
/// 헤더 값은 바이트 그대로 옮깁니다. `to_str()`은 보이는 ASCII만 허용하므로
/// 쓰지 않고, `from_utf8_lossy`로 UTF-8은 그대로, 잘못된 바이트만 U+FFFD로 바꿉니다.
/// 헤더가 없으면 빈 문자열입니다.
pub async fn root(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RootResponse>, AppError> {
    let id = state.ids.generate()?;
    let payload = services::now_rfc3339();
    let user_agent = headers
        .get(USER_AGENT)
        // HeaderValue → &[u8] → String (예: "café-agent/1.0"도 그대로 유지)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();

    tracing::debug!(%id, %user_agent, "issued identifier");

    Ok(Json(RootResponse::new(id, payload, user_agent)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::router;
    use crate::services::OsRngIdGenerator;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, HeaderValue, Method, Request, StatusCode},
        Router,
    };
    use chrono::{DateTime, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    struct FailingIdGenerator;

    impl IdGenerator for FailingIdGenerator {
        fn generate(&self) -> Result<uuid::Uuid, AppError> {
            Err(AppError::Generation(rand_core::Error::new(
                "entropy source unavailable",
            )))
        }
    }

    fn test_app() -> Router {
        router(AppState::new(OsRngIdGenerator))
    }

    async fn get_root(app: Router, user_agent: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(Method::GET).uri("/");
        if let Some(agent) = user_agent {
            request = request.header(USER_AGENT, agent);
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_root_returns_four_fields() {
        let (status, body) = get_root(test_app(), Some("test-agent/1.0")).await;

        assert_eq!(status, StatusCode::OK);
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for field in ["id", "success", "payload", "userAgent"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(body["success"], Value::Bool(true));
    }

    #[tokio::test]
    async fn test_root_sets_json_content_type() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_id_is_lowercase_uuid_v4() {
        let (_, body) = get_root(test_app(), None).await;
        let id = body["id"].as_str().unwrap();

        assert_eq!(id.len(), 36);
        assert_eq!(id, id.to_lowercase());
        let parsed = Uuid::parse_str(id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[tokio::test]
    async fn test_payload_is_current_rfc3339() {
        let (_, body) = get_root(test_app(), None).await;
        let payload = body["payload"].as_str().unwrap();

        assert!(payload.ends_with('Z'));
        let at = DateTime::parse_from_rfc3339(payload).unwrap();
        let drift = Utc::now().signed_duration_since(at.with_timezone(&Utc));
        assert!(drift.num_seconds().abs() <= 5, "payload drifted: {payload}");
    }

    #[tokio::test]
    async fn test_user_agent_is_echoed() {
        let (_, body) = get_root(test_app(), Some("test-agent/1.0")).await;
        assert_eq!(body["userAgent"], "test-agent/1.0");
    }

    #[tokio::test]
    async fn test_missing_user_agent_is_empty() {
        let (_, body) = get_root(test_app(), None).await;
        assert_eq!(body["userAgent"], "");
    }

    async fn get_root_with_raw_agent(agent: &[u8]) -> RootResponse {
        let request = Request::builder()
            .uri("/")
            .header(USER_AGENT, HeaderValue::from_bytes(agent).unwrap())
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_utf8_user_agent_is_echoed_verbatim() {
        let response = get_root_with_raw_agent("café-agent/1.0".as_bytes()).await;

        assert!(response.success);
        assert_eq!(response.user_agent, "café-agent/1.0");
    }

    #[tokio::test]
    async fn test_invalid_utf8_user_agent_is_replaced() {
        // 0xFF는 UTF-8로 해석할 수 없는 바이트
        let response = get_root_with_raw_agent(b"agent/\xff1.0").await;

        assert_eq!(response.user_agent, "agent/\u{FFFD}1.0");
    }

    #[tokio::test]
    async fn test_sequential_requests_have_distinct_ids() {
        let app = test_app();
        let (_, first) = get_root(app.clone(), None).await;
        let (_, second) = get_root(app, None).await;

        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_generation_failure_returns_500() {
        let app = router(AppState::new(FailingIdGenerator));
        let (status, body) = get_root(app, Some("test-agent/1.0")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "generation_failure");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_other_method_is_not_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
