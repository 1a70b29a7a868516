//! # 루트 응답 모델
//!
//! `GET /` 요청마다 새로 만들어지고 곧바로 JSON으로 직렬화되는 값입니다.
//! 저장되거나 다른 요청과 공유되지 않습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `GET /`의 응답 본문
///
/// JSON 필드 이름은 camelCase입니다 (`user_agent` → `"userAgent"`).
///
/// ```json
/// {
///   "id": "3f2b8c1e-9a4d-4c7e-8b1a-2d5e6f7a8b9c",
///   "success": true,
///   "payload": "2026-10-19T08:30:05Z",
///   "userAgent": "curl/8.5.0"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootResponse {
    /// UUID v4, 하이픈 포함 소문자 36자
    pub id: String,
    /// 항상 `true` — 이 값을 `false`로 만드는 경로는 없습니다
    pub success: bool,
    /// 요청 시점의 UTC 시각 (RFC 3339)
    pub payload: String,
    /// 요청의 `User-Agent` 헤더 값 그대로, 없으면 빈 문자열
    pub user_agent: String,
}

impl RootResponse {
    pub fn new(id: Uuid, payload: String, user_agent: String) -> Self {
        Self {
            id: id.hyphenated().to_string(),
            success: true,
            payload,
            user_agent,
        }
    }
}
