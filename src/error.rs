//! # 에러 처리 모듈
//!
//! 이 서비스에서 실패할 수 있는 곳은 단 하나, 난수 소스(엔트로피)입니다.
//! `AppError`는 그 실패를 담고, `IntoResponse` 구현으로 HTTP 500 응답이 됩니다.
//!
//! 존재하지 않는 경로(404)나 허용되지 않은 메서드(405)는
//! Axum 라우터가 기본 동작으로 처리하므로 여기서 다루지 않습니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // #[derive(Error)]로 Display와 std::error::Error를 자동 구현

/// 애플리케이션 에러
///
/// 핸들러가 `Result<T, AppError>`를 반환하면 Axum이 `into_response()`를 호출합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 난수 소스에서 UUID용 바이트를 얻지 못함 (HTTP 500)
    /// #[from]: `rand_core::Error`에 `?`를 쓰면 자동으로 이 variant로 변환됩니다.
    #[error("Identifier generation failed: {0}")]
    Generation(#[from] rand_core::Error),
}

impl IntoResponse for AppError {
    /// 실제 에러 내용은 로그에만 남기고, 클라이언트에는 일반적인 메시지만 보냅니다.
    fn into_response(self) -> Response {
        // (status, code, message) 튜플을 만듭니다.
        // ref: self를 이동(move)하지 않고 내부 에러를 참조로 빌려옵니다.
        let (status, code, message) = match self {
            AppError::Generation(ref e) => {
                // 서버 관리자용 로그
                tracing::error!("Identifier generation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "generation_failure",
                    "Failed to generate an identifier".to_string(),
                )
            }
        };

        // 결과: { "error": { "code": "generation_failure", "message": "..." } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Axum은 (상태코드, 본문) 튜플을 HTTP 응답으로 변환합니다.
        (status, body).into_response()
    }
}
