//! # 라우트 핸들러 모듈
//!
//! - `root`: `GET /` — UUID, 현재 시각, User-Agent 반환
//!
//! 등록된 경로는 `/` 하나뿐입니다. 그 외 경로는 Axum 기본 404,
//! `/`에 대한 다른 메서드는 기본 405로 응답합니다.

pub mod root;

pub use root::*;

use axum::{routing::get, Router};

/// 애플리케이션 라우터를 구성합니다.
///
/// 미들웨어(TraceLayer)는 `main.rs`에서 덧붙입니다.
pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(root)).with_state(state)
}
