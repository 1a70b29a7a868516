//! # 데이터 모델 모듈
//!
//! - `response`: `GET /` 응답 본문 (`RootResponse`)

pub mod response;

pub use response::*;
