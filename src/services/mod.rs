//! # 서비스 모듈
//!
//! 핸들러가 사용하는 로직을 모아둔 모듈입니다.
//! - `clock`: 현재 UTC 시각 → RFC 3339 문자열
//! - `id`: UUID v4 생성 (`IdGenerator` 트레이트와 OS 난수 구현)

pub mod clock;
pub mod id;

pub use clock::*;
pub use id::*;
