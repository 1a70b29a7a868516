//! # 고유 식별자(UUID v4) 생성 서비스
//!
//! 운영체제 난수 생성기(`OsRng`)에서 16바이트를 받아 UUID v4를 조립합니다.
//!
//! `Uuid::new_v4()`를 쓰지 않는 이유: 난수 소스가 실패하면 panic 하기 때문입니다.
//! 여기서는 `try_fill_bytes()`로 실패를 `Result`로 받아 `AppError::Generation`
//! (HTTP 500)으로 전파합니다.

use crate::error::AppError;
use rand_core::{OsRng, RngCore};
use uuid::{Builder, Uuid};

/// UUID를 만들어내는 추상화
///
/// 핸들러는 `AppState`를 통해 `Arc<dyn IdGenerator>`로 이 트레이트를 사용합니다.
/// 테스트에서는 실패하는 구현을 주입해 500 응답 경로를 검증합니다.
///
/// `Send + Sync`: 여러 요청(스레드)이 동시에 같은 생성기를 공유하기 때문에 필요합니다.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<Uuid, AppError>;
}

/// 운영체제 엔트로피 소스를 사용하는 기본 생성기
///
/// 상태가 없는 유닛 구조체이므로 clone/공유 비용이 없습니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngIdGenerator;

impl IdGenerator for OsRngIdGenerator {
    fn generate(&self) -> Result<Uuid, AppError> {
        let mut bytes = [0u8; 16];
        // 엔트로피 소스 실패 → rand_core::Error → AppError::Generation
        OsRng.try_fill_bytes(&mut bytes)?;
        // 122비트 난수 + 버전(4)/variant(RFC 4122) 비트 고정
        Ok(Builder::from_random_bytes(bytes).into_uuid())
    }
}
