//! # 시각 포맷팅 서비스
//!
//! 응답의 `payload` 필드에 들어갈 현재 UTC 시각을 RFC 3339 문자열로 만듭니다.
//! 형식: `YYYY-MM-DDTHH:MM:SSZ` (초 단위, 소수점 없음, `Z` 접미사)

use chrono::{DateTime, SecondsFormat, Utc};

/// 주어진 UTC 시각을 RFC 3339 문자열로 변환합니다.
///
/// - `SecondsFormat::Secs`: 초 이하(밀리/나노초)는 버립니다
/// - `use_z = true`: "+00:00" 대신 "Z"를 사용합니다
pub fn rfc3339_utc(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 현재 시각을 RFC 3339 문자열로 반환합니다.
pub fn now_rfc3339() -> String {
    rfc3339_utc(Utc::now())
}
