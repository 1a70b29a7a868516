//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수(또는 `.env` 파일)에서 서버 바인딩 주소를 읽어옵니다.
//!
//! 설정 항목:
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0", 모든 인터페이스)
//! - `PORT`: 서버 포트 번호 (기본값: 3000)

// std::env: 표준 라이브러리의 환경변수 모듈
use std::env;

// 모든 네트워크 인터페이스에서 연결을 받습니다
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 애플리케이션 전체 설정을 담는 구조체
// - Debug: {:?} 포맷으로 출력 가능
// - PartialEq, Eq: 테스트에서 설정값 비교용
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    pub fn from_env() -> Self {
        // env::var()는 Result<String, VarError>를 반환합니다.
        // .ok()로 Option으로 바꿔 "값 없음"과 "읽기 실패"를 같은 None으로 취급합니다.
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// 테스트에서는 프로세스 환경변수를 건드리지 않고 이 함수를 직접 호출합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // unwrap_or_else(|| ...): None일 때만 기본값 String을 만듭니다
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            // 파싱 실패 시에도 기본 포트로 대체합니다
            port: lookup("PORT")
                .and_then(|port| port.parse().ok()) // "3000" → 3000u16, 실패 시 None
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// `TcpListener::bind`에 넘길 "host:port" 문자열
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
