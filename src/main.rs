//! # uuid-stamp 웹 서버 진입점
//!
//! 이 파일은 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정(HOST / PORT) 로딩
//! 4. UUID 생성기를 담은 AppState 생성
//! 5. 라우터 + TraceLayer 구성
//! 6. HTTP 서버 시작

// ── 모듈 선언 ──
// `mod config;`는 같은 디렉토리의 `config.rs`를, `mod routes;`는 `routes/mod.rs`를 가져옵니다.
mod config;
mod error;
mod models;
mod routes;
mod services;

use anyhow::Result; // 어떤 에러 타입이든 담을 수 있는 범용 Result (시작 단계 에러용)
use config::Config;
use routes::AppState;
use services::OsRngIdGenerator; // 운영체제 난수 기반 UUID 생성기
use tower_http::trace::TraceLayer; // HTTP 요청/응답 로깅 미들웨어
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: tokio 멀티스레드 런타임을 만들고 그 안에서 main을 실행합니다.
// 각 요청은 이 런타임 위에서 서로 독립적으로 동시에 처리됩니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok(): .env 파일이 없어도 에러 없이 넘어갑니다
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // registry()에 필터와 포맷터를 레이어처럼 쌓아올립니다.
    tracing_subscriber::registry()
        .with(
            // RUST_LOG가 없으면 uuid_stamp, tower_http, axum 모듈을 debug 레벨로 설정
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uuid_stamp=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 터미널 출력 포맷터
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // 모든 항목에 기본값이 있으므로 `?`가 필요 없습니다.
    let config = Config::from_env();
    tracing::info!("Starting uuid-stamp server on {}:{}", config.host, config.port);

    // ── 4단계: 애플리케이션 상태(State) 생성 ──
    // 핸들러가 공유하는 것은 상태 없는 UUID 생성기 하나뿐입니다.
    let state = AppState::new(OsRngIdGenerator);

    // ── 5단계: 라우터 설정 ──
    // GET / 하나만 등록된 라우터에 요청/응답 로깅 레이어를 덧붙입니다.
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    // ── 6단계: 서버 시작 ──
    let addr = config.addr();
    // .bind(): 지정된 주소에서 TCP 연결 대기 시작. 포트가 사용 중이면 `?`로 에러 전파
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Ctrl+C로 종료할 때까지 요청을 처리합니다
    axum::serve(listener, app).await?;

    Ok(())
}
