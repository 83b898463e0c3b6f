// 목적:
// - 타이머/관리 호출에서 실행하는 단발성 갱신 트리거 바이너리를 제공한다.
//
// 설명:
// - 첫 번째 인자 또는 KB_REFRESH_CONFIG 환경 변수로 지정한 JSON 설정 파일을 읽는다.
// - 로그는 stderr로 남기며 RUST_LOG로 수준을 조정한다(기본 info).
// - 주기 완료 시 0, 카탈로그/설정 실패 시 1로 종료한다.
//
// 디자인 패턴:
// - 얇은 진입점(Thin Entry Point).
//
// 참조:
// - src_rs/api/refresh_trigger.rs

use std::process::ExitCode;

use kb_refresh::api::refresh_trigger::{parse_payload, run_refresh_trigger};
use kb_refresh::core::errors::{CoreError, CoreResult};

const CONFIG_ENV: &str = "KB_REFRESH_CONFIG";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "갱신 주기를 완료하지 못했습니다");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> CoreResult<()> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .ok_or_else(|| {
            CoreError::InvalidConfig(format!(
                "설정 파일 경로가 필요합니다: 첫 번째 인자 또는 {}",
                CONFIG_ENV
            ))
        })?;

    let payload_json = tokio::fs::read_to_string(&config_path)
        .await
        .map_err(|error| {
            CoreError::InvalidConfig(format!("설정 파일 읽기 실패: {}: {}", config_path, error))
        })?;

    run_refresh_trigger(parse_payload(&payload_json)?).await
}
