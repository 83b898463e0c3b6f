// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 카탈로그 오류는 주기 전체를 중단시키고 호출자에게 그대로 전달된다.
// - 갱신 오류(Refresh/Http/Serialization/Runtime)는 레코드 단위 경계에서 회수되어
//   실패 이벤트로 변환된다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/refresh_scheduler.rs
// - src_rs/index/postgres_catalog.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("지식 베이스 카탈로그를 사용할 수 없습니다: {0}")]
    CatalogUnavailable(String),
    /// 외부 갱신 작업이 돌려준 메시지를 가공 없이 그대로 표시한다.
    #[error("{0}")]
    Refresh(String),
    /// 호출 지점에서 붙인 문맥 메시지를 그대로 표시한다.
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Serialization(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
