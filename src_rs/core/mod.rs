// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 레코드 모델, 기한 정책, 협력자 경계, 스케줄러, 보고/HTTP 어댑터를 분리한다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/refresh_scheduler.rs

pub mod collaborators;
pub mod due_policy;
pub mod errors;
pub mod event_reporter;
pub mod record;
pub mod refresh_http;
pub mod refresh_scheduler;
