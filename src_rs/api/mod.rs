// 목적:
// - 외부 트리거 경계 모듈을 선언한다.
//
// 설명:
// - Rust 트리거 파사드와 Python FFI 브릿지(python 기능)를 분리한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/refresh_trigger.rs
// - src_rs/api/refresh_bridge.rs

#[cfg(feature = "python")]
pub mod refresh_bridge;
pub mod refresh_trigger;
