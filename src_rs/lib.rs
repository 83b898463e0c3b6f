// 목적:
// - 지식 베이스 갱신 오케스트레이터 런타임의 진입점을 제공한다.
//
// 설명:
// - 카탈로그 스냅샷에서 갱신 기한이 지난 지식 베이스를 골라 순차적으로 갱신하고,
//   레코드별 실패를 격리해 이벤트로 보고한다.
// - python 기능을 켜면 RefreshBridge 클래스를 확장 모듈로 노출한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index).
//
// 참조:
// - src_rs/core/refresh_scheduler.rs
// - src_rs/api/refresh_trigger.rs

#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod api;
pub mod core;
pub mod index;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn kb_refresh(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::refresh_bridge::PyRefreshBridge>()?;
    Ok(())
}
