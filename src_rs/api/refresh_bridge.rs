// 목적:
// - Python에서 호출 가능한 갱신 트리거 브릿지 클래스를 제공한다.
//
// 설명:
// - JSON 설정 페이로드를 입력받아 갱신 주기를 한 번 실행하고 None을 반환한다.
// - 카탈로그 조회 실패 등 주기 전체 실패만 RuntimeError로 올린다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/api/refresh_trigger.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use tokio::runtime::{Builder, Runtime};

use crate::api::refresh_trigger::{parse_payload, run_refresh_trigger};

/// Python에 노출되는 갱신 브릿지 클래스다.
#[pyclass(name = "RefreshBridge")]
pub struct PyRefreshBridge {
    phase: String,
}

#[pymethods]
impl PyRefreshBridge {
    /// 갱신 브릿지 객체를 생성한다.
    #[new]
    pub fn new() -> Self {
        Self {
            phase: "refresh-cycle-sequential".to_string(),
        }
    }

    pub fn status(&self) -> String {
        self.phase.clone()
    }

    /// 갱신 주기를 한 번 실행한다.
    pub fn run_cycle(&self, payload_json: &str) -> PyResult<()> {
        let payload =
            parse_payload(payload_json).map_err(|error| PyRuntimeError::new_err(error.to_string()))?;

        let runtime = create_runtime().map_err(PyRuntimeError::new_err)?;
        runtime
            .block_on(run_refresh_trigger(payload))
            .map_err(|error| PyRuntimeError::new_err(error.to_string()))
    }
}

fn create_runtime() -> Result<Runtime, String> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| format!("Tokio 런타임 생성 실패: {}", error))
}
