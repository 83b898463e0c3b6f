// 목적:
// - 스케줄러가 의존하는 외부 협력자 경계를 정의한다.
//
// 설명:
// - 카탈로그 조회/기록, 단일 지식 베이스 갱신, 이벤트 보고를 트레이트로 분리한다.
// - 스케줄러는 구체 구현을 생성하지 않고 Arc<dyn ...>로 주입받는다.
//
// 디자인 패턴:
// - 포트(Port) + 의존성 주입(Dependency Injection).
//
// 참조:
// - src_rs/index/postgres_catalog.rs
// - src_rs/core/refresh_http.rs
// - src_rs/core/event_reporter.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::errors::CoreResult;
use crate::core::record::{KnowledgeBaseField, KnowledgeBaseRecord};

/// 갱신기가 보고하는 완료 시각이다. 스케줄러가 카탈로그에 기록한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReceipt {
    pub refreshed_at: DateTime<Utc>,
}

#[async_trait]
pub trait KnowledgeBaseCatalog: Send + Sync {
    /// 요청한 필드로 투영된 전체 레코드 스냅샷을 반환한다.
    async fn fetch_all(&self, fields: &[KnowledgeBaseField]) -> CoreResult<Vec<KnowledgeBaseRecord>>;

    /// 갱신에 성공한 레코드의 마지막 갱신 시각을 기록한다.
    async fn record_refresh(&self, kb_id: &str, refreshed_at: DateTime<Utc>) -> CoreResult<()>;
}

#[async_trait]
pub trait KnowledgeBaseRefresher: Send + Sync {
    async fn refresh(&self, record: &KnowledgeBaseRecord) -> CoreResult<RefreshReceipt>;
}

/// 관측 전용 보고자다. 제어 흐름에 영향을 주지 않는다.
pub trait EventReporter: Send + Sync {
    fn log_info(&self, message: &str);
    fn log_warning(&self, message: &str, error_message: &str);
    fn log_event(&self, name: &str, properties: &BTreeMap<String, String>);
}
