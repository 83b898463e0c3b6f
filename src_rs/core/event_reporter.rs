// 목적:
// - 갱신 결과 이벤트의 이름/속성 규약과 tracing 기반 보고자를 제공한다.
//
// 설명:
// - 성공 이벤트는 KnowledgeBaseId만, 실패 이벤트는 이전 갱신 시각과 오류 메시지를 함께 담는다.
// - 속성 맵은 JSON 객체 문자열로 직렬화해 하나의 tracing 필드로 남긴다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/collaborators.rs
// - src_rs/core/refresh_scheduler.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::collaborators::EventReporter;
use crate::core::record::NEVER_REFRESHED;

pub const REFRESH_SUCCESS_EVENT: &str = "KnowledgeBaseRefreshSuccess";
pub const REFRESH_FAILURE_EVENT: &str = "KnowledgeBaseRefreshFailure";

pub const PROP_KNOWLEDGE_BASE_ID: &str = "KnowledgeBaseId";
pub const PROP_LAST_REFRESH_DATE_TIME: &str = "LastRefreshDateTime";
pub const PROP_ERROR_MESSAGE: &str = "ErrorMessage";

/// 갱신 시각을 정렬 가능한 UTC 문자열(`2024-01-31 08:00:00Z`)로 변환한다.
pub fn format_refresh_timestamp(value: DateTime<Utc>) -> String {
    if value == NEVER_REFRESHED {
        return "never".to_string();
    }
    value.format("%Y-%m-%d %H:%M:%SZ").to_string()
}

pub fn success_properties(kb_id: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(PROP_KNOWLEDGE_BASE_ID.to_string(), kb_id.to_string())])
}

pub fn failure_properties(
    kb_id: &str,
    last_refresh_at: DateTime<Utc>,
    error_message: &str,
) -> BTreeMap<String, String> {
    BTreeMap::from([
        (PROP_KNOWLEDGE_BASE_ID.to_string(), kb_id.to_string()),
        (
            PROP_LAST_REFRESH_DATE_TIME.to_string(),
            format_refresh_timestamp(last_refresh_at),
        ),
        (PROP_ERROR_MESSAGE.to_string(), error_message.to_string()),
    ])
}

/// tracing 매크로로 로그와 이벤트를 남기는 기본 보고자다.
#[derive(Debug, Clone, Default)]
pub struct TracingEventReporter;

impl EventReporter for TracingEventReporter {
    fn log_info(&self, message: &str) {
        tracing::info!(target: "kb_refresh", "{}", message);
    }

    fn log_warning(&self, message: &str, error_message: &str) {
        tracing::warn!(target: "kb_refresh", error = %error_message, "{}", message);
    }

    fn log_event(&self, name: &str, properties: &BTreeMap<String, String>) {
        let serialized = serde_json::to_string(properties)
            .unwrap_or_else(|error| format!("{{\"serialization_error\":\"{}\"}}", error));
        tracing::info!(target: "kb_refresh::events", event = %name, properties = %serialized);
    }
}
