// 목적:
// - 지식 베이스 하나에 대한 외부 갱신 HTTP 호출을 담당한다.
//
// 설명:
// - 레코드 ID와 원천 위치 필드를 HTTP 엔드포인트에 전달하고 완료 시각을 받는다.
// - 응답 본문이 비어 있으면 호출 완료 시각을 갱신 시각으로 사용한다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/collaborators.rs
// - src_rs/core/refresh_scheduler.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::collaborators::{KnowledgeBaseRefresher, RefreshReceipt};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::record::KnowledgeBaseRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshHttpConfigPayload {
    pub url: String,
    pub timeout_ms: u64,
    #[serde(default)]
    pub auth_token: Option<String>,
}

#[derive(Clone)]
pub struct HttpKnowledgeBaseRefresher {
    client: Client,
    config: RefreshHttpConfigPayload,
}

impl HttpKnowledgeBaseRefresher {
    pub fn new(config: RefreshHttpConfigPayload) -> CoreResult<Self> {
        if config.url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "refresh_http.url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "refresh_http.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| CoreError::Http(format!("HTTP 클라이언트 생성 실패: {}", error)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl KnowledgeBaseRefresher for HttpKnowledgeBaseRefresher {
    async fn refresh(&self, record: &KnowledgeBaseRecord) -> CoreResult<RefreshReceipt> {
        let request_body = RefreshRequest::from_record(record);
        let mut request_builder = self.client.post(self.config.url.as_str()).json(&request_body);
        if let Some(token) = self.config.auth_token.as_ref() {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|error| CoreError::Http(format!("갱신 HTTP 요청 실패: {}", error)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| CoreError::Http(format!("갱신 HTTP 본문 읽기 실패: {}", error)))?;

        check_refresh_status(status, &body)?;

        let refreshed_at = parse_refresh_response(&body, Utc::now()).map_err(|error| {
            CoreError::Serialization(format!("갱신 응답 파싱 실패: {}, body={}", error, body))
        })?;

        Ok(RefreshReceipt { refreshed_at })
    }
}

/// 갱신 엔드포인트로 보내는 본문이다. 원천 위치 필드는 가공하지 않는다.
#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    kb_id: &'a str,
    sharepoint_site_id: Option<&'a str>,
    sharepoint_list_id: Option<&'a str>,
    question_field: Option<&'a str>,
    answer_fields: Option<&'a str>,
}

impl<'a> RefreshRequest<'a> {
    fn from_record(record: &'a KnowledgeBaseRecord) -> Self {
        Self {
            kb_id: &record.kb_id,
            sharepoint_site_id: record.sharepoint_site_id.as_deref(),
            sharepoint_list_id: record.sharepoint_list_id.as_deref(),
            question_field: record.question_field.as_deref(),
            answer_fields: record.answer_fields.as_deref(),
        }
    }
}

fn check_refresh_status(status: StatusCode, body: &str) -> CoreResult<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(CoreError::Refresh(format!(
        "갱신 HTTP 상태 오류: status={}, body={}",
        status, body
    )))
}

fn parse_refresh_response(body: &str, completed_at: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(completed_at);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|error| format!("JSON 파싱 실패: {}", error))?;

    match value.get("refreshed_at") {
        None | Some(Value::Null) => Ok(completed_at),
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|error| format!("refreshed_at 시각 형식 오류: {}", error)),
        Some(_) => Err("refreshed_at은 RFC3339 문자열이어야 합니다".to_string()),
    }
}
