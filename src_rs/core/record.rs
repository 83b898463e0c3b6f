// 목적:
// - 스케줄러가 읽는 지식 베이스 레코드 스냅샷 모델을 정의한다.
//
// 설명:
// - last_refresh_at이 NEVER_REFRESHED이면 한 번도 갱신되지 않은 레코드다.
// - 원천 위치 필드(SharePoint 사이트/리스트, 질문/답변 필드)는 해석하지 않고
//   갱신기에 그대로 넘긴다.
//
// 디자인 패턴:
// - 읽기 전용 스냅샷(Read-only Snapshot) + 투영(Projection).
//
// 참조:
// - src_rs/core/due_policy.rs
// - src_rs/index/postgres_catalog.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// "한 번도 갱신되지 않음"을 뜻하는 예약 시각이다.
pub const NEVER_REFRESHED: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseRecord {
    pub kb_id: String,
    pub last_refresh_at: DateTime<Utc>,
    pub refresh_frequency_hours: u32,
    pub sharepoint_site_id: Option<String>,
    pub sharepoint_list_id: Option<String>,
    pub question_field: Option<String>,
    pub answer_fields: Option<String>,
}

impl KnowledgeBaseRecord {
    /// 원천 위치 필드가 비어 있는 레코드를 만든다.
    pub fn new(kb_id: impl Into<String>, last_refresh_at: DateTime<Utc>, refresh_frequency_hours: u32) -> Self {
        Self {
            kb_id: kb_id.into(),
            last_refresh_at,
            refresh_frequency_hours,
            sharepoint_site_id: None,
            sharepoint_list_id: None,
            question_field: None,
            answer_fields: None,
        }
    }

    pub fn is_never_refreshed(&self) -> bool {
        self.last_refresh_at == NEVER_REFRESHED
    }

    pub fn is_refresh_disabled(&self) -> bool {
        self.refresh_frequency_hours == 0
    }
}

/// 카탈로그에서 투영 가능한 컬럼 목록이다. kb_id는 항상 포함된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnowledgeBaseField {
    LastRefreshDateTime,
    RefreshFrequencyInHours,
    SharePointSiteId,
    SharePointListId,
    QuestionField,
    AnswerFields,
}

impl KnowledgeBaseField {
    /// 기한 판정과 갱신 호출에 필요한 최소 투영이다.
    pub const REFRESH_PROJECTION: [KnowledgeBaseField; 6] = [
        KnowledgeBaseField::LastRefreshDateTime,
        KnowledgeBaseField::RefreshFrequencyInHours,
        KnowledgeBaseField::SharePointListId,
        KnowledgeBaseField::QuestionField,
        KnowledgeBaseField::AnswerFields,
        KnowledgeBaseField::SharePointSiteId,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            KnowledgeBaseField::LastRefreshDateTime => "last_refresh_at",
            KnowledgeBaseField::RefreshFrequencyInHours => "refresh_frequency_hours",
            KnowledgeBaseField::SharePointSiteId => "sharepoint_site_id",
            KnowledgeBaseField::SharePointListId => "sharepoint_list_id",
            KnowledgeBaseField::QuestionField => "question_field",
            KnowledgeBaseField::AnswerFields => "answer_fields",
        }
    }
}
