// 목적:
// - 레코드가 이번 주기에 갱신 대상인지 판정한다.
//
// 설명:
// - 한 번도 갱신되지 않았거나 주기가 0인 레코드는 경과 시간과 무관하게 제외한다.
// - 마지막 갱신 + 주기(시간)가 now보다 엄격히 작을 때만 대상이다.
//
// 디자인 패턴:
// - 순수 함수 정책(Pure Policy Function).
//
// 참조:
// - src_rs/core/record.rs
// - src_rs/core/refresh_scheduler.rs

use chrono::{DateTime, Duration, Utc};

use crate::core::record::KnowledgeBaseRecord;

/// 갱신 대상이 아닌 사유다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NeverRefreshed,
    Disabled,
    NotYetDue { next_due_at: DateTime<Utc> },
}

/// 기한 판정 결과다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Due,
    Skip(SkipReason),
}

impl DueStatus {
    pub fn is_due(&self) -> bool {
        matches!(self, DueStatus::Due)
    }
}

/// 레코드의 기한 상태를 계산한다.
pub fn due_status(record: &KnowledgeBaseRecord, now: DateTime<Utc>) -> DueStatus {
    if record.is_never_refreshed() {
        return DueStatus::Skip(SkipReason::NeverRefreshed);
    }
    if record.is_refresh_disabled() {
        return DueStatus::Skip(SkipReason::Disabled);
    }

    let interval = Duration::hours(i64::from(record.refresh_frequency_hours));
    match record.last_refresh_at.checked_add_signed(interval) {
        Some(next_due_at) if next_due_at < now => DueStatus::Due,
        Some(next_due_at) => DueStatus::Skip(SkipReason::NotYetDue { next_due_at }),
        // 표현 범위를 넘는 기한은 도래하지 않는다.
        None => DueStatus::Skip(SkipReason::NotYetDue {
            next_due_at: DateTime::<Utc>::MAX_UTC,
        }),
    }
}

pub fn is_due(record: &KnowledgeBaseRecord, now: DateTime<Utc>) -> bool {
    due_status(record, now).is_due()
}
