use chrono::Duration;
use rstest::rstest;

use kb_refresh::core::due_policy::{due_status, is_due, DueStatus, SkipReason};
use kb_refresh::core::record::{KnowledgeBaseRecord, NEVER_REFRESHED};

use crate::support::{fixed_now, record_refreshed_hours_ago};

#[rstest]
#[case(25, 24, true)]
#[case(23, 24, false)]
#[case(24, 24, false)]
#[case(2, 1, true)]
#[case(0, 1, false)]
#[case(10_000, 168, true)]
fn strict_threshold(#[case] hours_ago: i64, #[case] frequency: u32, #[case] expected: bool) {
    let record = record_refreshed_hours_ago("kb", hours_ago, frequency);
    assert_eq!(is_due(&record, fixed_now()), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(100_000)]
fn disabled_frequency_is_never_due(#[case] hours_ago: i64) {
    let record = record_refreshed_hours_ago("kb", hours_ago, 0);
    assert_eq!(due_status(&record, fixed_now()), DueStatus::Skip(SkipReason::Disabled));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(u32::MAX)]
fn never_refreshed_is_never_due(#[case] frequency: u32) {
    let record = KnowledgeBaseRecord::new("kb", NEVER_REFRESHED, frequency);
    assert_eq!(due_status(&record, fixed_now()), DueStatus::Skip(SkipReason::NeverRefreshed));
}

#[test]
fn one_second_past_boundary_is_due() {
    let mut record = record_refreshed_hours_ago("kb", 24, 24);
    assert!(!is_due(&record, fixed_now()));

    record.last_refresh_at -= Duration::seconds(1);
    assert!(is_due(&record, fixed_now()));
}

#[test]
fn not_yet_due_reports_next_due_time() {
    let record = record_refreshed_hours_ago("kb", 23, 24);
    assert_eq!(
        due_status(&record, fixed_now()),
        DueStatus::Skip(SkipReason::NotYetDue {
            next_due_at: fixed_now() + Duration::hours(1)
        })
    );
}

#[test]
fn overflowing_threshold_is_never_due() {
    let record = KnowledgeBaseRecord::new("kb", chrono::DateTime::<chrono::Utc>::MAX_UTC - Duration::hours(1), 24);
    assert!(matches!(
        due_status(&record, fixed_now()),
        DueStatus::Skip(SkipReason::NotYetDue { .. })
    ));
}
