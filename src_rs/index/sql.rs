// 목적:
// - SQL 관련 공통 유틸리티를 제공한다.
//
// 설명:
// - 동적 테이블명 검증과 투영 컬럼 목록 생성 등 DB 안전성 경계를 담당한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/index/postgres_catalog.rs

use crate::core::errors::{CoreError, CoreResult};
use crate::core::record::KnowledgeBaseField;

/// 테이블 식별자의 허용 문자를 검증한다.
pub fn validate_identifier(value: &str, field_name: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 비어 있을 수 없습니다",
            field_name
        )));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(CoreError::InvalidConfig(format!(
            "{}에는 영문/숫자/밑줄만 사용할 수 있습니다: {}",
            field_name, value
        )));
    }

    Ok(())
}

/// kb_id를 맨 앞에 두고 요청 필드를 중복 없이 이어 붙인 SELECT 컬럼 목록을 만든다.
pub fn projection_columns(fields: &[KnowledgeBaseField]) -> String {
    let mut columns = vec!["kb_id"];
    for field in fields {
        let column = field.column_name();
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
    columns.join(", ")
}
