// 목적:
// - PostgreSQL 기반 지식 베이스 카탈로그 접근을 담당한다.
//
// 설명:
// - 요청한 필드만 투영해 전체 레코드를 조회하고, 갱신 성공 시각을 기록한다.
// - 테이블명은 실행 시 검증해 SQL 주입 위험을 줄인다.
// - last_refresh_at NULL은 NEVER_REFRESHED, 음수 주기는 0(비활성)으로 읽는다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/sql.rs
// - src_rs/core/collaborators.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::core::collaborators::KnowledgeBaseCatalog;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::record::{KnowledgeBaseField, KnowledgeBaseRecord, NEVER_REFRESHED};
use crate::index::sql::{projection_columns, validate_identifier};

fn default_catalog_table() -> String {
    "kb_info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfigPayload {
    pub dsn: String,
    #[serde(default = "default_catalog_table")]
    pub catalog_table: String,
    pub pool_min: u32,
    pub pool_max: u32,
    pub connect_timeout_ms: u64,
    pub statement_timeout_ms: u64,
}

pub struct PostgresKnowledgeBaseCatalog {
    pool: PgPool,
    catalog_table: String,
}

impl PostgresKnowledgeBaseCatalog {
    pub async fn new(config: &PostgresConfigPayload) -> CoreResult<Self> {
        if config.dsn.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "postgres.dsn은 비어 있을 수 없습니다".to_string(),
            ));
        }

        validate_identifier(&config.catalog_table, "postgres.catalog_table")?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min)
            .max_connections(config.pool_max.max(config.pool_min).max(1))
            .acquire_timeout(std::time::Duration::from_millis(
                config.connect_timeout_ms.max(1),
            ))
            .connect_with(connect_options(config)?)
            .await
            .map_err(|error| CoreError::CatalogUnavailable(format!("Postgres 연결 실패: {}", error)))?;

        Ok(Self {
            pool,
            catalog_table: config.catalog_table.clone(),
        })
    }
}

/// 풀의 모든 연결이 같은 statement_timeout으로 열리도록 시작 옵션에 싣는다.
fn connect_options(config: &PostgresConfigPayload) -> CoreResult<PgConnectOptions> {
    let options = config
        .dsn
        .parse::<PgConnectOptions>()
        .map_err(|error| CoreError::InvalidConfig(format!("postgres.dsn 형식 오류: {}", error)))?;

    Ok(options.options([(
        "statement_timeout",
        config.statement_timeout_ms.max(1).to_string(),
    )]))
}

#[async_trait]
impl KnowledgeBaseCatalog for PostgresKnowledgeBaseCatalog {
    async fn fetch_all(&self, fields: &[KnowledgeBaseField]) -> CoreResult<Vec<KnowledgeBaseRecord>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY kb_id",
            projection_columns(fields),
            self.catalog_table
        );

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::CatalogUnavailable(format!("카탈로그 조회 실패: {}", error)))?;

        rows.into_iter()
            .map(|row| map_record_row(row, fields))
            .collect::<CoreResult<Vec<_>>>()
    }

    async fn record_refresh(&self, kb_id: &str, refreshed_at: DateTime<Utc>) -> CoreResult<()> {
        let sql = format!(
            "UPDATE {} SET last_refresh_at = $2 WHERE kb_id = $1",
            self.catalog_table
        );

        let result = sqlx::query(&sql)
            .bind(kb_id)
            .bind(refreshed_at)
            .execute(&self.pool)
            .await
            .map_err(|error| {
                CoreError::CatalogUnavailable(format!("갱신 시각 기록 실패: {}", error))
            })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::InvalidInput(format!(
                "카탈로그에 없는 지식 베이스입니다: {}",
                kb_id
            )));
        }

        Ok(())
    }
}

fn map_record_row(row: PgRow, fields: &[KnowledgeBaseField]) -> CoreResult<KnowledgeBaseRecord> {
    let kb_id = row
        .try_get::<String, _>("kb_id")
        .map_err(|error| parse_error("kb_id", error))?;

    let mut record = KnowledgeBaseRecord::new(kb_id, NEVER_REFRESHED, 0);
    for field in fields {
        let column = field.column_name();
        match field {
            KnowledgeBaseField::LastRefreshDateTime => {
                let raw = row
                    .try_get::<Option<DateTime<Utc>>, _>(column)
                    .map_err(|error| parse_error(column, error))?;
                record.last_refresh_at = last_refresh_from_column(raw);
            }
            KnowledgeBaseField::RefreshFrequencyInHours => {
                let raw = row
                    .try_get::<Option<i32>, _>(column)
                    .map_err(|error| parse_error(column, error))?;
                record.refresh_frequency_hours = frequency_from_column(raw);
            }
            KnowledgeBaseField::SharePointSiteId => {
                record.sharepoint_site_id = try_get_text(&row, column)?;
            }
            KnowledgeBaseField::SharePointListId => {
                record.sharepoint_list_id = try_get_text(&row, column)?;
            }
            KnowledgeBaseField::QuestionField => {
                record.question_field = try_get_text(&row, column)?;
            }
            KnowledgeBaseField::AnswerFields => {
                record.answer_fields = try_get_text(&row, column)?;
            }
        }
    }

    Ok(record)
}

/// NULL은 한 번도 갱신되지 않은 레코드다.
fn last_refresh_from_column(raw: Option<DateTime<Utc>>) -> DateTime<Utc> {
    raw.unwrap_or(NEVER_REFRESHED)
}

/// NULL과 음수 주기는 자동 갱신 비활성(0)으로 읽는다.
fn frequency_from_column(raw: Option<i32>) -> u32 {
    raw.and_then(|value| u32::try_from(value).ok()).unwrap_or(0)
}

fn try_get_text(row: &PgRow, column: &str) -> CoreResult<Option<String>> {
    row.try_get::<Option<String>, _>(column)
        .map_err(|error| parse_error(column, error))
}

fn parse_error(column: &str, error: sqlx::Error) -> CoreError {
    CoreError::CatalogUnavailable(format!("카탈로그.{} 파싱 실패: {}", column, error))
}
