// 목적:
// - 스케줄러 테스트용 인메모리 협력자 더블을 제공한다.
//
// 참조:
// - src_rs/core/collaborators.rs

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use kb_refresh::core::collaborators::{
    EventReporter, KnowledgeBaseCatalog, KnowledgeBaseRefresher, RefreshReceipt,
};
use kb_refresh::core::errors::{CoreError, CoreResult};
use kb_refresh::core::record::{KnowledgeBaseField, KnowledgeBaseRecord};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn record_refreshed_hours_ago(kb_id: &str, hours_ago: i64, frequency: u32) -> KnowledgeBaseRecord {
    KnowledgeBaseRecord::new(kb_id, fixed_now() - Duration::hours(hours_ago), frequency)
}

#[derive(Default)]
pub struct InMemoryCatalog {
    records: Vec<KnowledgeBaseRecord>,
    unavailable: Option<String>,
    reject_write_for: HashSet<String>,
    pub requested_fields: Mutex<Vec<Vec<KnowledgeBaseField>>>,
    pub written: Mutex<Vec<(String, DateTime<Utc>)>>,
}

impl InMemoryCatalog {
    pub fn with_records(records: Vec<KnowledgeBaseRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            unavailable: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn rejecting_write_for(mut self, kb_id: &str) -> Self {
        self.reject_write_for.insert(kb_id.to_string());
        self
    }
}

#[async_trait]
impl KnowledgeBaseCatalog for InMemoryCatalog {
    async fn fetch_all(&self, fields: &[KnowledgeBaseField]) -> CoreResult<Vec<KnowledgeBaseRecord>> {
        self.requested_fields.lock().unwrap().push(fields.to_vec());
        match &self.unavailable {
            Some(message) => Err(CoreError::CatalogUnavailable(message.clone())),
            None => Ok(self.records.clone()),
        }
    }

    async fn record_refresh(&self, kb_id: &str, refreshed_at: DateTime<Utc>) -> CoreResult<()> {
        if self.reject_write_for.contains(kb_id) {
            return Err(CoreError::CatalogUnavailable("write rejected".to_string()));
        }
        self.written
            .lock()
            .unwrap()
            .push((kb_id.to_string(), refreshed_at));
        Ok(())
    }
}

#[derive(Default)]
pub struct ScriptedRefresher {
    failures: HashMap<String, String>,
    panics: HashSet<String>,
    refreshed_at: Option<DateTime<Utc>>,
    pub attempted: Mutex<Vec<String>>,
}

impl ScriptedRefresher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, kb_id: &str, message: &str) -> Self {
        self.failures.insert(kb_id.to_string(), message.to_string());
        self
    }

    pub fn panicking(mut self, kb_id: &str) -> Self {
        self.panics.insert(kb_id.to_string());
        self
    }

    pub fn reporting(mut self, refreshed_at: DateTime<Utc>) -> Self {
        self.refreshed_at = Some(refreshed_at);
        self
    }

    pub fn attempted(&self) -> Vec<String> {
        self.attempted.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeBaseRefresher for ScriptedRefresher {
    async fn refresh(&self, record: &KnowledgeBaseRecord) -> CoreResult<RefreshReceipt> {
        self.attempted.lock().unwrap().push(record.kb_id.clone());

        if self.panics.contains(&record.kb_id) {
            panic!("refresher exploded for {}", record.kb_id);
        }
        if let Some(message) = self.failures.get(&record.kb_id) {
            return Err(CoreError::Refresh(message.clone()));
        }

        Ok(RefreshReceipt {
            refreshed_at: self.refreshed_at.unwrap_or_else(fixed_now),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Info(String),
    Warning { message: String, error: String },
    Event { name: String, properties: BTreeMap<String, String> },
}

#[derive(Default)]
pub struct RecordingReporter {
    entries: Mutex<Vec<Reported>>,
}

impl RecordingReporter {
    pub fn entries(&self) -> Vec<Reported> {
        self.entries.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<(String, BTreeMap<String, String>)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Reported::Event { name, properties } => Some((name, properties)),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<(String, String)> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Reported::Warning { message, error } => Some((message, error)),
                _ => None,
            })
            .collect()
    }

    pub fn infos_mentioning(&self, needle: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Reported::Info(message) if message.contains(needle) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl EventReporter for RecordingReporter {
    fn log_info(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(Reported::Info(message.to_string()));
    }

    fn log_warning(&self, message: &str, error_message: &str) {
        self.entries.lock().unwrap().push(Reported::Warning {
            message: message.to_string(),
            error: error_message.to_string(),
        });
    }

    fn log_event(&self, name: &str, properties: &BTreeMap<String, String>) {
        self.entries.lock().unwrap().push(Reported::Event {
            name: name.to_string(),
            properties: properties.clone(),
        });
    }
}
