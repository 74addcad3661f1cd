use crate::{
    contact::SubmissionRecord,
    logging::{log_event, LogLevel},
};
use serde_json::json;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage rejected write to `{key}`")]
    WriteRejected { key: String },
    #[error("could not encode submissions: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct SubmissionLog {
    store: Rc<dyn KeyValueStore>,
    key: String,
    log_level: LogLevel,
}

impl SubmissionLog {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>, log_level: LogLevel) -> Self {
        Self {
            store,
            key: key.into(),
            log_level,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored records in insertion order. A missing or unparsable value reads
    /// as an empty log.
    pub fn records(&self) -> Vec<SubmissionRecord> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(error) => {
                log_event(
                    self.log_level,
                    LogLevel::Warn,
                    "submission_log_unreadable",
                    json!({
                        "key": self.key,
                        "error": error.to_string(),
                    }),
                );
                Vec::new()
            }
        }
    }

    pub fn append(&self, record: SubmissionRecord) -> Result<usize, StorageError> {
        let mut records = self.records();
        records.push(record);

        let encoded = serde_json::to_string(&records)?;
        self.store.set(&self.key, &encoded)?;
        Ok(records.len())
    }
}
