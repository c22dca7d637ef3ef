use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::ports::InfoSink;

// Fake sink that keeps every recorded value, or fails on demand.
#[derive(Clone)]
pub(crate) struct RecordingSink {
    records: Arc<Mutex<Vec<Option<Value>>>>,
    failure: Option<String>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.into()),
        }
    }

    pub(crate) fn recorded(&self) -> Vec<Option<Value>> {
        let guard = self.records.lock().expect("records mutex poisoned");
        guard.clone()
    }
}

impl InfoSink for RecordingSink {
    fn record(&self, info: Option<&Value>) -> Result<(), String> {
        if let Some(message) = &self.failure {
            return Err(message.clone());
        }

        let mut guard = self.records.lock().expect("records mutex poisoned");
        guard.push(info.cloned());
        Ok(())
    }
}
