use serde_json::Value;
use std::sync::Arc;

use crate::domain::ports::InfoSink;

// Shared application state for the HTTP handlers.
pub struct AppState {
    // We use Arc<dyn Trait> so tests can swap in a fake sink.
    pub sink: Arc<dyn InfoSink>,
    // Upper bound for JSON request bodies, in bytes.
    pub body_limit_bytes: usize,
}

// Log sink adapter that emits collected info as tracing events.
#[derive(Clone, Copy, Default)]
pub struct TracingInfoSink;

impl InfoSink for TracingInfoSink {
    fn record(&self, info: Option<&Value>) -> Result<(), String> {
        match info {
            Some(info) => tracing::info!(%info, "info collected"),
            None => tracing::info!("info collected without a value"),
        }
        Ok(())
    }
}
