use serde_json::Value;

use crate::domain::errors::CollectInfoError;
use crate::domain::ports::InfoSink;

// Result returned by the collect-info use case.
#[derive(Debug)]
pub struct CollectedInfo {
    // Value echoed back to the caller; `Null` when nothing was sent.
    pub data: Value,
}

// Collect-info use case with injected dependencies.
pub struct CollectInfoUseCase<S> {
    pub sink: S,
}

impl<S> CollectInfoUseCase<S>
where
    S: InfoSink,
{
    pub fn execute(&self, info: Option<Value>) -> Result<CollectedInfo, CollectInfoError> {
        // No presence or type checks: whatever arrived is recorded as-is.
        self.sink
            .record(info.as_ref())
            .map_err(CollectInfoError::Sink)?;

        Ok(CollectedInfo {
            data: info.unwrap_or(Value::Null),
        })
    }
}
