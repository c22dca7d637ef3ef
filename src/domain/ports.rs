use serde_json::Value;

// Port for the side-effecting log sink that receives collected info.
// `None` means the client did not send an `info` value.
pub trait InfoSink: Send + Sync {
    fn record(&self, info: Option<&Value>) -> Result<(), String>;
}

impl<T> InfoSink for std::sync::Arc<T>
where
    T: InfoSink + ?Sized,
{
    fn record(&self, info: Option<&Value>) -> Result<(), String> {
        (**self).record(info)
    }
}
