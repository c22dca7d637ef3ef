use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const SUCCESS_MESSAGE: &str = "Info collected successfully";
pub const FAILURE_MESSAGE: &str = "Error collecting info";

// Request payload for collecting info. Any JSON type is accepted for `info`.
#[derive(Debug)]
pub struct CollectInfoRequest {
    pub info: Option<Value>,
}

// `info` is only ever read as a key of a JSON object. An array body carries
// no keys, so it yields no value instead of being matched by position.
impl<'de> Deserialize<'de> for CollectInfoRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CollectInfoRequestVisitor)
    }
}

struct CollectInfoRequestVisitor;

impl<'de> Visitor<'de> for CollectInfoRequestVisitor {
    type Value = CollectInfoRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object or array")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut info = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "info" {
                // Repeated keys keep the last value.
                info = map.next_value::<Option<Value>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(CollectInfoRequest { info })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(CollectInfoRequest { info: None })
    }
}

// Response payload returned once the info has been recorded.
#[derive(Debug, Serialize)]
pub struct CollectInfoResponse {
    pub message: String,
    pub data: Value,
}

// Error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}
