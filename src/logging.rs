use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Emits one JSON line: `ts`, `level`, `event`, then the caller's fields.
/// Events below `min_level` are dropped.
pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < min_level {
        return;
    }

    let line = event_payload(chrono::Utc::now().timestamp(), level, event, fields);
    emit(&line.to_string());
}

fn event_payload(ts: i64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_warn() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert_eq!(LogLevel::parse(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn payload_carries_envelope_and_fields() {
        let payload = event_payload(
            1_700_000_000,
            LogLevel::Info,
            "contact_submit_accepted",
            json!({ "records": 3 }),
        );

        assert_eq!(payload["ts"], json!(1_700_000_000));
        assert_eq!(payload["level"], json!("info"));
        assert_eq!(payload["event"], json!("contact_submit_accepted"));
        assert_eq!(payload["records"], json!(3));
    }

    #[test]
    fn fields_cannot_override_envelope_keys() {
        let payload = event_payload(
            1,
            LogLevel::Warn,
            "project_feed_failed",
            json!({ "event": "spoofed", "reason": "decode" }),
        );

        assert_eq!(payload["event"], json!("project_feed_failed"));
        assert_eq!(payload["reason"], json!("decode"));
    }
}
