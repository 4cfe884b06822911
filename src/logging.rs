use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

use crate::config::AnimationConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
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
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Emits one flat JSON line when `level` passes the configured threshold.
pub fn log_event(config: &AnimationConfig, level: LogLevel, event: &str, fields: Value) {
    if level < config.log_level {
        return;
    }

    let payload = event_payload(now_unix_seconds(), level, event, fields);
    emit(level, &payload.to_string());
}

fn event_payload(ts: u64, level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Debug => gloo::console::debug!(line),
        LogLevel::Info => gloo::console::info!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn debug_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn parse_accepts_mixed_case_and_whitespace() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn payload_merges_extra_fields_after_envelope() {
        let payload = event_payload(
            1_700_000_000,
            LogLevel::Info,
            "section_revealed",
            json!({ "section": "skills", "ratio": 0.25 }),
        );

        assert_eq!(
            payload,
            json!({
                "ts": 1_700_000_000u64,
                "level": "info",
                "event": "section_revealed",
                "section": "skills",
                "ratio": 0.25,
            })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Debug, "rotation_stopped", json!(["ignored"]));

        assert_eq!(payload, json!({ "ts": 1, "level": "debug", "event": "rotation_stopped" }));
    }
}
