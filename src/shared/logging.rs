use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Append-only JSON-lines event log. A log without a path drops every event.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn append(&self, level: &str, event: &str, message: &str, fields: &[(&str, Value)]) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let mut payload = Map::new();
        payload.insert("timestamp".to_string(), Value::from(now_secs()));
        payload.insert("level".to_string(), Value::String(level.to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));
        payload.insert("message".to_string(), Value::String(message.to_string()));
        for (key, value) in fields {
            payload.insert((*key).to_string(), value.clone());
        }

        let Ok(line) = serde_json::to_string(&payload) else {
            return;
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };
        let _ = writeln!(file, "{line}");
    }

    pub fn info(&self, event: &str, message: &str, fields: &[(&str, Value)]) {
        self.append("info", event, message, fields);
    }

    pub fn debug(&self, event: &str, message: &str, fields: &[(&str, Value)]) {
        self.append("debug", event, message, fields);
    }

    pub fn warn(&self, event: &str, message: &str, fields: &[(&str, Value)]) {
        self.append("warn", event, message, fields);
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_appends_json_lines_with_extra_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs/dirbind.log");
        let log = EventLog::to_path(&path);

        log.info("query_issued", "checking group", &[("seq", Value::from(3))]);
        log.warn("query_failed", "oracle down", &[]);

        let raw = fs::read_to_string(&path).expect("read log");
        let lines: Vec<Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "query_issued");
        assert_eq!(lines[0]["seq"], 3);
        assert_eq!(lines[1]["level"], "warn");
    }

    #[test]
    fn disabled_event_log_writes_nothing() {
        let log = EventLog::disabled();
        assert!(log.path().is_none());
        log.info("query_issued", "ignored", &[]);
    }
}
