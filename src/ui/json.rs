use std::io::{self, Write};

use serde_json::json;

use deploy_manager::{ActionReport, ConfigWarning};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn config_warning_event(warning: &ConfigWarning) -> serde_json::Value {
    json!({
        "event": "config_warning",
        "key": warning.key,
        "file": warning.file.display().to_string(),
        "line": warning.line,
        "suggestion": warning.suggestion,
    })
}

pub fn result_event(report: &ActionReport) -> serde_json::Value {
    let mut event = serde_json::to_value(report).unwrap_or_else(|_| json!({}));
    if let Some(map) = event.as_object_mut() {
        map.insert("event".to_string(), json!("result"));
    }
    event
}
