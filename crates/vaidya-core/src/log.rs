use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::jsonl::{append_jsonl_line, parse_jsonl_tolerant};
use crate::models::RequestLogEntry;

const REQUEST_LOG_FILE: &str = "requests.jsonl";

pub(crate) fn append_request_log(root: &Path, entry: &RequestLogEntry) -> Result<()> {
    append_jsonl_line(&root.join(REQUEST_LOG_FILE), entry)
}

/// Most recent request-log entries, newest first. Malformed lines are
/// skipped: the log is diagnostics, not a source of truth.
pub fn read_request_log(root: &Path, limit: usize) -> Result<Vec<RequestLogEntry>> {
    let path = root.join(REQUEST_LOG_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    let mut entries = parse_jsonl_tolerant::<RequestLogEntry>(&raw).items;
    entries.reverse();
    entries.truncate(limit);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(operation: &str, status: &str) -> RequestLogEntry {
        RequestLogEntry {
            request_id: format!("req-{operation}"),
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: 12,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            error_code: None,
            error_message: None,
            details: None,
        }
    }

    #[test]
    fn read_returns_newest_first_up_to_limit() {
        let temp = tempfile::tempdir().expect("tempdir");
        for operation in ["filters", "search", "chat"] {
            append_request_log(temp.path(), &entry(operation, "ok")).expect("append");
        }

        let entries = read_request_log(temp.path(), 2).expect("read");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, "chat");
        assert_eq!(entries[1].operation, "search");
    }

    #[test]
    fn missing_log_reads_as_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(
            read_request_log(temp.path(), 10)
                .expect("read")
                .is_empty()
        );
    }
}
