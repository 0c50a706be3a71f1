use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, VaidyaError};

#[derive(Debug, Clone)]
pub(crate) struct JsonlParseOutcome<T> {
    pub items: Vec<T>,
    pub skipped_lines: usize,
    pub first_error: Option<(usize, String)>,
}

pub(crate) fn parse_jsonl_tolerant<T>(raw: &str) -> JsonlParseOutcome<T>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut skipped_lines = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(value) => items.push(value),
            Err(err) => {
                skipped_lines += 1;
                if first_error.is_none() {
                    first_error = Some((line_no + 1, err.to_string()));
                }
            }
        }
    }

    JsonlParseOutcome {
        items,
        skipped_lines,
        first_error,
    }
}

pub(crate) fn jsonl_all_lines_invalid(
    label: &str,
    skipped_lines: usize,
    first_error: Option<&(usize, String)>,
) -> VaidyaError {
    if let Some((line_no, message)) = first_error {
        return VaidyaError::Validation(format!(
            "{label} parse failed: skipped {skipped_lines} invalid lines (first at line {line_no}: {message})"
        ));
    }
    VaidyaError::Validation(format!(
        "{label} parse failed: skipped {skipped_lines} invalid lines"
    ))
}

pub(crate) fn append_jsonl_line<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(value)?;
    writeln!(file, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_parse_skips_invalid_lines_and_reports_first() {
        let raw = "[\"q1\",\"a1\"]\nnot json\n\n[\"q2\",\"a2\"]\n";
        let outcome = parse_jsonl_tolerant::<(String, String)>(raw);
        assert_eq!(outcome.items.len(), 2);
        assert_eq!(outcome.skipped_lines, 1);
        assert_eq!(outcome.first_error.as_ref().map(|(line, _)| *line), Some(2));
    }

    #[test]
    fn append_creates_parent_directories_and_appends() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("log.jsonl");
        append_jsonl_line(&path, &("a".to_string(), "b".to_string())).expect("first append");
        append_jsonl_line(&path, &("c".to_string(), "d".to_string())).expect("second append");

        let raw = std::fs::read_to_string(&path).expect("read");
        let outcome = parse_jsonl_tolerant::<(String, String)>(&raw);
        assert_eq!(outcome.items.len(), 2);
        assert_eq!(outcome.skipped_lines, 0);
    }
}
