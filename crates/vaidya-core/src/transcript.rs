use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::jsonl::{append_jsonl_line, jsonl_all_lines_invalid, parse_jsonl_tolerant};
use crate::models::ChatTurn;

const TRANSCRIPT_FILE: &str = "transcript.jsonl";

/// Chat history persisted as one JSONL line per turn under the Vaidya root,
/// so a new invocation continues the conversation.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    path: PathBuf,
}

impl ChatTranscript {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(TRANSCRIPT_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all stored turns. Individual malformed lines are skipped; a file
    /// where every line is malformed is reported as an error rather than
    /// silently treated as an empty history.
    pub fn load(&self) -> Result<Vec<ChatTurn>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let outcome = parse_jsonl_tolerant::<ChatTurn>(&raw);
        if outcome.items.is_empty() && outcome.skipped_lines > 0 {
            return Err(jsonl_all_lines_invalid(
                "transcript",
                outcome.skipped_lines,
                outcome.first_error.as_ref(),
            ));
        }
        Ok(outcome.items)
    }

    pub fn append(&self, turn: &ChatTurn) -> Result<()> {
        append_jsonl_line(&self.path, turn)
    }

    /// Remove the stored history. Clearing an absent transcript is a no-op.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(question: &str, answer: &str) -> ChatTurn {
        ChatTurn {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn transcript_round_trips_turns_in_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let transcript = ChatTranscript::new(temp.path());
        assert!(transcript.load().expect("empty load").is_empty());

        transcript.append(&turn("q1", "a1")).expect("append 1");
        transcript.append(&turn("q2", "a2")).expect("append 2");

        let turns = transcript.load().expect("load");
        assert_eq!(turns, vec![turn("q1", "a1"), turn("q2", "a2")]);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let temp = tempfile::tempdir().expect("tempdir");
        let transcript = ChatTranscript::new(temp.path());
        transcript.append(&turn("q1", "a1")).expect("append");
        fs::write(
            transcript.path(),
            format!(
                "{}\nnot json\n",
                serde_json::to_string(&turn("q1", "a1")).expect("serialize")
            ),
        )
        .expect("write");

        let turns = transcript.load().expect("load");
        assert_eq!(turns, vec![turn("q1", "a1")]);
    }

    #[test]
    fn fully_corrupt_transcript_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let transcript = ChatTranscript::new(temp.path());
        fs::write(transcript.path(), "garbage\nmore garbage\n").expect("write");
        assert!(transcript.load().is_err());
    }

    #[test]
    fn clear_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let transcript = ChatTranscript::new(temp.path());
        transcript.append(&turn("q", "a")).expect("append");
        transcript.clear().expect("first clear");
        transcript.clear().expect("second clear");
        assert!(transcript.load().expect("load").is_empty());
    }
}
