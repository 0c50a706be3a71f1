use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::backend::KnowledgeBackend;
use crate::chat::compose_final_answer;
use crate::error::{Result, VaidyaError};
use crate::log::{append_request_log, read_request_log};
use crate::models::{ChatTurn, FilterOptions, QueryFilters, RequestLogEntry, SearchResponse};
use crate::screen::{SearchOutcome, SearchScreen, compose};
use crate::transcript::ChatTranscript;

/// Application facade: the knowledge backend plus the state directory that
/// holds the chat transcript and request log.
#[derive(Clone)]
pub struct Vaidya {
    root: PathBuf,
    backend: KnowledgeBackend,
}

impl std::fmt::Debug for Vaidya {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vaidya")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Vaidya {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_backend(root, KnowledgeBackend::from_env()?)
    }

    pub fn with_backend(root: impl Into<PathBuf>, backend: KnowledgeBackend) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root, backend })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn backend(&self) -> &KnowledgeBackend {
        &self.backend
    }

    pub fn backend_health(&self) -> Result<bool> {
        self.backend.health()
    }

    #[must_use]
    pub fn transcript(&self) -> ChatTranscript {
        ChatTranscript::new(&self.root)
    }

    pub fn recent_requests(&self, limit: usize) -> Result<Vec<RequestLogEntry>> {
        read_request_log(&self.root, limit)
    }

    pub fn filter_options(&self) -> Result<FilterOptions> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        match self.backend.filter_options() {
            Ok(options) => {
                self.try_log_request(RequestLogEntry {
                    request_id,
                    operation: "filters".to_string(),
                    status: "ok".to_string(),
                    latency_ms: started.elapsed().as_millis(),
                    created_at: Utc::now().to_rfc3339(),
                    error_code: None,
                    error_message: None,
                    details: Some(json!({
                        "diseases": options.diseases.len(),
                        "ingredients": options.ingredients.len(),
                    })),
                });
                Ok(options)
            }
            Err(err) => {
                self.log_failure(request_id, "filters", started, &err, None);
                Err(err)
            }
        }
    }

    /// Run one search and compose the screen for it. Total: transport and
    /// parse failures become the uniform error screen instead of an `Err`,
    /// so the caller always has something renderable. Empty filters skip the
    /// network round trip entirely and compose the prompt placeholder.
    #[must_use]
    pub fn run_search(&self, filters: &QueryFilters) -> SearchScreen {
        if filters.is_empty() {
            return compose(
                filters,
                &SearchOutcome::Response(SearchResponse::default()),
            );
        }

        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let outcome = match self.backend.search(filters) {
            Ok(response) => {
                self.try_log_request(RequestLogEntry {
                    request_id,
                    operation: "search".to_string(),
                    status: "ok".to_string(),
                    latency_ms: started.elapsed().as_millis(),
                    created_at: Utc::now().to_rfc3339(),
                    error_code: None,
                    error_message: None,
                    details: Some(json!({
                        "disease": filters.disease,
                        "ingredients": filters.ingredients.len(),
                        "disease_matches": response.disease_matches.len(),
                        "remedies_using_ingredients": response.remedies_using_ingredients.len(),
                    })),
                });
                SearchOutcome::Response(response)
            }
            Err(err) => {
                let details = json!({
                    "disease": filters.disease,
                    "ingredients": filters.ingredients.len(),
                });
                self.log_failure(request_id, "search", started, &err, Some(details));
                SearchOutcome::Failed(err.to_string())
            }
        };
        compose(filters, &outcome)
    }

    /// Ask the assistant one question, folding the reply's lookup header and
    /// remedy sections into the stored answer and appending the turn to the
    /// persistent transcript.
    pub fn chat(&self, question: &str) -> Result<ChatTurn> {
        let question = question.trim();
        if question.is_empty() {
            return Err(VaidyaError::Validation(
                "chat question cannot be empty".to_string(),
            ));
        }

        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let output = (|| -> Result<ChatTurn> {
            let history = self.transcript().load()?;
            let reply = self.backend.chat(question, &history)?;
            let turn = ChatTurn {
                question: question.to_string(),
                answer: compose_final_answer(&reply),
            };
            self.transcript().append(&turn)?;
            Ok(turn)
        })();

        match output {
            Ok(turn) => {
                self.try_log_request(RequestLogEntry {
                    request_id,
                    operation: "chat".to_string(),
                    status: "ok".to_string(),
                    latency_ms: started.elapsed().as_millis(),
                    created_at: Utc::now().to_rfc3339(),
                    error_code: None,
                    error_message: None,
                    details: Some(json!({ "question_chars": question.len() })),
                });
                Ok(turn)
            }
            Err(err) => {
                self.log_failure(request_id, "chat", started, &err, None);
                Err(err)
            }
        }
    }

    fn log_failure(
        &self,
        request_id: String,
        operation: &str,
        started: Instant,
        err: &VaidyaError,
        details: Option<serde_json::Value>,
    ) {
        self.try_log_request(RequestLogEntry {
            request_id,
            operation: operation.to_string(),
            status: "error".to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            error_code: Some(err.code().to_string()),
            error_message: Some(err.to_string()),
            details,
        });
    }

    // Logging is diagnostics; a failed append must never fail the request.
    fn try_log_request(&self, entry: RequestLogEntry) {
        let _ = append_request_log(&self.root, &entry);
    }
}
