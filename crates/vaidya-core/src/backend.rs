use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, VaidyaError};
use crate::models::{ChatReply, ChatRequest, ChatTurn, FilterOptions, QueryFilters, SearchResponse};
use crate::text::dedup_preserving_order;

pub const BACKEND_URL_ENV: &str = "VAIDYA_BACKEND_URL";
pub const BACKEND_TIMEOUT_MS_ENV: &str = "VAIDYA_BACKEND_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_MS: u64 = 8000;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl BackendConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BACKEND_URL_ENV)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_ms = std::env::var(BACKEND_TIMEOUT_MS_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            base_url: normalize_base_url(&base_url),
            timeout_ms,
        }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout_ms,
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Blocking HTTP client for the remedy knowledge backend.
#[derive(Clone)]
pub struct KnowledgeBackend {
    config: BackendConfig,
    http: Client,
}

impl std::fmt::Debug for KnowledgeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnowledgeBackend")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl KnowledgeBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn health(&self) -> Result<bool> {
        let url = format!("{}/filters", self.config.base_url);
        let resp = self.http.get(url).send()?;
        Ok(resp.status().is_success())
    }

    /// Selection-widget values, deduplicated before display.
    pub fn filter_options(&self) -> Result<FilterOptions> {
        let url = format!("{}/filters", self.config.base_url);
        let resp = self.http.get(url).send()?;
        if !resp.status().is_success() {
            return Err(VaidyaError::Backend(format!(
                "filter request failed with status {}",
                resp.status()
            )));
        }
        let options = resp.json::<FilterOptions>()?;
        Ok(FilterOptions {
            diseases: dedup_preserving_order(options.diseases),
            ingredients: dedup_preserving_order(options.ingredients),
        })
    }

    /// Run one search. An absent filter dimension is left off the query
    /// string so the backend does not apply it.
    pub fn search(&self, filters: &QueryFilters) -> Result<SearchResponse> {
        let url = format!("{}/search/filters", self.config.base_url);
        let mut request = self.http.get(url);
        if let Some(disease) = &filters.disease {
            request = request.query(&[("disease", disease.as_str())]);
        }
        if !filters.ingredients.is_empty() {
            request = request.query(&[("ingredients", filters.ingredients.join(",").as_str())]);
        }

        let resp = request.send()?;
        if !resp.status().is_success() {
            return Err(VaidyaError::Backend(format!(
                "search request failed with status {}",
                resp.status()
            )));
        }
        Ok(resp.json::<SearchResponse>()?)
    }

    pub fn chat(&self, question: &str, history: &[ChatTurn]) -> Result<ChatReply> {
        let url = format!("{}/chat", self.config.base_url);
        let body = ChatRequest {
            question: question.to_string(),
            chat_history: history.to_vec(),
        };
        let resp = self.http.post(url).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(VaidyaError::Backend(format!(
                "chat request failed with status {}",
                resp.status()
            )));
        }
        Ok(resp.json::<ChatReply>()?)
    }
}
