use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::normalize_name;

/// The two orthogonal filter dimensions of one search invocation.
///
/// Values are trimmed on construction and immutable for the duration of the
/// request; emptiness of each dimension drives panel visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilters {
    #[serde(default)]
    pub disease: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl QueryFilters {
    #[must_use]
    pub fn new(disease: Option<&str>, ingredients: &[String]) -> Self {
        let disease = disease
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string);
        let ingredients = ingredients
            .iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();
        Self {
            disease,
            ingredients,
        }
    }

    /// Build filters from the wire shape: an optional disease name and an
    /// optional comma-joined ingredient list.
    #[must_use]
    pub fn from_comma_list(disease: Option<&str>, ingredients: Option<&str>) -> Self {
        let ingredients = ingredients
            .map(crate::text::split_ingredient_list)
            .unwrap_or_default();
        Self::new(disease, &ingredients)
    }

    #[must_use]
    pub fn has_disease_query(&self) -> bool {
        self.disease.is_some()
    }

    #[must_use]
    pub fn has_ingredient_query(&self) -> bool {
        !self.ingredients.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_disease_query() && !self.has_ingredient_query()
    }
}

/// A catalogued remedy as the backend returns it. Field aliases absorb the
/// legacy capitalized CSV headers still emitted on some endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemedyRecord {
    #[serde(default, alias = "Remedy Name", alias = "remedy_name")]
    pub name: String,
    #[serde(default, alias = "Preparation")]
    pub preparation: String,
    #[serde(default, alias = "Usage")]
    pub usage: String,
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// A disease row; `remedy_text` is the free-text remedy column while
/// `nested_remedies` are separately catalogued preparations tied to the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    #[serde(default, alias = "Disease", alias = "name")]
    pub disease: String,
    #[serde(default, alias = "sign_and_symptoms")]
    pub signs_and_symptoms: String,
    #[serde(default, alias = "remedy", skip_serializing_if = "Option::is_none")]
    pub remedy_text: Option<String>,
    #[serde(default, alias = "remedies", skip_serializing_if = "Option::is_none")]
    pub nested_remedies: Option<Vec<RemedyRecord>>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_coverage: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_ingredients: Option<Vec<String>>,
}

/// Per-remedy ingredient match annotation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Aggregate search reply. Every list is absent-tolerant: the backend only
/// populates the sets that the active filter dimensions produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub disease_matches: Vec<DiseaseRecord>,
    #[serde(default)]
    pub remedies_for_disease: Vec<RemedyRecord>,
    #[serde(default)]
    pub remedies_using_ingredients: Vec<RemedyRecord>,
    #[serde(default)]
    pub diseases_for_ingredients: Vec<DiseaseRecord>,
    #[serde(default)]
    pub ingredient_match_info: Vec<MatchInfo>,
    #[serde(default, alias = "query", skip_serializing_if = "Option::is_none")]
    pub echoed_query: Option<QueryFilters>,
}

impl SearchResponse {
    /// Re-key the positional match-info sequence by normalized remedy name.
    ///
    /// The wire contract correlates `ingredient_match_info` with
    /// `remedies_using_ingredients` by index; converting to a keyed map at
    /// the boundary means later reordering or filtering of either sequence
    /// cannot silently desynchronize the annotations. Trailing entries with
    /// no partner remedy are dropped.
    #[must_use]
    pub fn keyed_match_info(&self) -> HashMap<String, MatchInfo> {
        self.remedies_using_ingredients
            .iter()
            .zip(self.ingredient_match_info.iter())
            .map(|(remedy, info)| (normalize_name(&remedy.name), info.clone()))
            .collect()
    }
}

/// Selection-widget values from `GET /filters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub diseases: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// One question/answer pair. The backend wire format is a two-element array,
/// matching the page script's stored history shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
}

impl From<(String, String)> for ChatTurn {
    fn from((question, answer): (String, String)) -> Self {
        Self { question, answer }
    }
}

impl From<ChatTurn> for (String, String) {
    fn from(turn: ChatTurn) -> Self {
        (turn.question, turn.answer)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub question: String,
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatLookup {
    pub category: String,
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub lookup: Option<ChatLookup>,
    #[serde(default)]
    pub referenced_remedies: Vec<RemedyRecord>,
    #[serde(default)]
    pub suggested_remedies: Vec<RemedyRecord>,
}

/// One request-log line in `requests.jsonl` under the Vaidya root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub request_id: String,
    pub operation: String,
    pub status: String,
    pub latency_ms: u128,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_filters_trim_and_drop_empty_dimensions() {
        let filters = QueryFilters::new(
            Some("  "),
            &["  tulsi ".to_string(), String::new(), "ginger".to_string()],
        );
        assert!(!filters.has_disease_query());
        assert!(filters.has_ingredient_query());
        assert_eq!(
            filters.ingredients,
            vec!["tulsi".to_string(), "ginger".to_string()]
        );

        let empty = QueryFilters::new(None, &[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn from_comma_list_splits_and_trims_ingredients() {
        let filters = QueryFilters::from_comma_list(Some("Cough"), Some(" tulsi ,,ginger"));
        assert_eq!(filters.disease.as_deref(), Some("Cough"));
        assert_eq!(
            filters.ingredients,
            vec!["tulsi".to_string(), "ginger".to_string()]
        );
        assert!(QueryFilters::from_comma_list(None, None).is_empty());
    }

    #[test]
    fn remedy_record_accepts_legacy_capitalized_headers() {
        let raw = r#"{"Remedy Name": "Tulsi Tea", "Preparation": "boil tulsi", "Usage": "twice daily"}"#;
        let record: RemedyRecord = serde_json::from_str(raw).expect("remedy parse");
        assert_eq!(record.name, "Tulsi Tea");
        assert_eq!(record.preparation, "boil tulsi");
        assert_eq!(record.usage, "twice daily");
        assert_eq!(record.detail_url, None);
    }

    #[test]
    fn disease_record_defaults_missing_fields_to_empty() {
        let record: DiseaseRecord = serde_json::from_str(r#"{"name": "Cough"}"#).expect("parse");
        assert_eq!(record.disease, "Cough");
        assert_eq!(record.signs_and_symptoms, "");
        assert_eq!(record.remedy_text, None);
        assert!(!record.is_primary);
    }

    #[test]
    fn search_response_tolerates_absent_lists() {
        let response: SearchResponse = serde_json::from_str("{}").expect("parse");
        assert!(response.disease_matches.is_empty());
        assert!(response.ingredient_match_info.is_empty());
        assert!(response.echoed_query.is_none());
    }

    #[test]
    fn keyed_match_info_is_keyed_by_normalized_name() {
        let response = SearchResponse {
            remedies_using_ingredients: vec![
                RemedyRecord {
                    name: " Golden Milk ".to_string(),
                    ..RemedyRecord::default()
                },
                RemedyRecord {
                    name: "Tulsi Tea".to_string(),
                    ..RemedyRecord::default()
                },
            ],
            ingredient_match_info: vec![
                MatchInfo {
                    matched: vec!["turmeric".to_string()],
                    ..MatchInfo::default()
                },
                MatchInfo {
                    matched: vec!["tulsi".to_string()],
                    ..MatchInfo::default()
                },
            ],
            ..SearchResponse::default()
        };

        let keyed = response.keyed_match_info();
        assert_eq!(
            keyed.get("golden milk").map(|info| info.matched.clone()),
            Some(vec!["turmeric".to_string()])
        );
        assert_eq!(
            keyed.get("tulsi tea").map(|info| info.matched.clone()),
            Some(vec!["tulsi".to_string()])
        );
    }

    #[test]
    fn keyed_match_info_drops_trailing_unpaired_entries() {
        let response = SearchResponse {
            remedies_using_ingredients: vec![RemedyRecord {
                name: "Tulsi Tea".to_string(),
                ..RemedyRecord::default()
            }],
            ingredient_match_info: vec![MatchInfo::default(), MatchInfo::default()],
            ..SearchResponse::default()
        };
        assert_eq!(response.keyed_match_info().len(), 1);
    }

    #[test]
    fn chat_turn_round_trips_as_pair() {
        let turn = ChatTurn {
            question: "what helps a cough?".to_string(),
            answer: "tulsi tea".to_string(),
        };
        let raw = serde_json::to_string(&turn).expect("serialize");
        assert_eq!(raw, r#"["what helps a cough?","tulsi tea"]"#);
        let parsed: ChatTurn = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(parsed, turn);
    }
}
