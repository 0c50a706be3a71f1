use serde::{Deserialize, Serialize};

use crate::models::{DiseaseRecord, RemedyRecord};
use crate::text::escape_html;

/// Declared display type of a record. The same backend row can be presented
/// through either rendering path, so the kind is an input, not a property of
/// the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Remedy,
    Disease,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remedy => "remedy",
            Self::Disease => "disease",
        }
    }
}

impl Default for RecordKind {
    fn default() -> Self {
        Self::Remedy
    }
}

/// A backend record with its shape made explicit. The two constructors
/// replace field-presence probing: wire-level variance is absorbed by serde
/// aliases on the record types, not by a fallback chain at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    Remedy(RemedyRecord),
    Disease(DiseaseRecord),
}

/// Display-ready record: every text field HTML-escaped, every missing field
/// an empty string. Total over its input; never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub kind: RecordKind,
    pub title: String,
    pub symptoms: String,
    pub preparation: String,
    pub usage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f32>,
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
    #[serde(default)]
    pub nested: Vec<NormalizedRecord>,
}

impl NormalizedRecord {
    #[must_use]
    pub fn from_source(source: &SourceRecord, kind: RecordKind) -> Self {
        match kind {
            RecordKind::Remedy => normalize_as_remedy(source),
            RecordKind::Disease => normalize_as_disease(source),
        }
    }

    #[must_use]
    pub fn from_remedy(record: &RemedyRecord) -> Self {
        Self::from_source(&SourceRecord::Remedy(record.clone()), RecordKind::Remedy)
    }

    #[must_use]
    pub fn from_disease(record: &DiseaseRecord) -> Self {
        Self::from_source(&SourceRecord::Disease(record.clone()), RecordKind::Disease)
    }
}

fn normalize_as_remedy(source: &SourceRecord) -> NormalizedRecord {
    match source {
        SourceRecord::Remedy(remedy) => NormalizedRecord {
            kind: RecordKind::Remedy,
            title: escape_html(remedy_title(remedy)),
            symptoms: String::new(),
            preparation: escape_html(&remedy.preparation),
            usage: escape_html(&remedy.usage),
            detail_url: remedy.detail_url.as_deref().map(escape_html),
            score: remedy.score,
            coverage: None,
            matched_ingredients: Vec::new(),
            nested: Vec::new(),
        },
        SourceRecord::Disease(disease) => NormalizedRecord {
            kind: RecordKind::Remedy,
            title: escape_html(&disease_remedy_title(disease)),
            symptoms: String::new(),
            preparation: escape_html(disease.remedy_text.as_deref().unwrap_or_default()),
            usage: String::new(),
            detail_url: None,
            score: disease.score,
            coverage: disease.token_coverage,
            matched_ingredients: escape_all(disease.matched_ingredients.as_deref()),
            nested: Vec::new(),
        },
    }
}

fn normalize_as_disease(source: &SourceRecord) -> NormalizedRecord {
    match source {
        SourceRecord::Disease(disease) => NormalizedRecord {
            kind: RecordKind::Disease,
            title: escape_html(&disease.disease),
            symptoms: escape_html(&disease.signs_and_symptoms),
            preparation: escape_html(disease.remedy_text.as_deref().unwrap_or_default()),
            usage: String::new(),
            detail_url: None,
            score: disease.score,
            coverage: disease.token_coverage,
            matched_ingredients: escape_all(disease.matched_ingredients.as_deref()),
            nested: disease
                .nested_remedies
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(NormalizedRecord::from_remedy)
                .collect(),
        },
        SourceRecord::Remedy(remedy) => NormalizedRecord {
            kind: RecordKind::Disease,
            title: escape_html(remedy_title(remedy)),
            symptoms: String::new(),
            preparation: escape_html(&remedy.preparation),
            usage: escape_html(&remedy.usage),
            detail_url: remedy.detail_url.as_deref().map(escape_html),
            score: remedy.score,
            coverage: None,
            matched_ingredients: Vec::new(),
            nested: Vec::new(),
        },
    }
}

fn remedy_title(remedy: &RemedyRecord) -> &str {
    if remedy.name.trim().is_empty() {
        "Remedy"
    } else {
        &remedy.name
    }
}

fn disease_remedy_title(disease: &DiseaseRecord) -> String {
    if disease.disease.trim().is_empty() {
        "Remedy".to_string()
    } else {
        format!("From disease: {}", disease.disease)
    }
}

fn escape_all(values: Option<&[String]>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .map(|value| escape_html(value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remedy(name: &str, preparation: &str, usage: &str) -> RemedyRecord {
        RemedyRecord {
            name: name.to_string(),
            preparation: preparation.to_string(),
            usage: usage.to_string(),
            ..RemedyRecord::default()
        }
    }

    #[test]
    fn remedy_fields_survive_verbatim_except_entity_escaping() {
        let record = remedy("Honey & Pepper", "mix <raw> honey", "morning \"dose\"");
        let normalized = NormalizedRecord::from_remedy(&record);
        assert_eq!(normalized.title, "Honey &amp; Pepper");
        assert_eq!(normalized.preparation, "mix &lt;raw&gt; honey");
        assert_eq!(normalized.usage, "morning &quot;dose&quot;");
        assert_eq!(normalized.kind, RecordKind::Remedy);
    }

    #[test]
    fn unnamed_remedy_falls_back_to_generic_label() {
        let normalized = NormalizedRecord::from_remedy(&remedy("  ", "boil", "drink"));
        assert_eq!(normalized.title, "Remedy");
    }

    #[test]
    fn disease_shaped_record_presented_as_remedy_gets_synthetic_label() {
        let disease = DiseaseRecord {
            disease: "Cough".to_string(),
            remedy_text: Some("tulsi decoction".to_string()),
            ..DiseaseRecord::default()
        };
        let normalized =
            NormalizedRecord::from_source(&SourceRecord::Disease(disease), RecordKind::Remedy);
        assert_eq!(normalized.title, "From disease: Cough");
        assert_eq!(normalized.preparation, "tulsi decoction");
        assert_eq!(normalized.kind, RecordKind::Remedy);
    }

    #[test]
    fn disease_shaped_record_without_name_still_renders() {
        let normalized = NormalizedRecord::from_source(
            &SourceRecord::Disease(DiseaseRecord::default()),
            RecordKind::Remedy,
        );
        assert_eq!(normalized.title, "Remedy");
        assert_eq!(normalized.preparation, "");
    }

    #[test]
    fn disease_normalization_carries_nested_remedies() {
        let disease = DiseaseRecord {
            disease: "Fever".to_string(),
            signs_and_symptoms: "high temperature".to_string(),
            nested_remedies: Some(vec![remedy("Neer", "boil water", "sip warm")]),
            ..DiseaseRecord::default()
        };
        let normalized = NormalizedRecord::from_disease(&disease);
        assert_eq!(normalized.title, "Fever");
        assert_eq!(normalized.symptoms, "high temperature");
        assert_eq!(normalized.nested.len(), 1);
        assert_eq!(normalized.nested[0].title, "Neer");
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let normalized = NormalizedRecord::from_disease(&DiseaseRecord::default());
        assert_eq!(normalized.title, "");
        assert_eq!(normalized.symptoms, "");
        assert_eq!(normalized.preparation, "");
        assert!(normalized.nested.is_empty());
    }
}
