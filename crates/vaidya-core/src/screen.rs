use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::intersect::intersect_remedies;
use crate::models::{DiseaseRecord, MatchInfo, QueryFilters, RemedyRecord, SearchResponse};
use crate::normalize::NormalizedRecord;
use crate::text::normalize_name;

pub const PROMPT_MESSAGE: &str = "Select a disease or ingredients to begin.";
pub const NO_DISEASE_RESULTS: &str = "No matching diseases found.";
pub const NO_REMEDY_RESULTS: &str = "No remedies found for the selected filters.";
pub const NO_INGREDIENT_DISEASES: &str = "No diseases matched those ingredients.";

/// What one search attempt produced: a (possibly empty) backend response, or
/// a transport/parse failure reduced to a short message.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Response(SearchResponse),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelItem {
    Info {
        message: String,
    },
    NoResults {
        message: String,
    },
    Error {
        message: String,
    },
    Entry {
        record: NormalizedRecord,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        match_info: Option<MatchInfo>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub visible: bool,
    #[serde(default)]
    pub items: Vec<PanelItem>,
}

impl Panel {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    fn showing(items: Vec<PanelItem>) -> Self {
        Self {
            visible: true,
            items,
        }
    }

    fn error(message: &str) -> Self {
        Self::showing(vec![PanelItem::Error {
            message: message.to_string(),
        }])
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PanelItem::Entry { .. }))
            .count()
    }
}

/// The four display panels composed for one search outcome. Rebuilt from
/// scratch on every search and on clear; never mutated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchScreen {
    pub disease: Panel,
    pub diseases_for_ingredients: Panel,
    pub ingredient_remedies: Panel,
    pub intersection: Panel,
}

impl SearchScreen {
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Derive the full screen from the filter emptiness flags and the outcome.
///
/// Pure: no I/O, no ambient state. The emptiness flags come from the
/// caller's own pre-request input, never from the echoed query.
#[must_use]
pub fn compose(filters: &QueryFilters, outcome: &SearchOutcome) -> SearchScreen {
    match outcome {
        SearchOutcome::Failed(message) => error_screen(message),
        SearchOutcome::Response(response) => compose_response(filters, response),
    }
}

fn compose_response(filters: &QueryFilters, response: &SearchResponse) -> SearchScreen {
    let mut screen = SearchScreen::cleared();
    let no_annotations = HashMap::new();

    match (filters.has_disease_query(), filters.has_ingredient_query()) {
        (false, false) => {
            screen.disease = Panel::showing(vec![PanelItem::Info {
                message: PROMPT_MESSAGE.to_string(),
            }]);
        }
        (true, false) => {
            screen.disease = disease_panel(&response.disease_matches, true);
            if !response.remedies_for_disease.is_empty() {
                screen.ingredient_remedies =
                    remedy_panel(&response.remedies_for_disease, &no_annotations);
            }
        }
        (false, true) => {
            screen.ingredient_remedies = remedy_panel(
                &response.remedies_using_ingredients,
                &response.keyed_match_info(),
            );
            screen.diseases_for_ingredients =
                disease_panel(&response.diseases_for_ingredients, false);
        }
        (true, true) => {
            screen.disease = disease_panel(&response.disease_matches, true);
            screen.ingredient_remedies = remedy_panel(
                &response.remedies_using_ingredients,
                &response.keyed_match_info(),
            );
            let common = intersect_remedies(
                &response.remedies_for_disease,
                &response.remedies_using_ingredients,
                &filters.ingredients,
            );
            if !common.is_empty() {
                screen.intersection = remedy_panel(&common, &no_annotations);
            }
        }
    }
    screen
}

fn error_screen(message: &str) -> SearchScreen {
    SearchScreen {
        disease: Panel::error(message),
        diseases_for_ingredients: Panel::error(message),
        ingredient_remedies: Panel::error(message),
        intersection: Panel::hidden(),
    }
}

fn disease_panel(matches: &[DiseaseRecord], nested_allowed: bool) -> Panel {
    if matches.is_empty() {
        let message = if nested_allowed {
            NO_DISEASE_RESULTS
        } else {
            NO_INGREDIENT_DISEASES
        };
        return Panel::showing(vec![PanelItem::NoResults {
            message: message.to_string(),
        }]);
    }

    // The nested remedy sub-list renders only under a single exact-name
    // match; fuzzy or multi-match listings stay flat.
    let single_primary = nested_allowed && matches.len() == 1 && matches[0].is_primary;
    let items = matches
        .iter()
        .map(|record| {
            let mut normalized = NormalizedRecord::from_disease(record);
            if !single_primary {
                normalized.nested.clear();
            }
            PanelItem::Entry {
                record: normalized,
                match_info: None,
            }
        })
        .collect();
    Panel::showing(items)
}

fn remedy_panel(remedies: &[RemedyRecord], annotations: &HashMap<String, MatchInfo>) -> Panel {
    if remedies.is_empty() {
        return Panel::showing(vec![PanelItem::NoResults {
            message: NO_REMEDY_RESULTS.to_string(),
        }]);
    }

    let items = remedies
        .iter()
        .map(|remedy| PanelItem::Entry {
            record: NormalizedRecord::from_remedy(remedy),
            match_info: annotations.get(&normalize_name(&remedy.name)).cloned(),
        })
        .collect();
    Panel::showing(items)
}
