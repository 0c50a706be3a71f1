use serde::{Deserialize, Serialize};

use crate::normalize::{NormalizedRecord, RecordKind};

/// Full-record view for one selected item: a title plus labeled sections,
/// ready for the overlay surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub kind: RecordKind,
    pub title: String,
    pub sections: Vec<DetailSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailSection {
    pub label: String,
    pub text: String,
}

impl DetailView {
    /// Build the overlay content for a normalized record. Empty fields are
    /// omitted rather than rendered as blank sections.
    #[must_use]
    pub fn build(record: &NormalizedRecord) -> Self {
        let mut sections = Vec::new();
        match record.kind {
            RecordKind::Disease => {
                push_section(&mut sections, "Signs and Symptoms", &record.symptoms);
                push_section(&mut sections, "Remedy", &record.preparation);
                for nested in &record.nested {
                    push_section(&mut sections, &nested.title, &nested.preparation);
                }
            }
            RecordKind::Remedy => {
                push_section(&mut sections, "Preparation", &record.preparation);
                push_section(&mut sections, "Usage", &record.usage);
            }
        }
        Self {
            kind: record.kind,
            title: record.title.clone(),
            sections,
            link: record.detail_url.clone(),
        }
    }
}

fn push_section(sections: &mut Vec<DetailSection>, label: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    sections.push(DetailSection {
        label: label.to_string(),
        text: text.to_string(),
    });
}

/// How a dismissal was requested. All three are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseControl,
    OutsideClick,
    CancelKey,
}

/// Overlay state machine: at most one detail view is showing; dismissal is
/// idempotent regardless of trigger.
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    current: Option<DetailView>,
}

impl DetailOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, view: DetailView) {
        self.current = Some(view);
    }

    /// Returns whether the overlay was visible before this call. Dismissing
    /// an already-hidden overlay is a no-op, not an error.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        match trigger {
            DismissTrigger::CloseControl
            | DismissTrigger::OutsideClick
            | DismissTrigger::CancelKey => self.current.take().is_some(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn view(&self) -> Option<&DetailView> {
        self.current.as_ref()
    }
}
