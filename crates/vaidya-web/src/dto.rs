use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub disease: Option<String>,
    /// Comma-joined, matching the backend's own query-string shape.
    pub ingredients: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PanelDto {
    pub visible: bool,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResultDto {
    pub disease: PanelDto,
    pub diseases_for_ingredients: PanelDto,
    pub ingredient_remedies: PanelDto,
    pub intersection: PanelDto,
    /// True when this response was superseded by a newer search and its
    /// result was discarded; the panels reflect the current screen.
    pub stale: bool,
}

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub panel: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct DetailDto {
    pub title: String,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct CloseDetailRequest {
    /// One of `close`, `outside`, `escape`. The three are equivalent.
    pub trigger: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CloseDetailReply {
    pub was_visible: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequestDto {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReplyDto {
    pub question: String,
    pub answer: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub backend_reachable: bool,
}
