use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use vaidya_core::VaidyaError;
use vaidya_core::models::QueryFilters;
use vaidya_core::overlay::{DetailView, DismissTrigger};
use vaidya_core::screen::{PanelItem, SearchScreen};

use crate::WebState;
use crate::dto::{
    ChatReplyDto, ChatRequestDto, CloseDetailReply, CloseDetailRequest, DetailDto, DetailQuery,
    HealthDto, PanelDto, SearchQuery, SearchResultDto,
};
use crate::error::error_response;
use crate::html::{INDEX_CSS, INDEX_HTML, INDEX_JS};
use crate::markdown::render_markdown_html;
use crate::render::{render_detail, render_panel};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn index_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        INDEX_CSS,
    )
        .into_response()
}

pub async fn index_js() -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        INDEX_JS,
    )
        .into_response()
}

pub async fn health(State(state): State<WebState>) -> Response {
    let app = state.app.clone();
    let backend_reachable = run_blocking(move || app.backend_health().unwrap_or(false))
        .await
        .unwrap_or(false);
    Json(HealthDto {
        status: "ok".to_string(),
        backend_reachable,
    })
    .into_response()
}

pub async fn filter_options(State(state): State<WebState>) -> Response {
    let app = state.app.clone();
    match run_blocking(move || app.filter_options())
        .await
        .and_then(|inner| inner)
    {
        Ok(options) => Json(options).into_response(),
        Err(err) => error_response(&err, "filters"),
    }
}

/// Run one search against the session. The generation ticket issued before
/// the backend round trip guards against a slow earlier response landing
/// after a newer one: a superseded result is discarded and the current
/// screen is returned with `stale` set.
pub async fn run_search(
    State(state): State<WebState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let filters =
        QueryFilters::from_comma_list(query.disease.as_deref(), query.ingredients.as_deref());

    let ticket = state.session.write().await.begin();
    let app = state.app.clone();
    let search_filters = filters.clone();
    let screen = match run_blocking(move || app.run_search(&search_filters)).await {
        Ok(screen) => screen,
        Err(err) => return error_response(&err, "search.run"),
    };

    let mut session = state.session.write().await;
    let applied = session.apply(ticket, screen);
    let dto = search_dto(session.screen(), !applied);
    drop(session);
    Json(dto).into_response()
}

pub async fn clear_search(State(state): State<WebState>) -> Response {
    let mut session = state.session.write().await;
    session.clear();
    let dto = search_dto(session.screen(), false);
    drop(session);
    Json(dto).into_response()
}

pub async fn record_detail(
    State(state): State<WebState>,
    Query(query): Query<DetailQuery>,
) -> Response {
    let session = state.session.read().await;
    match detail_view(session.screen(), &query.panel, query.index) {
        Ok(view) => {
            let dto = DetailDto {
                title: view.title.clone(),
                html: render_detail(&view),
            };
            state.overlay.write().await.open(view);
            Json(dto).into_response()
        }
        Err(err) => error_response(&err, "detail"),
    }
}

/// All dismissal triggers are equivalent; dismissing an already-hidden
/// overlay reports `was_visible: false` rather than an error.
pub async fn close_detail(
    State(state): State<WebState>,
    Json(request): Json<CloseDetailRequest>,
) -> Response {
    let trigger = match request.trigger.as_deref() {
        Some("outside") => DismissTrigger::OutsideClick,
        Some("escape") => DismissTrigger::CancelKey,
        _ => DismissTrigger::CloseControl,
    };
    let was_visible = state.overlay.write().await.dismiss(trigger);
    Json(CloseDetailReply { was_visible }).into_response()
}

pub async fn chat(State(state): State<WebState>, Json(request): Json<ChatRequestDto>) -> Response {
    let app = state.app.clone();
    let question = request.question;
    match run_blocking(move || app.chat(&question))
        .await
        .and_then(|inner| inner)
    {
        Ok(turn) => Json(ChatReplyDto {
            html: render_markdown_html(&turn.answer),
            question: turn.question,
            answer: turn.answer,
        })
        .into_response(),
        Err(err) => error_response(&err, "chat"),
    }
}

fn search_dto(screen: &SearchScreen, stale: bool) -> SearchResultDto {
    SearchResultDto {
        disease: panel_dto("disease", &screen.disease),
        diseases_for_ingredients: panel_dto(
            "diseases_for_ingredients",
            &screen.diseases_for_ingredients,
        ),
        ingredient_remedies: panel_dto("ingredient_remedies", &screen.ingredient_remedies),
        intersection: panel_dto("intersection", &screen.intersection),
        stale,
    }
}

fn panel_dto(panel_id: &str, panel: &vaidya_core::screen::Panel) -> PanelDto {
    PanelDto {
        visible: panel.visible,
        html: render_panel(panel_id, panel),
    }
}

fn detail_view(
    screen: &SearchScreen,
    panel_id: &str,
    index: usize,
) -> vaidya_core::Result<DetailView> {
    let panel = match panel_id {
        "disease" => &screen.disease,
        "diseases_for_ingredients" => &screen.diseases_for_ingredients,
        "ingredient_remedies" => &screen.ingredient_remedies,
        "intersection" => &screen.intersection,
        other => {
            return Err(VaidyaError::Validation(format!("unknown panel: {other}")));
        }
    };

    let record = panel
        .items
        .iter()
        .filter_map(|item| match item {
            PanelItem::Entry { record, .. } => Some(record),
            _ => None,
        })
        .nth(index)
        .ok_or_else(|| VaidyaError::NotFound(format!("no record at {panel_id}[{index}]")))?;
    Ok(DetailView::build(record))
}

// The core client is blocking (reqwest::blocking); it must not run on a
// runtime worker thread.
async fn run_blocking<T, F>(task: F) -> Result<T, VaidyaError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| VaidyaError::Internal(format!("blocking task failed: {err}")))
}
