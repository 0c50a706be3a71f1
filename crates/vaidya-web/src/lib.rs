use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::sync::RwLock;

use vaidya_core::Vaidya;
use vaidya_core::overlay::DetailOverlay;
use vaidya_core::session::SearchSession;

mod dto;
mod error;
mod handlers;
mod html;
mod markdown;
mod render;
mod security;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) app: Vaidya,
    pub(crate) session: Arc<RwLock<SearchSession>>,
    pub(crate) overlay: Arc<RwLock<DetailOverlay>>,
}

impl WebState {
    fn new(app: Vaidya) -> Self {
        Self {
            app,
            session: Arc::new(RwLock::new(SearchSession::new())),
            overlay: Arc::new(RwLock::new(DetailOverlay::new())),
        }
    }
}

/// Start the web surface and block until shutdown.
///
/// # Errors
/// Returns an error when the runtime cannot be created, the socket cannot be
/// bound, or the server exits with a runtime failure.
pub fn serve_web(app: Vaidya, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(app);
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        println!("vaidya listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

/// Render a chat answer's markdown the way the page does.
#[must_use]
pub fn render_chat_html(content: &str) -> String {
    markdown::render_markdown_html(content)
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/assets/index.css", get(handlers::index_css))
        .route("/assets/index.js", get(handlers::index_js))
        .route("/healthz", get(handlers::health))
        .route("/api/filters", get(handlers::filter_options))
        .route("/api/search", get(handlers::run_search))
        .route("/api/search/clear", post(handlers::clear_search))
        .route("/api/detail", get(handlers::record_detail))
        .route("/api/detail/close", post(handlers::close_detail))
        .route("/api/chat", post(handlers::chat))
        .layer(middleware::from_fn(security::security_headers_middleware))
        .with_state(state)
}
