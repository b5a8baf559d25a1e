//! HTTP routes: the landing page, the Codewars proxy and its HTML partial.

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::codewars::{CodewarsClient, CodewarsError, CodewarsProfile};
use crate::config::Config;
use crate::i18n::resume_text;
use crate::page::{render_codewars_card, render_page, PageContext, SITE_CSS, SITE_JS};
use crate::preferences::{PreferenceQuery, Preferences};
use crate::profile::SiteProfile;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub codewars: CodewarsClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let codewars = CodewarsClient::new(&config.codewars_api_url, config.request_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            codewars,
        })
    }
}

/// Error contract of `/api/codewars`: every failure is `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Missing u")]
    MissingParam,

    #[error("Codewars {}", .0.as_u16())]
    Upstream(StatusCode),

    #[error("Server error")]
    Internal(#[source] CodewarsError),
}

impl From<CodewarsError> for ProxyError {
    fn from(err: CodewarsError) -> Self {
        match err {
            CodewarsError::Upstream(status) => ProxyError::Upstream(status),
            other => ProxyError::Internal(other),
        }
    }
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParam => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(status) => *status,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let ProxyError::Internal(source) = &self {
            error!("Codewars proxy failed: {}", source);
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CodewarsQuery {
    pub u: Option<String>,
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(index))
        .route("/resume", get(resume))
        .route("/partials/codewars", get(codewars_partial))
        // API
        .route("/api/codewars", get(codewars_proxy))
        .route("/health", get(health))
        // Bundled assets
        .route("/assets/site.js", get(site_js))
        .route("/assets/site.css", get(site_css))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until `shutdown` resolves.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = state.config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn codewars_proxy(
    State(state): State<AppState>,
    Query(query): Query<CodewarsQuery>,
) -> Result<Json<CodewarsProfile>, ProxyError> {
    let username = query
        .u
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ProxyError::MissingParam)?;

    let profile = state.codewars.fetch_user(username).await?;
    Ok(Json(profile))
}

async fn codewars_partial(
    State(state): State<AppState>,
    Query(query): Query<PreferenceQuery>,
    headers: HeaderMap,
) -> Html<String> {
    let prefs = Preferences::resolve(&query, &headers);
    let site = SiteProfile::get();

    let html = match state.codewars.fetch_user(site.codewars_username).await {
        Ok(profile) => render_codewars_card(Ok(&profile), prefs.language, site),
        Err(err) => {
            // Only the status reaches the page; transport details stay in the log
            warn!("Codewars card failed: {}", err);
            let status = ProxyError::from(err).status();
            render_codewars_card(Err(&format!("HTTP {}", status.as_u16())), prefs.language, site)
        }
    };
    Html(html)
}

async fn index(Query(query): Query<PreferenceQuery>, headers: HeaderMap) -> impl IntoResponse {
    let ctx = PageContext {
        site: SiteProfile::get(),
        prefs: Preferences::resolve(&query, &headers),
        year: chrono::Utc::now().year(),
    };
    (
        [
            (HeaderName::from_static("accept-ch"), "Sec-CH-Prefers-Color-Scheme"),
            (header::VARY, "Cookie, Sec-CH-Prefers-Color-Scheme"),
        ],
        Html(render_page(&ctx)),
    )
}

async fn resume(Query(query): Query<PreferenceQuery>, headers: HeaderMap) -> impl IntoResponse {
    let prefs = Preferences::resolve(&query, &headers);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        resume_text(prefs.language),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn site_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SITE_JS,
    )
}

async fn site_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}
