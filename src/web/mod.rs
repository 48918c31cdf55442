// src/web/mod.rs

pub mod handlers;
pub mod page;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use crate::config::ConfigManager;
use crate::core::ServiceClient;
use crate::view::{render, Lang, Panel, PanelUpdate, SessionStore, ViewController};
use anyhow::Result;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::types::Platform;

#[get("/?<query..>")]
pub fn index(query: PageQuery) -> RawHtml<String> {
    RawHtml(page::render_index(&page::PageView::from_query(&query)))
}

#[post("/ui/analyze-text", data = "<form>")]
pub async fn analyze_text(
    form: Form<TextForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    handlers::analyze_text_handler(form, lang, cookies, state).await
}

#[post("/ui/analyze-url", data = "<form>")]
pub async fn analyze_url(
    form: Form<UrlForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    handlers::analyze_url_handler(form, lang, cookies, state).await
}

#[post("/ui/search-company", data = "<form>")]
pub async fn search_company(
    form: Form<CompanyForm>,
    lang: Lang,
    state: &State<UiState>,
) -> PanelReply {
    handlers::search_company_handler(form, lang, state).await
}

#[post("/ui/platform/<platform>", data = "<form>")]
pub async fn analyze_platform(
    platform: Platform,
    form: Form<UrlForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    handlers::analyze_platform_handler(platform, form, lang, cookies, state).await
}

#[post("/ui/export?<panel>")]
pub async fn export_report(
    panel: Option<&str>,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> ExportReply {
    handlers::export_report_handler(Panel::from_slug(panel), cookies, state).await
}

#[get("/ui/export/download")]
pub async fn download_report(
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> Option<PdfResponse> {
    handlers::download_report_handler(cookies, state).await
}

#[get("/ui/status")]
pub async fn status(state: &State<UiState>) -> Json<StatusResponse> {
    handlers::status_handler(state).await
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

// Error catchers answer with a fragment addressed to the panel of the
// failed request; the page swaps error statuses too

/// Panel a request's fragment belongs to, judged by its path
fn panel_for(request: &Request<'_>) -> Panel {
    let path = request.uri().path();
    let path = path.as_str();

    if path.starts_with("/ui/search-company") {
        Panel::CompanySearch
    } else if path.starts_with("/ui/platform") {
        Panel::PlatformIntegration
    } else if path.starts_with("/ui/export") {
        Panel::from_slug(request.query_value::<&str>("panel").and_then(|v| v.ok()))
    } else {
        Panel::JobAnalysis
    }
}

fn error_reply(request: &Request<'_>, message: &str) -> PanelReply {
    PanelUpdate::new(panel_for(request), render::error(message)).into()
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> PanelReply {
    let message = if request.uri().path().as_str() == DOWNLOAD_ROUTE {
        "No report is ready to download. Export a report first.".to_string()
    } else {
        format!("Nothing here: {}", request.uri().path())
    };
    error_reply(request, &message)
}

#[rocket::catch(413)]
pub fn payload_too_large(request: &Request<'_>) -> PanelReply {
    error_reply(
        request,
        "The submitted text is too large to analyze. Please shorten it and try again.",
    )
}

#[rocket::catch(422)]
pub fn unprocessable(request: &Request<'_>) -> PanelReply {
    error_reply(
        request,
        "The submitted form could not be read. Please try again.",
    )
}

#[rocket::catch(500)]
pub fn internal_error(request: &Request<'_>) -> PanelReply {
    error_reply(request, "Internal server error. Try again in a few moments.")
}

/// Assemble the server around an already-built controller
pub fn build_rocket(config: &ConfigManager, state: UiState) -> Rocket<Build> {
    let mut figment = rocket::Config::figment()
        .merge(("address", config.server.address))
        .merge(("port", config.server.port))
        .merge((
            "limits.form",
            config.server.form_limit_kib.saturating_mul(1024),
        ));
    if let Some(key) = &config.server.secret_key {
        figment = figment.merge(("secret_key", key.as_str()));
    }

    rocket::custom(figment)
        .manage(state)
        .register(
            "/",
            catchers![not_found, payload_too_large, unprocessable, internal_error],
        )
        .mount(
            "/",
            routes![
                index,
                analyze_text,
                analyze_url,
                search_company,
                analyze_platform,
                export_report,
                download_report,
                status,
                health,
            ],
        )
}

pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let client = ServiceClient::new(&config.backend.url, config.backend.timeout_seconds)?;
    let controller = ViewController::new(Arc::new(client))
        .with_linkedin_dedicated_endpoint(config.backend.linkedin_dedicated_endpoint);
    let sessions = SessionStore::new(
        Duration::from_secs(config.server.session_idle_minutes.saturating_mul(60)),
        config.server.max_sessions,
    );

    info!("Starting JobGuardian web UI");
    info!("Backend: {}", config.backend.url);
    info!(
        "Server: http://{}:{}",
        config.server.address, config.server.port
    );
    info!(
        "Form limit: {} KiB, sessions: up to {} idle for {} min",
        config.server.form_limit_kib, config.server.max_sessions, config.server.session_idle_minutes
    );

    build_rocket(&config, UiState::new(controller, sessions))
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
