// src/web/handlers.rs
//! Route bodies: resolve the session, run the action, shape the reply

use rocket::form::Form;
use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;
use uuid::Uuid;

use super::types::{
    CompanyForm, ExportReply, PanelReply, PdfResponse, ReportReady, StatusResponse, TextForm,
    UiState, UrlForm,
};
use crate::types::Platform;
use crate::view::{AnalysisHolder, Lang, Panel, SessionStore};

pub const SESSION_COOKIE: &str = "jobguardian_session";

fn session_id(cookies: &CookieJar<'_>) -> Option<Uuid> {
    cookies
        .get_private(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// The caller's analysis holder, issuing a session cookie on first contact
pub async fn session_holder(cookies: &CookieJar<'_>, sessions: &SessionStore) -> AnalysisHolder {
    let session_id = match session_id(cookies) {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4();
            info!("Starting new session {}", id);
            cookies.add_private(
                Cookie::build((SESSION_COOKIE, id.to_string()))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            id
        }
    };

    sessions.holder(session_id).await
}

/// The caller's holder when the session is known and still live
pub async fn existing_holder(
    cookies: &CookieJar<'_>,
    sessions: &SessionStore,
) -> Option<AnalysisHolder> {
    sessions.find(session_id(cookies)?).await
}

pub async fn analyze_text_handler(
    form: Form<TextForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    let holder = session_holder(cookies, &state.sessions).await;
    let text = form.text.as_deref().unwrap_or_default();

    state.controller.analyze_text(lang, &holder, text).await.into()
}

pub async fn analyze_url_handler(
    form: Form<UrlForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    let holder = session_holder(cookies, &state.sessions).await;
    let url = form.url.as_deref().unwrap_or_default();

    state.controller.analyze_url(lang, &holder, url).await.into()
}

pub async fn search_company_handler(
    form: Form<CompanyForm>,
    lang: Lang,
    state: &State<UiState>,
) -> PanelReply {
    let company_name = form.company_name.as_deref().unwrap_or_default();

    state.controller.search_company(lang, company_name).await.into()
}

pub async fn analyze_platform_handler(
    platform: Platform,
    form: Form<UrlForm>,
    lang: Lang,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> PanelReply {
    let holder = session_holder(cookies, &state.sessions).await;
    let url = form.url.as_deref().unwrap_or_default();

    state
        .controller
        .analyze_platform(lang, &holder, platform, url)
        .await
        .into()
}

pub async fn export_report_handler(
    panel: Panel,
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> ExportReply {
    // Without a session there is nothing stored to resend
    let holder = existing_holder(cookies, &state.sessions)
        .await
        .unwrap_or_default();

    match state.controller.export_report(&holder, panel).await {
        Ok(download) => {
            info!("Report {} ready for download", download.filename);
            let ready = ReportReady::new(panel, &download.filename);
            holder.store_report(download).await;
            ExportReply::Ready(ready)
        }
        Err(update) => ExportReply::Failed(update.into()),
    }
}

pub async fn download_report_handler(
    cookies: &CookieJar<'_>,
    state: &State<UiState>,
) -> Option<PdfResponse> {
    let holder = existing_holder(cookies, &state.sessions).await?;
    let report = holder.report().await?;

    info!("Serving report {}", report.filename);
    Some(report.into())
}

pub async fn status_handler(state: &State<UiState>) -> Json<StatusResponse> {
    let loading = state.controller.loading();

    Json(StatusResponse {
        loading: loading.is_visible(),
        in_flight: loading.in_flight(),
        sessions: state.sessions.active_sessions().await,
    })
}
