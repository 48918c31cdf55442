// src/web/tests.rs
use std::sync::Arc;

use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use scraper::{Html, Selector};

use super::{build_rocket, UiState, DOWNLOAD_ROUTE};
use crate::config::ConfigManager;
use crate::core::ActionError;
use crate::testing::{analysis, Call, ScriptedBackend};
use crate::view::{SessionStore, ViewController};

fn state_for(backend: &Arc<ScriptedBackend>) -> UiState {
    let controller =
        ViewController::new(backend.clone()).with_loading_indicator(backend.indicator());
    UiState::new(controller, SessionStore::default())
}

async fn client_with(backend: &Arc<ScriptedBackend>) -> Client {
    let config = ConfigManager::from_sources(None, |_: &str| None).unwrap();

    Client::tracked(build_rocket(&config, state_for(backend)))
        .await
        .expect("valid rocket instance")
}

async fn client_with_form_limit(backend: &Arc<ScriptedBackend>, kib: &str) -> Client {
    let config = ConfigManager::from_sources(None, |key: &str| {
        (key == "FORM_LIMIT_KIB").then(|| kib.to_string())
    })
    .unwrap();

    Client::tracked(build_rocket(&config, state_for(backend)))
        .await
        .expect("valid rocket instance")
}

async fn post_form(client: &Client, uri: &str, body: &str) -> (Status, Option<String>, String) {
    post_form_in(client, uri, body, "en").await
}

async fn post_form_in(
    client: &Client,
    uri: &str,
    body: &str,
    lang: &str,
) -> (Status, Option<String>, String) {
    let response = client
        .post(uri)
        .header(ContentType::Form)
        .header(Header::new("X-Lang", lang.to_string()))
        .body(body)
        .dispatch()
        .await;

    let status = response.status();
    let target = response.headers().get_one("HX-Retarget").map(str::to_string);
    let body = response.into_string().await.unwrap_or_default();
    (status, target, body)
}

/// `(hx-post, hx-target)` of the export button inside a rendered card
fn export_button(fragment: &str) -> (String, String) {
    let document = Html::parse_fragment(fragment);
    let selector = Selector::parse("button.export-btn").unwrap();
    let button = document.select(&selector).next().expect("export button");

    (
        button.value().attr("hx-post").unwrap().to_string(),
        button.value().attr("hx-target").unwrap().to_string(),
    )
}

#[rocket::async_test]
async fn test_index_renders_requested_tab() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let response = client.get("/?tab=platform").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));

    let body = response.into_string().await.unwrap();
    assert!(body.contains(r#"<section id="tab-platform" class="tab-content">"#));
    assert!(body.contains(r#"<section id="tab-job" class="tab-content" hidden>"#));
}

#[rocket::async_test]
async fn test_index_honours_method_language_and_sample() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let body = client
        .get("/?tab=job&method=url&lang=hi&sample=1")
        .dispatch()
        .await
        .into_string()
        .await
        .unwrap();

    assert!(body.contains(r#"<html lang="hi">"#));
    assert!(body.contains(r#"<div id="url-input" class="input-section">"#));
    assert!(body.contains(r#"<div id="text-input" class="input-section" hidden>"#));
    assert!(body.contains("remote data entry specialist"));

    let fallback = client.get("/?lang=xx").dispatch().await.into_string().await.unwrap();
    assert!(fallback.contains(r#"<html lang="en">"#));
}

#[rocket::async_test]
async fn test_blank_text_is_rejected_without_backend_call() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let (status, target, body) = post_form(&client, "/ui/analyze-text", "text=++").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(target.as_deref(), Some("#results"));
    assert!(body.contains("Please enter job posting text to analyze."));
    assert!(backend.calls().is_empty());
}

#[rocket::async_test]
async fn test_export_button_redirects_to_download() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .with_detect(Ok(analysis("FAKE - suspicious", 97.0, 12)))
            .with_export(Ok(b"%PDF-1.4 report".to_vec())),
    );
    let client = client_with(&backend).await;

    let (_, _, card) = post_form(
        &client,
        "/ui/analyze-text",
        "text=Pay+a+%24100+registration+fee",
    )
    .await;
    assert!(card.contains("result-card fraud"));

    let (export_uri, export_target) = export_button(&card);
    assert_eq!(export_target, "#results");

    let response = client.post(export_uri).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("HX-Redirect"), Some(DOWNLOAD_ROUTE));

    let download = client.get(DOWNLOAD_ROUTE).dispatch().await;
    assert_eq!(download.status(), Status::Ok);
    assert_eq!(download.content_type(), Some(ContentType::PDF));
    let disposition = download
        .headers()
        .get_one("Content-Disposition")
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"jobguardian_report_"));
    assert_eq!(
        download.into_bytes().await.unwrap(),
        b"%PDF-1.4 report".to_vec()
    );

    assert_eq!(
        backend.calls(),
        vec![
            Call::Detect("Pay a $100 registration fee".to_string()),
            Call::ExportPdf("FAKE - suspicious".to_string()),
        ]
    );
}

#[rocket::async_test]
async fn test_failed_export_lands_in_button_target() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .with_detect(Ok(analysis("FAKE - suspicious", 97.0, 12)))
            .with_export(Err(ActionError::Application {
                status: 500,
                message: None,
            })),
    );
    let client = client_with(&backend).await;

    let (_, _, card) = post_form(&client, "/ui/analyze-text", "text=Pay+a+fee").await;
    let (export_uri, export_target) = export_button(&card);

    let response = client.post(export_uri).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
    assert_eq!(
        response.headers().get_one("HX-Retarget"),
        Some(export_target.as_str())
    );
    assert!(response.headers().get_one("HX-Redirect").is_none());

    let body = response.into_string().await.unwrap();
    assert!(body.contains("alert-error"));
    assert!(body.contains("Error exporting PDF report. Please try again."));

    let download = client.get(DOWNLOAD_ROUTE).dispatch().await;
    assert_eq!(download.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_export_without_analysis_is_inline_error() {
    let backend = Arc::new(ScriptedBackend::new().with_export(Ok(b"%PDF".to_vec())));
    let client = client_with(&backend).await;

    let response = client.post("/ui/export?panel=platform").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
    assert_eq!(
        response.headers().get_one("HX-Retarget"),
        Some("#platform-results")
    );

    let body = response.into_string().await.unwrap();
    assert!(body.contains("No analysis data available to export"));
    assert!(backend.calls().is_empty());
}

#[rocket::async_test]
async fn test_cookieless_exports_do_not_open_sessions() {
    let backend = Arc::new(ScriptedBackend::new());
    let config = ConfigManager::from_sources(None, |_: &str| None).unwrap();
    let client = Client::untracked(build_rocket(&config, state_for(&backend)))
        .await
        .expect("valid rocket instance");

    for _ in 0..20 {
        let response = client.post("/ui/export?panel=job").dispatch().await;
        assert!(response.cookies().get_private("jobguardian_session").is_none());
    }

    let state = client.rocket().state::<UiState>().unwrap();
    assert_eq!(state.sessions.active_sessions().await, 0);
}

#[rocket::async_test]
async fn test_download_without_report_is_not_found() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let response = client.get(DOWNLOAD_ROUTE).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("No report is ready to download. Export a report first."));
}

#[rocket::async_test]
async fn test_long_posting_reaches_backend() {
    let backend = Arc::new(
        ScriptedBackend::new().with_detect(Ok(analysis("Likely REAL ✅", 10.0, 20480))),
    );
    let client = client_with(&backend).await;

    let body = format!("text={}", "word+".repeat(8 * 1024));
    assert!(body.len() > 40 * 1024);

    let (status, target, html) = post_form(&client, "/ui/analyze-text", &body).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(target.as_deref(), Some("#results"));
    assert!(html.contains("result-card legitimate"));
    assert!(matches!(
        backend.calls().as_slice(),
        [Call::Detect(text)] if text.len() > 32 * 1024
    ));
}

#[rocket::async_test]
async fn test_oversized_form_is_reported_in_panel() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with_form_limit(&backend, "1").await;

    let body = format!("text={}", "a".repeat(2 * 1024));
    let (status, target, html) = post_form(&client, "/ui/analyze-text", &body).await;

    assert_eq!(status, Status::PayloadTooLarge);
    assert_eq!(target.as_deref(), Some("#results"));
    assert!(html.contains("alert-error"));
    assert!(html.contains("too large to analyze"));
    assert!(backend.calls().is_empty());
}

#[rocket::async_test]
async fn test_language_header_picks_labels() {
    let backend = Arc::new(
        ScriptedBackend::new().with_detect(Ok(analysis("Likely REAL ✅", 20.0, 4))),
    );
    let client = client_with(&backend).await;

    let (_, _, hindi) = post_form_in(&client, "/ui/analyze-text", "text=Data+entry", "hi").await;
    assert!(hindi.contains("विश्वास"));

    let (_, _, unknown) =
        post_form_in(&client, "/ui/analyze-text", "text=Data+entry", "xx").await;
    assert!(unknown.contains("Confidence"));
    assert!(!unknown.contains("विश्वास"));
}

#[rocket::async_test]
async fn test_company_search_targets_company_panel() {
    let backend = Arc::new(ScriptedBackend::new().with_company(Err(
        ActionError::Application {
            status: 500,
            message: None,
        },
    )));
    let client = client_with(&backend).await;

    let (_, target, body) =
        post_form(&client, "/ui/search-company", "company_name=fakecorp").await;

    assert_eq!(target.as_deref(), Some("#company-results"));
    assert!(body.contains("Error searching company. Please try again."));
    assert_eq!(backend.calls(), vec![Call::SearchCompany("fakecorp".to_string())]);
}

#[rocket::async_test]
async fn test_platform_route_runs_extraction_chain() {
    let backend = Arc::new(
        ScriptedBackend::new()
            .with_extract(Ok("Indeed posting".to_string()))
            .with_detect(Ok(analysis("Likely REAL ✅", 20.0, 2))),
    );
    let client = client_with(&backend).await;

    let (_, target, body) = post_form(
        &client,
        "/ui/platform/indeed",
        "url=https%3A%2F%2Fwww.indeed.com%2Fviewjob%3Fjk%3D1",
    )
    .await;

    assert_eq!(target.as_deref(), Some("#platform-results"));
    assert!(body.contains("Indeed Analysis"));
    assert_eq!(export_button(&body).1, "#platform-results");
    assert_eq!(
        backend.calls(),
        vec![
            Call::ExtractUrl("https://www.indeed.com/viewjob?jk=1".to_string()),
            Call::Detect("Indeed posting".to_string()),
        ]
    );
}

#[rocket::async_test]
async fn test_unknown_platform_is_not_routed() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let (status, _, body) = post_form(&client, "/ui/platform/monster", "url=x").await;

    assert!(status == Status::NotFound || status == Status::UnprocessableEntity);
    assert!(body.contains("alert-error"));
    assert!(backend.calls().is_empty());
}

#[rocket::async_test]
async fn test_status_and_health() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_with(&backend).await;

    let status = client.get("/ui/status").dispatch().await;
    assert_eq!(
        status.into_string().await.unwrap(),
        r#"{"loading":false,"in_flight":0,"sessions":0}"#
    );

    let health = client.get("/health").dispatch().await;
    assert_eq!(health.into_string().await.unwrap(), "OK");
}
