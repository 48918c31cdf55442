// src/web/types.rs
//! Forms accepted and responses produced by the web surface

use rocket::form::FromForm;
use rocket::http::{ContentType, Header};
use rocket::request::{FromRequest, Outcome};
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use v_htmlescape::escape;

use crate::view::{Lang, Panel, PanelUpdate, ReportDownload, SessionStore, Tone, ViewController};

/// Header the page attaches to every htmx request
pub const LANG_HEADER: &str = "X-Lang";
pub const DOWNLOAD_ROUTE: &str = "/ui/export/download";

/// Managed state shared by every route
pub struct UiState {
    pub controller: ViewController,
    pub sessions: SessionStore,
}

impl UiState {
    pub fn new(controller: ViewController, sessions: SessionStore) -> Self {
        Self {
            controller,
            sessions,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Lang {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(Lang::from_code(request.headers().get_one(LANG_HEADER)))
    }
}

/// Query of the page itself: `/?tab=company&lang=hi`
#[derive(Debug, Default, FromForm)]
pub struct PageQuery {
    pub tab: Option<String>,
    pub method: Option<String>,
    pub lang: Option<String>,
    pub sample: Option<String>,
}

#[derive(FromForm)]
pub struct TextForm {
    pub text: Option<String>,
}

#[derive(FromForm)]
pub struct UrlForm {
    pub url: Option<String>,
}

#[derive(FromForm)]
pub struct CompanyForm {
    pub company_name: Option<String>,
}

/// HTML fragment for one panel. `HX-Retarget` points the page at the panel
/// the fragment belongs to.
#[derive(rocket::Responder)]
#[response(content_type = "html")]
pub struct PanelReply {
    pub body: String,
    pub target: Header<'static>,
    pub tone: Header<'static>,
}

impl From<PanelUpdate> for PanelReply {
    fn from(update: PanelUpdate) -> Self {
        let tone = match update.fragment.tone {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Error => "error",
        };

        Self {
            target: retarget(update.panel),
            tone: Header::new("X-Result-Tone", tone),
            body: update.fragment.html,
        }
    }
}

/// Answer to an export that succeeded: htmx follows `HX-Redirect` to the
/// download route, the body is a fallback link.
#[derive(rocket::Responder)]
#[response(content_type = "html")]
pub struct ReportReady {
    pub body: String,
    pub redirect: Header<'static>,
    pub target: Header<'static>,
}

impl ReportReady {
    pub fn new(panel: Panel, filename: &str) -> Self {
        Self {
            body: format!(
                "<div class=\"alert alert-info\" role=\"status\">Report ready: <a href=\"{}\" download>{}</a></div>\n",
                DOWNLOAD_ROUTE,
                escape(filename)
            ),
            redirect: Header::new("HX-Redirect", DOWNLOAD_ROUTE),
            target: retarget(panel),
        }
    }
}

fn retarget(panel: Panel) -> Header<'static> {
    Header::new("HX-Retarget", format!("#{}", panel.target_id()))
}

pub struct PdfResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl From<ReportDownload> for PdfResponse {
    fn from(download: ReportDownload) -> Self {
        Self {
            data: download.bytes,
            filename: download.filename,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for PdfResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'o> {
        Response::build()
            .header(ContentType::PDF)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(rocket::Responder)]
pub enum ExportReply {
    Ready(ReportReady),
    Failed(PanelReply),
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StatusResponse {
    pub loading: bool,
    pub in_flight: usize,
    pub sessions: usize,
}
