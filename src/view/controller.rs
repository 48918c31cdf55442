// src/view/controller.rs
//! Turns user actions into backend calls and backend answers into panel updates

use chrono::Local;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::i18n::Lang;
use super::loading::LoadingIndicator;
use super::panel::{Fragment, Panel, PanelUpdate};
use super::render;
use super::session::AnalysisHolder;
use crate::core::{ActionError, Backend};
use crate::types::{AnalysisResult, ExtractedText, Platform};

const ANALYZE_TEXT_FALLBACK: &str = "Error analyzing job posting. Please try again.";
const ANALYZE_URL_FALLBACK: &str = "Error extracting or analyzing the job posting URL.";
const SEARCH_COMPANY_FALLBACK: &str = "Error searching company. Please try again.";
const EXPORT_FALLBACK: &str = "Error exporting PDF report. Please try again.";

/// Report bytes ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub struct ViewController {
    backend: Arc<dyn Backend>,
    loading: LoadingIndicator,
    linkedin_dedicated_endpoint: bool,
}

impl ViewController {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            loading: LoadingIndicator::new(),
            linkedin_dedicated_endpoint: false,
        }
    }

    /// Send LinkedIn URLs to `/analyze_linkedin` instead of extract → detect
    pub fn with_linkedin_dedicated_endpoint(mut self, enabled: bool) -> Self {
        self.linkedin_dedicated_endpoint = enabled;
        self
    }

    pub fn with_loading_indicator(mut self, loading: LoadingIndicator) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    /// Analyze pasted job text
    pub async fn analyze_text(
        &self,
        lang: Lang,
        holder: &AnalysisHolder,
        text: &str,
    ) -> PanelUpdate {
        let panel = Panel::JobAnalysis;
        let text = match require_input(text, "Please enter job posting text to analyze.") {
            Ok(text) => text,
            Err(err) => return rejected(panel, err),
        };

        info!("Analyzing job posting text ({} chars)", text.len());

        self.submit(
            panel,
            ANALYZE_TEXT_FALLBACK,
            async {
                let analysis = self.backend.detect(text).await?;
                holder.store(analysis.clone()).await;
                Ok::<_, ActionError>(analysis)
            },
            |analysis| Fragment::success(render::analysis_card(&analysis, None, lang)),
        )
        .await
    }

    /// Extract a job posting from a URL, then analyze the extracted text
    pub async fn analyze_url(
        &self,
        lang: Lang,
        holder: &AnalysisHolder,
        url: &str,
    ) -> PanelUpdate {
        let panel = Panel::JobAnalysis;
        let url = match require_input(url, "Please enter a job posting URL.") {
            Ok(url) => url,
            Err(err) => return rejected(panel, err),
        };

        info!("Extracting and analyzing job posting URL: {}", url);

        self.submit(
            panel,
            ANALYZE_URL_FALLBACK,
            self.extract_and_detect(holder, url),
            |(analysis, extracted)| {
                Fragment::success(format!(
                    "{}{}",
                    render::analysis_card(&analysis, None, lang),
                    render::text_preview(&extracted.text, extracted.word_count, lang)
                ))
            },
        )
        .await
    }

    /// Look a company up in the backend's fraud database
    pub async fn search_company(&self, lang: Lang, company_name: &str) -> PanelUpdate {
        let panel = Panel::CompanySearch;
        let company_name = match require_input(company_name, "Please enter a company name.") {
            Ok(name) => name,
            Err(err) => return rejected(panel, err),
        };

        info!("Searching company: {}", company_name);

        self.submit(
            panel,
            SEARCH_COMPANY_FALLBACK,
            self.backend.search_company(company_name),
            |response| render::company_result(&response, lang),
        )
        .await
    }

    /// Analyze a posting from one of the supported job boards
    pub async fn analyze_platform(
        &self,
        lang: Lang,
        holder: &AnalysisHolder,
        platform: Platform,
        url: &str,
    ) -> PanelUpdate {
        let panel = Panel::PlatformIntegration;
        let prompt = format!("Please enter a job URL for {}.", platform.display_name());
        let url = match require_input(url, &prompt) {
            Ok(url) => url,
            Err(err) => return rejected(panel, err),
        };
        let fallback = format!(
            "Error analyzing {} job posting. Please try again.",
            platform.display_name()
        );

        info!("Analyzing {} job posting: {}", platform, url);

        if platform == Platform::LinkedIn && self.linkedin_dedicated_endpoint {
            return self
                .submit(
                    panel,
                    &fallback,
                    async {
                        let analysis = self.backend.analyze_linkedin(url).await?;
                        holder.store(analysis.clone()).await;
                        Ok::<_, ActionError>(analysis)
                    },
                    |analysis| {
                        Fragment::success(render::analysis_card(&analysis, Some(platform), lang))
                    },
                )
                .await;
        }

        self.submit(
            panel,
            &fallback,
            self.extract_and_detect(holder, url),
            |(analysis, extracted)| {
                Fragment::success(format!(
                    "{}{}",
                    render::analysis_card(&analysis, Some(platform), lang),
                    render::text_preview(&extracted.text, extracted.word_count, lang)
                ))
            },
        )
        .await
    }

    /// Resend the session's last analysis to the report endpoint. Failures
    /// are addressed to `panel`, the panel holding the export button.
    pub async fn export_report(
        &self,
        holder: &AnalysisHolder,
        panel: Panel,
    ) -> Result<ReportDownload, PanelUpdate> {
        let Some(analysis) = holder.latest().await else {
            return Err(rejected(panel, ActionError::MissingAnalysis));
        };

        info!("Exporting report for verdict: {}", analysis.result);

        let outcome = self.run(self.backend.export_pdf(&analysis)).await;
        match outcome {
            Ok(bytes) => Ok(ReportDownload {
                filename: report_filename(),
                bytes,
            }),
            Err(err) => Err(failed(panel, EXPORT_FALLBACK, err)),
        }
    }

    /// Strictly sequential: analysis is never issued when extraction fails
    async fn extract_and_detect(
        &self,
        holder: &AnalysisHolder,
        url: &str,
    ) -> Result<(AnalysisResult, ExtractedText), ActionError> {
        let extracted = self.backend.extract_url(url).await?;
        if extracted.text.trim().is_empty() {
            return Err(ActionError::Application {
                status: 200,
                message: Some("Could not extract text from URL".to_string()),
            });
        }

        let analysis = self.backend.detect(&extracted.text).await?;
        holder.store(analysis.clone()).await;
        Ok((analysis, extracted))
    }

    /// Awaits `work` with the loading indicator shown
    async fn run<T, Fut>(&self, work: Fut) -> Result<T, ActionError>
    where
        Fut: Future<Output = Result<T, ActionError>>,
    {
        let _loading = self.loading.show();
        work.await
    }

    /// submit → await → render-or-error, shared by every panel action
    async fn submit<T, Fut, R>(
        &self,
        panel: Panel,
        fallback: &str,
        work: Fut,
        render_success: R,
    ) -> PanelUpdate
    where
        Fut: Future<Output = Result<T, ActionError>>,
        R: FnOnce(T) -> Fragment,
    {
        match self.run(work).await {
            Ok(value) => PanelUpdate::new(panel, render_success(value)),
            Err(err) => failed(panel, fallback, err),
        }
    }
}

fn require_input<'a>(value: &'a str, prompt: &str) -> Result<&'a str, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ActionError::validation(prompt))
    } else {
        Ok(trimmed)
    }
}

fn rejected(panel: Panel, err: ActionError) -> PanelUpdate {
    warn!("Action rejected before reaching the backend: {}", err);
    PanelUpdate::new(panel, render::error(&err.user_message("")))
}

fn failed(panel: Panel, fallback: &str, err: ActionError) -> PanelUpdate {
    match &err {
        ActionError::Transport(_) => error!("{:?} action failed: {}", panel, err),
        _ => warn!("{:?} action failed: {}", panel, err),
    }
    PanelUpdate::new(panel, render::error(&err.user_message(fallback)))
}

fn report_filename() -> String {
    format!(
        "jobguardian_report_{}.pdf",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}
