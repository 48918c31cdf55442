// src/testing.rs
//! In-memory backend for controller and route tests

use std::sync::Mutex;

use crate::core::{ActionError, Backend};
use crate::types::{AnalysisResult, CompanySearchResponse, ExtractedText};
use crate::view::LoadingIndicator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Detect(String),
    ExtractUrl(String),
    SearchCompany(String),
    AnalyzeLinkedin(String),
    /// Verdict label of the analysis that was resent
    ExportPdf(String),
}

type Scripted<T> = Option<Result<T, ActionError>>;

/// Answers every call with a fixed response, recording the call and whether
/// the loading indicator was visible while it ran
#[derive(Default)]
pub struct ScriptedBackend {
    indicator: LoadingIndicator,
    detect: Scripted<AnalysisResult>,
    extract: Scripted<ExtractedText>,
    company: Scripted<CompanySearchResponse>,
    linkedin: Scripted<AnalysisResult>,
    export: Scripted<Vec<u8>>,
    calls: Mutex<Vec<Call>>,
    visibility: Mutex<Vec<bool>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detect(mut self, response: Result<AnalysisResult, ActionError>) -> Self {
        self.detect = Some(response);
        self
    }

    pub fn with_extract(mut self, response: Result<String, ActionError>) -> Self {
        self.extract = Some(response.map(|text| ExtractedText {
            text,
            word_count: None,
        }));
        self
    }

    pub fn with_extracted(mut self, text: &str, word_count: Option<u64>) -> Self {
        self.extract = Some(Ok(ExtractedText {
            text: text.to_string(),
            word_count,
        }));
        self
    }

    pub fn with_company(mut self, response: Result<CompanySearchResponse, ActionError>) -> Self {
        self.company = Some(response);
        self
    }

    pub fn with_linkedin(mut self, response: Result<AnalysisResult, ActionError>) -> Self {
        self.linkedin = Some(response);
        self
    }

    pub fn with_export(mut self, response: Result<Vec<u8>, ActionError>) -> Self {
        self.export = Some(response);
        self
    }

    /// Indicator the controller under test should share
    pub fn indicator(&self) -> LoadingIndicator {
        self.indicator.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn visibility_during_calls(&self) -> Vec<bool> {
        self.visibility.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, call: Call, scripted: &Scripted<T>) -> Result<T, ActionError> {
        self.calls.lock().unwrap().push(call);
        self.visibility
            .lock()
            .unwrap()
            .push(self.indicator.is_visible());

        scripted
            .clone()
            .unwrap_or_else(|| Err(ActionError::transport("no scripted response")))
    }
}

#[rocket::async_trait]
impl Backend for ScriptedBackend {
    async fn detect(&self, text: &str) -> Result<AnalysisResult, ActionError> {
        self.answer(Call::Detect(text.to_string()), &self.detect)
    }

    async fn extract_url(&self, url: &str) -> Result<ExtractedText, ActionError> {
        self.answer(Call::ExtractUrl(url.to_string()), &self.extract)
    }

    async fn search_company(
        &self,
        company_name: &str,
    ) -> Result<CompanySearchResponse, ActionError> {
        self.answer(Call::SearchCompany(company_name.to_string()), &self.company)
    }

    async fn analyze_linkedin(&self, linkedin_url: &str) -> Result<AnalysisResult, ActionError> {
        self.answer(Call::AnalyzeLinkedin(linkedin_url.to_string()), &self.linkedin)
    }

    async fn export_pdf(&self, analysis: &AnalysisResult) -> Result<Vec<u8>, ActionError> {
        self.answer(Call::ExportPdf(analysis.result.clone()), &self.export)
    }
}

pub fn analysis(label: &str, confidence: f64, word_count: u64) -> AnalysisResult {
    serde_json::from_value(serde_json::json!({
        "result": label,
        "confidence_score": confidence,
        "word_count": word_count,
        "pattern_matches": []
    }))
    .unwrap()
}
