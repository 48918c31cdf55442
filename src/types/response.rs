// src/types/response.rs
//! Backend response bodies consumed by the view controller

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

// ===== Analysis (/detect, /analyze_linkedin) =====

/// Result of a fraud analysis. Kept verbatim so the export action can resend
/// exactly what was displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub result: String,
    pub confidence_score: Number,
    pub word_count: u64,
    #[serde(default)]
    pub pattern_matches: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_quality_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Fields this client does not render (e.g. `success`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ===== Extraction (/extract_url) =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub word_count: Option<u64>,
}

// ===== Company search (/search_company) =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySearchResponse {
    pub found: bool,
    pub is_fraud: Option<bool>,
    pub company_data: Option<CompanyData>,
    pub message: Option<String>,
    #[serde(default)]
    pub partial_match: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyData {
    pub name: String,
    pub fraud_score: Option<Number>,
    pub reports: Option<Number>,
    pub last_updated: Option<String>,
    pub domain_age: Option<String>,
    pub social_media: Option<String>,
    pub contact_verification: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
}

// ===== Errors =====

/// Body of a non-success backend response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
