// src/types/request.rs
//! Request payloads sent to the backend

use serde::Serialize;

use super::response::AnalysisResult;

#[derive(Debug, Serialize)]
pub struct DetectRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExtractUrlRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CompanySearchRequest<'a> {
    pub company_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LinkedinRequest<'a> {
    pub linkedin_url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub analysis_data: &'a AnalysisResult,
}
