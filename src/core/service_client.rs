// src/core/service_client.rs
//! HTTP client for the fraud-detection backend - JSON over POST for every endpoint

use anyhow::{Context, Result};
use reqwest::Response;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, trace, warn};

use super::error::ActionError;
use crate::types::{
    request::{
        CompanySearchRequest, DetectRequest, ExportRequest, ExtractUrlRequest, LinkedinRequest,
    },
    response::ErrorBody,
    AnalysisResult, CompanySearchResponse, ExtractedText,
};

const DETECT_ENDPOINT: &str = "/detect";
const EXTRACT_URL_ENDPOINT: &str = "/extract_url";
const SEARCH_COMPANY_ENDPOINT: &str = "/search_company";
const ANALYZE_LINKEDIN_ENDPOINT: &str = "/analyze_linkedin";
const EXPORT_PDF_ENDPOINT: &str = "/export_pdf";

/// The calls the view controller makes. Implemented over HTTP by
/// [`ServiceClient`]; tests script their own.
#[rocket::async_trait]
pub trait Backend: Send + Sync {
    async fn detect(&self, text: &str) -> Result<AnalysisResult, ActionError>;

    async fn extract_url(&self, url: &str) -> Result<ExtractedText, ActionError>;

    async fn search_company(&self, company_name: &str)
        -> Result<CompanySearchResponse, ActionError>;

    async fn analyze_linkedin(&self, linkedin_url: &str) -> Result<AnalysisResult, ActionError>;

    /// Returns the raw report bytes
    async fn export_pdf(&self, analysis: &AnalysisResult) -> Result<Vec<u8>, ActionError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic POST with a JSON body, returning the response once its status
    /// is known to be a success
    async fn post<T>(&self, endpoint: &str, payload: &T) -> Result<Response, ActionError>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        trace!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                ActionError::transport(e)
            })?;

        let status = response.status();
        trace!("Response status from {}: {}", endpoint, status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&error_text)
            .ok()
            .and_then(|body| body.error);

        warn!(
            "Backend {} returned {}: {}",
            endpoint,
            status,
            message.as_deref().unwrap_or(&error_text)
        );

        Err(ActionError::Application {
            status: status.as_u16(),
            message,
        })
    }

    async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R, ActionError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.post(endpoint, payload).await?;
        let body = response.text().await.map_err(ActionError::transport)?;

        serde_json::from_str::<R>(&body).map_err(|e| {
            error!("Failed to parse {} response: {}. Raw response: {}", endpoint, e, body);
            ActionError::Transport(format!("malformed response from {}: {}", endpoint, e))
        })
    }
}

#[rocket::async_trait]
impl Backend for ServiceClient {
    async fn detect(&self, text: &str) -> Result<AnalysisResult, ActionError> {
        self.post_json(DETECT_ENDPOINT, &DetectRequest { text }).await
    }

    async fn extract_url(&self, url: &str) -> Result<ExtractedText, ActionError> {
        self.post_json(EXTRACT_URL_ENDPOINT, &ExtractUrlRequest { url })
            .await
    }

    async fn search_company(
        &self,
        company_name: &str,
    ) -> Result<CompanySearchResponse, ActionError> {
        self.post_json(
            SEARCH_COMPANY_ENDPOINT,
            &CompanySearchRequest { company_name },
        )
        .await
    }

    async fn analyze_linkedin(&self, linkedin_url: &str) -> Result<AnalysisResult, ActionError> {
        self.post_json(ANALYZE_LINKEDIN_ENDPOINT, &LinkedinRequest { linkedin_url })
            .await
    }

    async fn export_pdf(&self, analysis: &AnalysisResult) -> Result<Vec<u8>, ActionError> {
        let response = self
            .post(
                EXPORT_PDF_ENDPOINT,
                &ExportRequest {
                    analysis_data: analysis,
                },
            )
            .await?;

        let bytes = response.bytes().await.map_err(ActionError::transport)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and hands back the raw request
    async fn one_shot_server(status_line: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let lower = line.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn test_detect_posts_text_and_parses_result() {
        let (base, server) = one_shot_server(
            "200 OK",
            r#"{"result":"Likely REAL ✅","confidence_score":91.2,"word_count":5,"pattern_matches":[]}"#,
        )
        .await;
        let client = ServiceClient::new(&base, 5).unwrap();

        let result = client.detect("Senior Rust engineer wanted").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /detect "));
        assert!(request.contains(r#"{"text":"Senior Rust engineer wanted"}"#));
        assert_eq!(result.result, "Likely REAL ✅");
        assert_eq!(result.confidence_score.to_string(), "91.2");
    }

    #[tokio::test]
    async fn test_error_status_becomes_application_error() {
        let (base, server) =
            one_shot_server("400 BAD REQUEST", r#"{"error":"Invalid URL format"}"#).await;
        let client = ServiceClient::new(&base, 5).unwrap();

        let err = client.extract_url("ftp://nowhere").await.unwrap_err();
        let request = server.await.unwrap();

        assert!(request.contains(r#"{"url":"ftp://nowhere"}"#));
        match err {
            ActionError::Application { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Invalid URL format"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_has_no_message() {
        let (base, server) = one_shot_server("502 BAD GATEWAY", "upstream down").await;
        let client = ServiceClient::new(&base, 5).unwrap();

        let err = client.search_company("google").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(
            err,
            ActionError::Application {
                status: 502,
                message: None
            }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ServiceClient::new(&format!("http://{}", addr), 5).unwrap();
        let err = client.detect("anything").await.unwrap_err();

        assert!(matches!(err, ActionError::Transport(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ServiceClient::new("http://127.0.0.1:5000/", 5).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }
}
