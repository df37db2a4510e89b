//! HTTP client for the analysis service: one multipart POST per submit,
//! with the response (or failure) mapped to a single user-visible message.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::client::models::analysis::AnalysisResult;
use crate::client::models::app_state::AttachedFile;

/// Longest slice of a raw error body that gets surfaced to the user.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Everything that can end a submit attempt. Each variant displays as the
/// one line shown in the error panel; none are retried, none panic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Please enter text or upload a file.")]
    NoInput,
    #[error("The analysis service address is not configured. Set ANALYZER_API_URL and restart.")]
    MissingEndpoint,
    #[error("The configured analysis service address '{0}' is not a valid URL.")]
    BadEndpoint(String),
    #[error("Could not reach the analysis service. Check your connection and try again.")]
    Unreachable,
    #[error("{0}")]
    Backend(String),
    #[error("The analysis service returned a response that could not be read.")]
    InvalidResponse,
}

/// Exactly one of pasted text or an attached file.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisInput {
    Text(String),
    File(AttachedFile),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub base_url: String,
    pub input: AnalysisInput,
}

/// Error envelope the backend returns on failures (FastAPI convention).
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    detail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisService {
    client: Client,
}

impl AnalysisService {
    pub fn new() -> Self {
        // transport defaults only: no timeout, no retries
        Self {
            client: Client::new(),
        }
    }

    /// Issue the one POST of a submit attempt. The multipart body carries
    /// exactly one field; no custom headers (reqwest supplies the boundary).
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let url = endpoint_url(&request.base_url)?;
        let form = match request.input {
            AnalysisInput::Text(text) => {
                log::info!("Submitting pasted text ({} bytes) to {}", text.len(), url);
                Form::new().text("text_content", text)
            }
            AnalysisInput::File(file) => {
                log::info!(
                    "Submitting file '{}' ({} bytes) to {}",
                    file.name,
                    file.bytes.len(),
                    url
                );
                let part = Part::bytes(file.bytes)
                    .file_name(file.name.clone())
                    .mime_str(file.mime)
                    .map_err(|e| {
                        AnalysisError::Backend(format!("Could not encode the upload: {}", e))
                    })?;
                Form::new().part("file_upload", part)
            }
        };

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = backend_error_message(status.as_u16(), &body);
            log::warn!("Analysis request failed: {}", message);
            return Err(AnalysisError::Backend(message));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        match serde_json::from_str::<AnalysisResult>(&body) {
            Ok(result) => {
                log::info!(
                    "Analysis succeeded: summary of {} chars, {} nationalities",
                    result.summary.len(),
                    result.nationalities.len()
                );
                Ok(result)
            }
            Err(e) => {
                log::warn!("2xx response with unparsable body: {}", e);
                Err(AnalysisError::InvalidResponse)
            }
        }
    }
}

/// Join the configured base with the `/analyze` path.
pub fn endpoint_url(base: &str) -> Result<Url, AnalysisError> {
    let joined = format!("{}/analyze", base.trim_end_matches('/'));
    Url::parse(&joined).map_err(|_| AnalysisError::BadEndpoint(base.to_string()))
}

/// Connectivity failures get a fixed, friendlier message than anything the
/// backend says; the underlying error is only logged.
fn classify_transport_error(error: reqwest::Error) -> AnalysisError {
    if error.is_decode() {
        return AnalysisError::InvalidResponse;
    }
    log::warn!("Transport failure talking to the analysis service: {}", error);
    AnalysisError::Unreachable
}

/// Map a non-2xx response to its user-visible message: a non-empty `detail`
/// field wins verbatim, otherwise the status code plus the raw body
/// (truncated past `MAX_ERROR_BODY_CHARS`).
pub fn backend_error_message(status: u16, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(detail) = envelope.detail {
            let detail = detail.trim();
            if !detail.is_empty() {
                return detail.to_string();
            }
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        return format!("HTTP error! status: {}", status);
    }
    if raw.chars().count() <= MAX_ERROR_BODY_CHARS {
        format!("HTTP {}: {}", status, raw)
    } else {
        let cut: String = raw.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("HTTP {}: {}…", status, cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_is_surfaced_verbatim() {
        assert_eq!(backend_error_message(500, r#"{"detail":"boom"}"#), "boom");
    }

    #[test]
    fn blank_detail_falls_back_to_the_raw_body() {
        let message = backend_error_message(500, r#"{"detail":"  "}"#);
        assert!(message.contains("500"));
        assert!(message.contains("detail"));
    }

    #[test]
    fn non_json_body_keeps_status_and_text() {
        let message = backend_error_message(500, "<html>Internal Server Error</html>");
        assert!(message.contains("500"));
        assert!(message.contains("<html>Internal Server Error</html>"));
    }

    #[test]
    fn json_without_detail_keeps_status_and_text() {
        let message = backend_error_message(422, r#"{"message":"unprocessable"}"#);
        assert!(message.contains("422"));
        assert!(message.contains("unprocessable"));
    }

    #[test]
    fn empty_body_reports_the_status_alone() {
        assert_eq!(backend_error_message(502, ""), "HTTP error! status: 502");
    }

    #[test]
    fn very_long_bodies_are_truncated() {
        let body = "x".repeat(5 * MAX_ERROR_BODY_CHARS);
        let message = backend_error_message(500, &body);
        assert!(message.starts_with("HTTP 500: "));
        assert!(message.ends_with('…'));
        assert!(message.chars().count() < body.len());
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        let body = "é".repeat(MAX_ERROR_BODY_CHARS + 50);
        let message = backend_error_message(500, &body);
        assert!(message.ends_with('…'));
        assert_eq!(
            message.chars().filter(|c| *c == 'é').count(),
            MAX_ERROR_BODY_CHARS
        );
    }

    #[test]
    fn endpoint_url_joins_analyze_onto_the_base() {
        assert_eq!(
            endpoint_url("http://localhost:8000").unwrap().as_str(),
            "http://localhost:8000/analyze"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/").unwrap().as_str(),
            "http://localhost:8000/analyze"
        );
        // a base with a path keeps its prefix
        assert_eq!(
            endpoint_url("https://api.example.com/v1").unwrap().as_str(),
            "https://api.example.com/v1/analyze"
        );
    }

    #[test]
    fn malformed_base_is_reported_as_configuration() {
        assert_eq!(
            endpoint_url("not a url").unwrap_err(),
            AnalysisError::BadEndpoint("not a url".to_string())
        );
    }

    #[test]
    fn network_message_differs_from_backend_messages() {
        let network = AnalysisError::Unreachable.to_string();
        let backend = AnalysisError::Backend(backend_error_message(500, "oops")).to_string();
        assert_ne!(network, backend);
        assert!(network.contains("connection"));
        assert!(!network.contains("500"));
    }
}
