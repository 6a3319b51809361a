use gloo::net::http::{Request, Response};
use thiserror::Error;
use uuid::Uuid;
use web_sys::{File, FormData};

use shared::{
    CashflowMonth, ForecastPoint, ForecastResponse, SessionIdentity, SimulationOutcome,
    SimulationRequest, UploadSummary,
};

use crate::services::logging::Logger;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Failures surfaced by [`ApiClient`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("server rejected the request ({status}): {detail}")]
    Api { status: u16, detail: String },
    /// The request never produced a response (refused connection, CORS, offline).
    #[error("network request failed: {0}")]
    Network(String),
    /// A 2xx response carried a body that did not match the expected shape.
    #[error("could not decode server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for an error banner. Server-provided detail wins;
    /// transport and decode failures fall back to the caller's wording.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { detail, .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// API client for communicating with the analytics backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the base URL baked in at build time
    /// (`POCKET_CFO_API_URL`), falling back to the local dev server
    pub fn new() -> Self {
        Self {
            base_url: option_env!("POCKET_CFO_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Upload a CSV of bank transactions for ingestion
    pub async fn upload_transactions(
        &self,
        identity: &SessionIdentity,
        file: File,
    ) -> Result<UploadSummary, ApiError> {
        let url = format!(
            "{}/transactions/upload-csv?user_id={}",
            self.base_url, identity.user_id
        );

        let form = FormData::new()
            .map_err(|_| ApiError::Network("browser refused to create form data".to_string()))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file to form data".to_string()))?;
        form.append_with_str("account_id", &identity.account_id.to_string())
            .map_err(|_| {
                ApiError::Network("could not attach account id to form data".to_string())
            })?;

        let request = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(format!("could not build upload request: {}", e)))?;
        let response = self.execute(request).await?;
        response
            .json::<UploadSummary>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Get the per-month income/expense aggregation for a user
    pub async fn fetch_cashflow(&self, user_id: Uuid) -> Result<Vec<CashflowMonth>, ApiError> {
        let url = format!("{}/analytics/cashflow/{}", self.base_url, user_id);
        let request = Request::get(&url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.execute(request).await?;
        response
            .json::<Vec<CashflowMonth>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Get the projected balance series for a user. Accepts both the
    /// enveloped and the bare-array payload shape; anything else is a
    /// decode failure that gets logged with the offending body.
    pub async fn fetch_forecast(&self, user_id: Uuid) -> Result<Vec<ForecastPoint>, ApiError> {
        let url = format!("{}/analytics/forecast/{}", self.base_url, user_id);
        let request = Request::get(&url)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.execute(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        match serde_json::from_str::<ForecastResponse>(&body) {
            Ok(decoded) => Ok(decoded.into_points()),
            Err(e) => {
                Logger::error_with_component(
                    "api",
                    &format!(
                        "forecast payload matched neither known shape: {} body={}",
                        e, body
                    ),
                );
                Err(ApiError::Decode(e.to_string()))
            }
        }
    }

    /// Run a what-if spending simulation
    pub async fn run_simulation(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationOutcome, ApiError> {
        let url = format!("{}/simulation/run", self.base_url);
        let request = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("could not encode request body: {}", e)))?;
        let response = self.execute(request).await?;
        response
            .json::<SimulationOutcome>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a built request and normalize the failure modes: transport
    /// errors become `Network`, non-2xx statuses become `Api` with the
    /// server's `detail` field extracted when the body carries one. Every
    /// failed exchange is logged with enough context to debug from the
    /// console alone.
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                Logger::error_with_component(
                    "api",
                    &format!("request to {} never completed: {}", url, e),
                );
                return Err(ApiError::Network(e.to_string()));
            }
        };

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body).unwrap_or_else(|| body.clone());
        Logger::error_with_component(
            "api",
            &format!(
                "request failed: status={} url={} detail={}",
                status, url, detail
            ),
        );
        Err(ApiError::Api { status, detail })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the `detail` field out of the backend's JSON error body. Validation
/// errors arrive as structured JSON rather than a string; those are
/// stringified wholesale.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_extracted_from_json_error_bodies() {
        assert_eq!(
            extract_detail(r#"{"detail": "Only CSV files allowed"}"#),
            Some("Only CSV files allowed".to_string())
        );
    }

    #[test]
    fn structured_detail_is_stringified() {
        let body = r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"}]}"#;
        let detail = extract_detail(body).unwrap();
        assert!(detail.contains("field required"));
    }

    #[test]
    fn non_json_bodies_have_no_detail() {
        assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn bodies_without_detail_have_no_detail() {
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = ApiError::Api {
            status: 400,
            detail: "Only CSV files allowed".to_string(),
        };
        assert_eq!(err.user_message("Upload failed."), "Only CSV files allowed");
    }

    #[test]
    fn user_message_falls_back_when_detail_is_blank() {
        let err = ApiError::Api {
            status: 502,
            detail: "  ".to_string(),
        };
        assert_eq!(err.user_message("Upload failed."), "Upload failed.");

        let err = ApiError::Network("timeout".to_string());
        assert_eq!(err.user_message("Upload failed."), "Upload failed.");
    }

    #[test]
    fn custom_base_url_is_respected() {
        let client = ApiClient::with_base_url("https://api.example.test/v1".to_string());
        assert_eq!(client.base_url, "https://api.example.test/v1");
    }
}
