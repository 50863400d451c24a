//! HTTP client for the print backend
//!
//! One network round-trip per call with the configured timeout. Retry and
//! availability policy live upstream in the orchestration layer.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use comanda_core::{
    PrintInvoiceRequest, PrintInvoiceResponse, PrintOrderRequest, PrintOrderResponse, Valid,
};

use crate::{ClientConfig, ServiceError, ServiceResult};

/// Structured error body returned by the backend on rejection
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    code: String,
    message: String,
}

/// HTTP client for submitting print documents
#[derive(Debug, Clone)]
pub struct PrintClient {
    client: Client,
    base_url: String,
}

impl PrintClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Probe the backend health endpoint.
    ///
    /// `Ok(false)` means the endpoint answered but reports itself down;
    /// transport failures surface as `Err`.
    pub async fn check_availability(&self) -> ServiceResult<bool> {
        let response = self.client.get(self.url("health")).send().await?;
        Ok(response.status().is_success())
    }

    /// Submit a validated kitchen ticket
    pub async fn send_order(
        &self,
        document: &Valid<PrintOrderRequest>,
    ) -> ServiceResult<PrintOrderResponse> {
        tracing::debug!(order_id = %document.order_id, "submitting kitchen ticket");
        self.post("print/order", document.get()).await
    }

    /// Submit a validated invoice
    pub async fn send_invoice(
        &self,
        document: &Valid<PrintInvoiceRequest>,
    ) -> ServiceResult<PrintInvoiceResponse> {
        tracing::debug!(order_id = %document.order_id, "submitting invoice");
        self.post("print/invoice", document.get()).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ServiceResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ServiceResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<BackendErrorBody>(&text) {
                Ok(body) => ServiceError::RejectedByBackend {
                    code: body.code,
                    message: body.message,
                },
                // No structured body; keep the status as the code.
                Err(_) => ServiceError::RejectedByBackend {
                    code: status.as_u16().to_string(),
                    message: text,
                },
            });
        }

        response
            .json()
            .await
            .map_err(|_| ServiceError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn structured_rejection_maps_to_rejected_by_backend() {
        let err = PrintClient::handle_response::<PrintOrderResponse>(response(
            503,
            r#"{"code":"PAPER_OUT","message":"kitchen printer out of paper"}"#,
        ))
        .await
        .unwrap_err();

        assert_eq!(
            err,
            ServiceError::RejectedByBackend {
                code: "PAPER_OUT".to_string(),
                message: "kitchen printer out of paper".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unstructured_rejection_keeps_the_status_code() {
        let err = PrintClient::handle_response::<PrintOrderResponse>(response(
            500,
            "internal server error",
        ))
        .await
        .unwrap_err();

        assert_eq!(
            err,
            ServiceError::RejectedByBackend {
                code: "500".to_string(),
                message: "internal server error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn undecodable_success_body_is_malformed() {
        let err = PrintClient::handle_response::<PrintOrderResponse>(response(200, "not json"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::MalformedResponse);
    }

    #[tokio::test]
    async fn success_body_decodes() {
        let parsed = PrintClient::handle_response::<PrintOrderResponse>(response(
            200,
            r#"{"success":true,"job_id":"job-17"}"#,
        ))
        .await
        .unwrap();

        assert!(parsed.success);
        assert_eq!(parsed.job_id.as_deref(), Some("job-17"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = PrintClient::new(&ClientConfig::new("http://localhost:9100/"));
        assert_eq!(client.url("health"), "http://localhost:9100/health");
        assert_eq!(client.url("/print/order"), "http://localhost:9100/print/order");
    }
}
