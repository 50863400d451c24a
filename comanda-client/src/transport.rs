//! Transport seam between the orchestration layer and the wire
//!
//! The controller in `comanda-dispatch` depends on this trait rather than
//! the concrete HTTP client, so tests can substitute a mock and assert
//! exactly which calls were (not) made.

use async_trait::async_trait;

use comanda_core::{
    PrintInvoiceRequest, PrintInvoiceResponse, PrintOrderRequest, PrintOrderResponse, Valid,
};

use crate::{PrintClient, ServiceResult};

/// One round-trip to the print backend per call; no retry, no state.
#[async_trait]
pub trait PrintTransport: Send + Sync {
    /// Probe the backend health endpoint
    async fn check_availability(&self) -> ServiceResult<bool>;

    /// Submit a validated kitchen ticket
    async fn send_order(
        &self,
        document: &Valid<PrintOrderRequest>,
    ) -> ServiceResult<PrintOrderResponse>;

    /// Submit a validated invoice
    async fn send_invoice(
        &self,
        document: &Valid<PrintInvoiceRequest>,
    ) -> ServiceResult<PrintInvoiceResponse>;
}

#[async_trait]
impl PrintTransport for PrintClient {
    async fn check_availability(&self) -> ServiceResult<bool> {
        PrintClient::check_availability(self).await
    }

    async fn send_order(
        &self,
        document: &Valid<PrintOrderRequest>,
    ) -> ServiceResult<PrintOrderResponse> {
        PrintClient::send_order(self, document).await
    }

    async fn send_invoice(
        &self,
        document: &Valid<PrintInvoiceRequest>,
    ) -> ServiceResult<PrintInvoiceResponse> {
        PrintClient::send_invoice(self, document).await
    }
}
