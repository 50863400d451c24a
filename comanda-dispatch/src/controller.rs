//! Print orchestration controller
//!
//! One instance per UI session, explicitly constructed by the composition
//! root with its transport injected. All state transitions go through a
//! single `RwLock`-guarded struct (single-writer discipline); print
//! attempts and health probes are epoch-guarded so a superseded attempt's
//! late result is discarded instead of overwriting newer state
//! (last-initiated-wins).

use std::sync::Arc;

use tokio::sync::RwLock;

use comanda_client::PrintTransport;
use comanda_core::{Order, OrderItem, Payment, RestaurantInfo, transform, validate};

use crate::state::{DispatchError, DocumentKind, HealthState, PrintState, PrintStatus};

#[derive(Debug, Default)]
struct KindState {
    state: PrintState,
    error: Option<DispatchError>,
    /// Incremented on every new attempt; completions with a stale epoch
    /// are discarded.
    epoch: u64,
}

#[derive(Debug, Default)]
struct ControllerState {
    health: HealthState,
    service_error: Option<comanda_client::ServiceError>,
    probe_epoch: u64,
    order: KindState,
    invoice: KindState,
}

impl ControllerState {
    fn kind_mut(&mut self, kind: DocumentKind) -> &mut KindState {
        match kind {
            DocumentKind::Order => &mut self.order,
            DocumentKind::Invoice => &mut self.invoice,
        }
    }
}

/// Coordinates transform -> validate -> dispatch and tracks the result
/// per document kind, independently for kitchen tickets and invoices.
pub struct PrintController {
    transport: Arc<dyn PrintTransport>,
    restaurant: RestaurantInfo,
    state: Arc<RwLock<ControllerState>>,
}

impl PrintController {
    /// Create a controller over an injected transport
    pub fn new(transport: Arc<dyn PrintTransport>, restaurant: RestaurantInfo) -> Self {
        Self {
            transport,
            restaurant,
            state: Arc::new(RwLock::new(ControllerState::default())),
        }
    }

    /// Snapshot the read model for the presentation layer
    pub async fn status(&self) -> PrintStatus {
        let state = self.state.read().await;
        PrintStatus {
            is_service_available: state.health == HealthState::Available,
            is_checking_service: state.health == HealthState::Checking,
            service_error: state.service_error.clone(),
            is_printing: state.order.state == PrintState::Printing
                || state.invoice.state == PrintState::Printing,
            order_error: state.order.error.clone(),
            invoice_error: state.invoice.error.clone(),
        }
    }

    /// Print the kitchen ticket for an order.
    ///
    /// Never returns an error to the caller; the outcome lands in the
    /// order slot of the read model.
    pub async fn print_order(&self, order: &Order, items: &[OrderItem]) {
        let epoch = self.begin(DocumentKind::Order).await;
        let result = if self.is_unavailable().await {
            Err(DispatchError::ServiceUnavailable)
        } else {
            self.dispatch_order(order, items).await
        };
        self.finish(DocumentKind::Order, epoch, result).await;
    }

    /// Print the customer invoice for a paid order.
    pub async fn print_invoice(
        &self,
        order: &Order,
        items: &[OrderItem],
        payment: Option<&Payment>,
    ) {
        let epoch = self.begin(DocumentKind::Invoice).await;
        let result = if self.is_unavailable().await {
            Err(DispatchError::ServiceUnavailable)
        } else {
            self.dispatch_invoice(order, items, payment).await
        };
        self.finish(DocumentKind::Invoice, epoch, result).await;
    }

    /// Probe the backend and update health state.
    ///
    /// Called by [`crate::HealthMonitor`] on its interval and directly
    /// when the user forces a refresh. A probe superseded by a newer one
    /// has its result discarded. Print failures never reach this path.
    pub async fn refresh_health(&self) {
        let epoch = {
            let mut state = self.state.write().await;
            state.probe_epoch += 1;
            state.health = HealthState::Checking;
            state.probe_epoch
        };

        let result = self.transport.check_availability().await;

        let mut state = self.state.write().await;
        if state.probe_epoch != epoch {
            tracing::debug!("discarding superseded health probe result");
            return;
        }
        let next = match result {
            Ok(true) => {
                state.service_error = None;
                HealthState::Available
            }
            Ok(false) => {
                state.service_error = None;
                HealthState::Unavailable
            }
            Err(err) => {
                tracing::warn!(error = %err, "health probe failed");
                state.service_error = Some(err);
                HealthState::Unavailable
            }
        };
        if state.health != next {
            tracing::info!(health = ?next, "print service health changed");
        }
        state.health = next;
    }

    async fn is_unavailable(&self) -> bool {
        self.state.read().await.health == HealthState::Unavailable
    }

    async fn begin(&self, kind: DocumentKind) -> u64 {
        let mut state = self.state.write().await;
        let slot = state.kind_mut(kind);
        slot.epoch += 1;
        slot.state = PrintState::Printing;
        slot.error = None;
        slot.epoch
    }

    async fn finish(&self, kind: DocumentKind, epoch: u64, result: Result<(), DispatchError>) {
        let mut state = self.state.write().await;
        let slot = state.kind_mut(kind);
        if slot.epoch != epoch {
            tracing::debug!(kind = kind.as_str(), "discarding superseded print result");
            return;
        }
        match result {
            Ok(()) => {
                slot.state = PrintState::Success;
                slot.error = None;
            }
            Err(err) => {
                tracing::warn!(kind = kind.as_str(), error = %err, "print attempt failed");
                slot.state = PrintState::Failed;
                slot.error = Some(err);
            }
        }
    }

    async fn dispatch_order(
        &self,
        order: &Order,
        items: &[OrderItem],
    ) -> Result<(), DispatchError> {
        let request = transform::order_ticket(order, items);
        let document =
            validate::validate_order(request).map_err(DispatchError::ContractViolation)?;

        let response = self.transport.send_order(&document).await?;
        if response.success {
            tracing::info!(order_id = %order.id, job_id = ?response.job_id, "kitchen ticket printed");
            Ok(())
        } else {
            Err(DispatchError::BackendRejected {
                code: "PRINT_FAILED".to_string(),
                message: response
                    .error
                    .unwrap_or_else(|| "print job failed".to_string()),
            })
        }
    }

    async fn dispatch_invoice(
        &self,
        order: &Order,
        items: &[OrderItem],
        payment: Option<&Payment>,
    ) -> Result<(), DispatchError> {
        let request = transform::invoice(&self.restaurant, order, items, payment)?;
        let document =
            validate::validate_invoice(request).map_err(DispatchError::ContractViolation)?;

        let response = self.transport.send_invoice(&document).await?;
        if response.success {
            tracing::info!(order_id = %order.id, job_id = ?response.job_id, "invoice printed");
            Ok(())
        } else {
            Err(DispatchError::BackendRejected {
                code: "PRINT_FAILED".to_string(),
                message: response
                    .error
                    .unwrap_or_else(|| "print job failed".to_string()),
            })
        }
    }
}
