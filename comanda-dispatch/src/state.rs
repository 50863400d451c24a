//! Controller state machines and the read model

use serde::Serialize;
use thiserror::Error;

use comanda_client::ServiceError;
use comanda_core::{TransformError, ValidationError};

/// Backend availability as seen by the probe cycle.
///
/// Mutated only by the periodic/on-demand probe, never by the outcome of
/// a print attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthState {
    #[default]
    Unknown,
    Checking,
    Available,
    Unavailable,
}

/// Per-kind print progress. Terminal states flow back through `Printing`
/// on the next request; there is no persistent "done".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrintState {
    #[default]
    Idle,
    Printing,
    Success,
    Failed,
}

/// The two independent document pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Order,
    Invoice,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Order => "order",
            DocumentKind::Invoice => "invoice",
        }
    }
}

/// Why a print attempt failed.
///
/// Captured into the per-kind error slot of the read model; never
/// propagated to the caller of `print_order`/`print_invoice`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    /// Domain record could not be turned into a document
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Document failed contract validation; nothing was sent
    #[error("document failed validation ({} violations)", .0.len())]
    ContractViolation(Vec<ValidationError>),

    /// Health state was `Unavailable`; failed fast without a network call
    #[error("print service is unavailable")]
    ServiceUnavailable,

    /// Timeout / unreachable / undecodable response during dispatch
    #[error(transparent)]
    Transport(ServiceError),

    /// Backend received the document and refused it
    #[error("print backend rejected the job [{code}]: {message}")]
    BackendRejected { code: String, message: String },
}

impl From<ServiceError> for DispatchError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::RejectedByBackend { code, message } => {
                DispatchError::BackendRejected { code, message }
            }
            other => DispatchError::Transport(other),
        }
    }
}

/// Snapshot read model for the presentation layer.
///
/// Five independently observable facts, matching exactly what the status
/// indicator needs.
#[derive(Debug, Clone, Default)]
pub struct PrintStatus {
    pub is_service_available: bool,
    pub is_checking_service: bool,
    pub service_error: Option<ServiceError>,
    pub is_printing: bool,
    pub order_error: Option<DispatchError>,
    pub invoice_error: Option<DispatchError>,
}

/// The five mutually exclusive visual states of the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusIndicator {
    Checking,
    ServiceUnavailable,
    PrintError,
    Printing,
    Available,
}

impl PrintStatus {
    /// Collapse the read model into one visual state.
    ///
    /// Precedence: checking > service-unavailable > print error >
    /// printing > available. Connectivity problems always win over a
    /// transient print error, which wins over normal progress.
    pub fn indicator(&self) -> StatusIndicator {
        if self.is_checking_service {
            StatusIndicator::Checking
        } else if !self.is_service_available {
            StatusIndicator::ServiceUnavailable
        } else if self.order_error.is_some() || self.invoice_error.is_some() {
            StatusIndicator::PrintError
        } else if self.is_printing {
            StatusIndicator::Printing
        } else {
            StatusIndicator::Available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> PrintStatus {
        PrintStatus {
            is_service_available: true,
            ..PrintStatus::default()
        }
    }

    #[test]
    fn indicator_precedence() {
        // Everything at once: checking wins.
        let status = PrintStatus {
            is_service_available: false,
            is_checking_service: true,
            service_error: Some(ServiceError::Timeout),
            is_printing: true,
            order_error: Some(DispatchError::ServiceUnavailable),
            invoice_error: None,
        };
        assert_eq!(status.indicator(), StatusIndicator::Checking);

        // Not checking: connectivity wins over the print error.
        let status = PrintStatus {
            is_checking_service: false,
            ..status
        };
        assert_eq!(status.indicator(), StatusIndicator::ServiceUnavailable);

        // Service back: the stale print error still shows over progress.
        let status = PrintStatus {
            is_service_available: true,
            service_error: None,
            ..status
        };
        assert_eq!(status.indicator(), StatusIndicator::PrintError);

        // Errors cleared: printing.
        let status = PrintStatus {
            order_error: None,
            invoice_error: None,
            ..status
        };
        assert_eq!(status.indicator(), StatusIndicator::Printing);

        // Idle and healthy.
        assert_eq!(available().indicator(), StatusIndicator::Available);
    }

    #[test]
    fn invoice_error_alone_shows_print_error() {
        let status = PrintStatus {
            invoice_error: Some(DispatchError::Transport(ServiceError::Timeout)),
            ..available()
        };
        assert_eq!(status.indicator(), StatusIndicator::PrintError);
    }

    #[test]
    fn startup_unknown_health_reads_unavailable() {
        assert_eq!(
            PrintStatus::default().indicator(),
            StatusIndicator::ServiceUnavailable
        );
    }
}
