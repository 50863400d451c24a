//! # comanda-dispatch
//!
//! Stateful print orchestration owned by the UI composition root.
//!
//! Sequences transform -> validate -> dispatch for the two document
//! kinds, tracks backend availability through a periodic health probe,
//! and exposes the result as a small read model the status indicator
//! renders. No error from this pipeline escapes to the invoking UI
//! action; the worst outcome is a degraded "printing unavailable" state
//! the operator can retry.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use comanda_client::ClientConfig;
//! use comanda_dispatch::{HealthMonitor, PrintController};
//!
//! let config = ClientConfig::from_env()?;
//! let controller = Arc::new(PrintController::new(
//!     Arc::new(config.build_client()),
//!     restaurant_info,
//! ));
//! HealthMonitor::new(controller.clone(), HealthMonitor::DEFAULT_INTERVAL).spawn();
//!
//! controller.print_order(&order, &items).await;
//! let status = controller.status().await;
//! ```

mod controller;
mod health;
mod state;

// Re-exports
pub use controller::PrintController;
pub use health::HealthMonitor;
pub use state::{DispatchError, DocumentKind, HealthState, PrintState, PrintStatus, StatusIndicator};
