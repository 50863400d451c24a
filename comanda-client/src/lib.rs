//! # comanda-client
//!
//! Stateless request layer over the physical print backend.
//!
//! ## Scope
//!
//! This crate handles HOW a validated document reaches the backend:
//! - Configuration (base URL + bounded timeout, environment-supplied)
//! - One HTTP round-trip per call, no retry
//! - Typed failure modes ([`ServiceError`])
//! - The [`PrintTransport`] seam the orchestration layer depends on
//!
//! Retry policy, availability tracking and error surfacing belong to
//! `comanda-dispatch`. Only documents tagged [`comanda_core::Valid`] are
//! accepted, so an unvalidated payload cannot be sent by construction.

mod config;
mod error;
mod http;
mod transport;

// Re-exports
pub use config::{ClientConfig, ConfigError, DEFAULT_TIMEOUT_SECS, ENV_BASE_URL, ENV_TIMEOUT};
pub use error::{ServiceError, ServiceResult};
pub use http::PrintClient;
pub use transport::PrintTransport;
