//! Shared domain and print document types for the Comanda back office
//!
//! Common types used across the print pipeline crates: the domain records
//! read from the order store, the canonical print document model, the
//! domain-to-print transformer and the pre-dispatch contract validator.
//!
//! This crate is pure: no I/O, no async. Everything network-facing lives
//! in `comanda-client` and `comanda-dispatch`.

pub mod models;
pub mod money;
pub mod print;

// Re-exports
pub use models::{Order, OrderItem, Payment, PaymentMethod, PaymentStatus, RestaurantInfo};
pub use print::document::{
    InvoiceMenuItem, PrintGroup, PrintInvoiceRequest, PrintInvoiceResponse, PrintMenuItem,
    PrintOrderRequest, PrintOrderResponse,
};
pub use print::transform::{self, TransformError};
pub use print::validate::{self, Valid, ValidationError, ViolationCode};
