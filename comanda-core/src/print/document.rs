//! Canonical print document shapes
//!
//! Two document kinds leave the process: the kitchen ticket
//! ([`PrintOrderRequest`]) and the customer invoice
//! ([`PrintInvoiceRequest`]). Their JSON form is the wire contract with
//! the print backend.

use serde::{Deserialize, Serialize};

use crate::models::RestaurantInfo;

/// One line of a kitchen ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintMenuItem {
    pub name: String,
    pub quantity: i32,
    /// Ordered preparation notes (modifiers first, then the item note)
    #[serde(default)]
    pub notes: Vec<String>,
    /// Station tag; always equals the owning group's station
    pub station: String,
}

/// Named cluster of ticket lines sharing a destination station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintGroup {
    pub station: String,
    pub items: Vec<PrintMenuItem>,
}

/// Kitchen ticket document
///
/// The union of items across `groups` is exactly the source order's item
/// list: nothing dropped, nothing duplicated, quantities untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintOrderRequest {
    pub order_id: String,
    pub table_id: String,
    pub groups: Vec<PrintGroup>,
    /// UTC milliseconds
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One billed invoice line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvoiceMenuItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in minor currency units
    pub unit_price: i64,
    /// Exact quantity × unit price, minor units
    pub subtotal: i64,
}

/// Customer invoice document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintInvoiceRequest {
    pub order_id: String,
    pub restaurant: RestaurantInfo,
    pub items: Vec<InvoiceMenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    /// Grand total = sum(line subtotals) + tax + tip - discount
    pub total: i64,
    /// Cash received (cash payments only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<i64>,
    /// Change due (cash payments only, never negative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<i64>,
}

/// Outcome of one kitchen ticket dispatch attempt
///
/// Terminal for the attempt; the pipeline never retries inside a
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrintOrderResponse {
    pub success: bool,
    /// Backend-assigned print job id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Human-readable failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one invoice dispatch attempt
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PrintInvoiceResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
