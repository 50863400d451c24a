//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Active,
    Completed,
    Void,
}

/// Payment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

/// Order item as stored with the order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in minor currency units
    pub unit_price: i64,
    /// Routing station ("Cocina", "Bar"); items without one are routed to
    /// the fallback station by the transformer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Ordered preparation modifiers ("sin cebolla", "término medio")
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Free-text item note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_id: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// Total amount in minor currency units
    pub total: i64,
    /// Order-level tax in minor currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<i64>,
    /// Order-level discount in minor currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    /// Creation timestamp (UTC milliseconds)
    pub created_at: i64,
    /// Free-text order note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
