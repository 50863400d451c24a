//! Payment Model

use serde::{Deserialize, Serialize};

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

/// Completed payment record for an order
///
/// `tip_amount` and `tip_percentage` are mutually exclusive; a record
/// carrying both is rejected before any document is built.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Payment {
    pub method: PaymentMethod,
    /// Literal tip in minor currency units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<i64>,
    /// Tip as a percentage of the pre-tip subtotal (e.g. 10.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_percentage: Option<f64>,
    /// Cash received from the customer, minor units (cash payments only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<i64>,
}
