//! Restaurant Info Model

use serde::{Deserialize, Serialize};

/// Static restaurant identity block stamped onto every printed invoice.
///
/// Loaded once from configuration by the composition root; never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestaurantInfo {
    pub name: String,
    pub address: String,
    /// Tax identification number (NIT)
    pub tax_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
