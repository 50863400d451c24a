//! Pre-dispatch contract validator
//!
//! Every document is checked against the wire contract before anything
//! leaves the process. The validator never mutates its input: it either
//! hands the document back wrapped in [`Valid`] or returns the full list
//! of violations. The client only accepts [`Valid`] documents, so an
//! unvalidated request cannot reach the network by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::document::{PrintInvoiceRequest, PrintOrderRequest};

/// A document that passed contract validation.
///
/// Only this module constructs the wrapper; the inner value is exactly
/// what was validated.
#[derive(Debug, Clone)]
pub struct Valid<T>(T);

impl<T> Valid<T> {
    /// Borrow the validated document
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Unwrap the validated document
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Valid<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Reason code for a single contract violation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    RequiredField,
    EmptyDocument,
    InvalidQuantity,
    NegativeAmount,
    TotalMismatch,
    MissingStation,
    StationMismatch,
}

/// One contract violation, naming the offending field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Validate a kitchen ticket document.
pub fn validate_order(
    request: PrintOrderRequest,
) -> Result<Valid<PrintOrderRequest>, Vec<ValidationError>> {
    let mut violations = Vec::new();

    if request.order_id.trim().is_empty() {
        violations.push(ValidationError::new(
            "order_id",
            ViolationCode::RequiredField,
            "order id is required",
        ));
    }
    if request.table_id.trim().is_empty() {
        violations.push(ValidationError::new(
            "table_id",
            ViolationCode::RequiredField,
            "table id is required",
        ));
    }

    if request.groups.iter().all(|g| g.items.is_empty()) {
        violations.push(ValidationError::new(
            "groups",
            ViolationCode::EmptyDocument,
            "ticket has no items",
        ));
    }

    for (gi, group) in request.groups.iter().enumerate() {
        if group.station.trim().is_empty() {
            violations.push(ValidationError::new(
                format!("groups[{}].station", gi),
                ViolationCode::MissingStation,
                "group station tag is empty",
            ));
        }
        for (ii, item) in group.items.iter().enumerate() {
            if item.quantity < 1 {
                violations.push(ValidationError::new(
                    format!("groups[{}].items[{}].quantity", gi, ii),
                    ViolationCode::InvalidQuantity,
                    format!("quantity must be at least 1, got {}", item.quantity),
                ));
            }
            if item.station != group.station {
                violations.push(ValidationError::new(
                    format!("groups[{}].items[{}].station", gi, ii),
                    ViolationCode::StationMismatch,
                    "item station differs from its group",
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(Valid(request))
    } else {
        Err(violations)
    }
}

/// Validate a customer invoice document.
///
/// The declared grand total must equal the recomputed one to the minor
/// unit. A mismatch is a contract violation, not a rounding warning.
pub fn validate_invoice(
    request: PrintInvoiceRequest,
) -> Result<Valid<PrintInvoiceRequest>, Vec<ValidationError>> {
    let mut violations = Vec::new();

    if request.order_id.trim().is_empty() {
        violations.push(ValidationError::new(
            "order_id",
            ViolationCode::RequiredField,
            "order id is required",
        ));
    }
    if request.restaurant.name.trim().is_empty() {
        violations.push(ValidationError::new(
            "restaurant.name",
            ViolationCode::RequiredField,
            "restaurant name is required",
        ));
    }

    if request.items.is_empty() {
        violations.push(ValidationError::new(
            "items",
            ViolationCode::EmptyDocument,
            "invoice has no lines",
        ));
    }

    for (i, item) in request.items.iter().enumerate() {
        if item.quantity < 1 {
            violations.push(ValidationError::new(
                format!("items[{}].quantity", i),
                ViolationCode::InvalidQuantity,
                format!("quantity must be at least 1, got {}", item.quantity),
            ));
        }
        if item.unit_price < 0 {
            violations.push(ValidationError::new(
                format!("items[{}].unit_price", i),
                ViolationCode::NegativeAmount,
                "unit price must not be negative",
            ));
        }
        let expected = i64::from(item.quantity) * item.unit_price;
        if item.subtotal != expected {
            violations.push(ValidationError::new(
                format!("items[{}].subtotal", i),
                ViolationCode::TotalMismatch,
                format!("subtotal is {}, expected {}", item.subtotal, expected),
            ));
        }
    }

    for (field, value) in [
        ("tax", request.tax),
        ("tip", request.tip),
        ("discount", request.discount),
    ] {
        if let Some(amount) = value
            && amount < 0
        {
            violations.push(ValidationError::new(
                field,
                ViolationCode::NegativeAmount,
                format!("{} must not be negative", field),
            ));
        }
    }

    let computed: i64 = request.items.iter().map(|l| l.subtotal).sum::<i64>()
        + request.tax.unwrap_or(0)
        + request.tip.unwrap_or(0)
        - request.discount.unwrap_or(0);
    if request.total != computed {
        violations.push(ValidationError::new(
            "total",
            ViolationCode::TotalMismatch,
            format!("declared total {} differs from computed {}", request.total, computed),
        ));
    }

    if violations.is_empty() {
        Ok(Valid(request))
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RestaurantInfo;
    use crate::print::document::{InvoiceMenuItem, PrintGroup, PrintMenuItem};

    fn ticket() -> PrintOrderRequest {
        PrintOrderRequest {
            order_id: "42".to_string(),
            table_id: "5".to_string(),
            groups: vec![PrintGroup {
                station: "Cocina".to_string(),
                items: vec![PrintMenuItem {
                    name: "Tamal".to_string(),
                    quantity: 2,
                    notes: Vec::new(),
                    station: "Cocina".to_string(),
                }],
            }],
            created_at: 1_700_000_000_000,
            note: None,
        }
    }

    fn bill() -> PrintInvoiceRequest {
        PrintInvoiceRequest {
            order_id: "42".to_string(),
            restaurant: RestaurantInfo {
                name: "La Fonda".to_string(),
                address: "Cra 7 # 12-34".to_string(),
                tax_id: "900123456-7".to_string(),
                phone: None,
            },
            items: vec![
                InvoiceMenuItem {
                    name: "Tamal".to_string(),
                    quantity: 2,
                    unit_price: 8_000,
                    subtotal: 16_000,
                },
                InvoiceMenuItem {
                    name: "Limonada".to_string(),
                    quantity: 1,
                    unit_price: 5_000,
                    subtotal: 5_000,
                },
            ],
            tax: None,
            tip: Some(2_100),
            discount: None,
            total: 23_100,
            received: None,
            change: None,
        }
    }

    #[test]
    fn valid_ticket_passes_unchanged() {
        let input = ticket();
        let valid = validate_order(input.clone()).unwrap();
        assert_eq!(*valid.get(), input);
    }

    #[test]
    fn ticket_requires_identity_fields() {
        let mut input = ticket();
        input.order_id = String::new();
        input.table_id = "  ".to_string();

        let violations = validate_order(input).unwrap_err();
        let codes: Vec<_> = violations.iter().map(|v| v.code).collect();
        assert_eq!(
            codes,
            [ViolationCode::RequiredField, ViolationCode::RequiredField]
        );
        assert_eq!(violations[0].field, "order_id");
        assert_eq!(violations[1].field, "table_id");
    }

    #[test]
    fn ticket_rejects_empty_item_list() {
        let mut input = ticket();
        input.groups.clear();

        let violations = validate_order(input).unwrap_err();
        assert!(violations.iter().any(|v| v.code == ViolationCode::EmptyDocument));
    }

    #[test]
    fn ticket_rejects_zero_quantity_and_empty_station() {
        let mut input = ticket();
        input.groups[0].items[0].quantity = 0;
        input.groups[0].station = String::new();

        let violations = validate_order(input).unwrap_err();
        assert!(violations.iter().any(|v| v.code == ViolationCode::InvalidQuantity));
        assert!(violations.iter().any(|v| v.code == ViolationCode::MissingStation));
        // Item station no longer matches the (now empty) group tag.
        assert!(violations.iter().any(|v| v.code == ViolationCode::StationMismatch));
    }

    #[test]
    fn valid_invoice_passes() {
        assert!(validate_invoice(bill()).is_ok());
    }

    #[test]
    fn invoice_total_off_by_one_minor_unit_is_rejected() {
        let mut input = bill();
        input.total += 1;

        let violations = validate_invoice(input).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, ViolationCode::TotalMismatch);
        assert_eq!(violations[0].field, "total");
    }

    #[test]
    fn invoice_rejects_negative_unit_price_and_bad_subtotal() {
        let mut input = bill();
        input.items[0].unit_price = -1;
        input.items[1].subtotal = 4_999;

        let violations = validate_invoice(input).unwrap_err();
        assert!(violations.iter().any(|v| v.code == ViolationCode::NegativeAmount));
        assert!(violations
            .iter()
            .any(|v| v.code == ViolationCode::TotalMismatch && v.field == "items[1].subtotal"));
    }

    #[test]
    fn invoice_rejects_negative_adjustments() {
        let mut input = bill();
        input.tip = Some(-100);
        input.total = 20_900;

        let violations = validate_invoice(input).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.code == ViolationCode::NegativeAmount && v.field == "tip"));
    }

    #[test]
    fn invoice_requires_at_least_one_line() {
        let mut input = bill();
        input.items.clear();
        input.tip = None;
        input.total = 0;

        let violations = validate_invoice(input).unwrap_err();
        assert!(violations.iter().any(|v| v.code == ViolationCode::EmptyDocument));
    }
}
