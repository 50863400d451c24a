//! Domain-to-print transformer
//!
//! Pure mapping from order/payment records into the canonical print
//! documents. Grouping is stable by first appearance of a station;
//! currency math is integer minor units throughout.

use thiserror::Error;

use super::document::{
    InvoiceMenuItem, PrintGroup, PrintInvoiceRequest, PrintMenuItem, PrintOrderRequest,
};
use crate::models::{Order, OrderItem, Payment, PaymentMethod, RestaurantInfo};
use crate::money;

/// Station assigned to items whose record carries no station tag.
/// Such items are routed here, never dropped.
pub const FALLBACK_STATION: &str = "General";

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Invoice requested for an order with no completed payment
    #[error("order has no completed payment")]
    OrderNotPaid,

    /// Payment record carries both a tip amount and a tip percentage
    #[error("payment carries both a tip amount and a tip percentage")]
    ConflictingTip,
}

/// Build the kitchen ticket for an order.
///
/// Items are partitioned into groups by station, in order of first
/// appearance, preserving the original per-item ordering within each
/// group. Modifiers and the item note become the line's ordered notes.
pub fn order_ticket(order: &Order, items: &[OrderItem]) -> PrintOrderRequest {
    let mut groups: Vec<PrintGroup> = Vec::new();

    for item in items {
        let station = item
            .station
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(FALLBACK_STATION);

        let mut notes = item.modifiers.clone();
        if let Some(note) = &item.note {
            notes.push(note.clone());
        }

        let line = PrintMenuItem {
            name: item.name.clone(),
            quantity: item.quantity,
            notes,
            station: station.to_string(),
        };

        match groups.iter_mut().find(|g| g.station == station) {
            Some(group) => group.items.push(line),
            None => groups.push(PrintGroup {
                station: station.to_string(),
                items: vec![line],
            }),
        }
    }

    PrintOrderRequest {
        order_id: order.id.clone(),
        table_id: order.table_id.clone(),
        groups,
        created_at: order.created_at,
        note: order.note.clone(),
    }
}

/// Build the customer invoice for a paid order.
///
/// Fails when no payment exists (an unpaid order must not produce a
/// zero-total invoice) or when the payment record is self-contradictory.
pub fn invoice(
    restaurant: &RestaurantInfo,
    order: &Order,
    items: &[OrderItem],
    payment: Option<&Payment>,
) -> Result<PrintInvoiceRequest, TransformError> {
    let payment = payment.ok_or(TransformError::OrderNotPaid)?;

    let lines: Vec<InvoiceMenuItem> = items
        .iter()
        .map(|item| InvoiceMenuItem {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: money::line_subtotal(item.quantity, item.unit_price),
        })
        .collect();

    let subtotal: i64 = lines.iter().map(|l| l.subtotal).sum();

    let tip = match (payment.tip_amount, payment.tip_percentage) {
        (Some(_), Some(_)) => return Err(TransformError::ConflictingTip),
        (Some(amount), None) => Some(amount),
        (None, Some(pct)) => Some(money::percentage_of(subtotal, pct)),
        (None, None) => None,
    };

    let total =
        subtotal + order.tax.unwrap_or(0) + tip.unwrap_or(0) - order.discount.unwrap_or(0);

    let (received, change) = match (payment.method, payment.received) {
        (PaymentMethod::Cash, Some(received)) => (Some(received), Some((received - total).max(0))),
        _ => (None, None),
    };

    Ok(PrintInvoiceRequest {
        order_id: order.id.clone(),
        restaurant: restaurant.clone(),
        items: lines,
        tax: order.tax,
        tip,
        discount: order.discount,
        total,
        received,
        change,
    })
}
