//! Domain records as returned by the order store
//!
//! Read-only inputs to the print pipeline. The pipeline never writes these
//! back; it only maps them into print documents.

pub mod order;
pub mod payment;
pub mod restaurant_info;

pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use payment::{Payment, PaymentMethod};
pub use restaurant_info::RestaurantInfo;
