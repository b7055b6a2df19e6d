//! The order line record — one row of the synthetic transactions table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{Category, Channel, PaymentMethod, Region};
use crate::types::{Money, OrderId};

/// Tolerance for the derived-revenue check. Revenue is written as the
/// exact f64 product of price and quantity, so anything beyond rounding
/// noise means the row was edited out-of-band.
pub const REVENUE_TOLERANCE: f64 = 1e-6;

/// One synthetic order line. Field order matches the on-disk column
/// order in `schema::REQUIRED_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub category: Category,
    pub product: String,
    pub price: Money,
    pub quantity: u32,
    pub revenue: Money,
    pub region: Region,
    pub channel: Channel,
    pub payment_method: PaymentMethod,
    pub customer_age: u32,
    pub rating: u32,
    pub delivery_days: u32,
}

impl OrderRecord {
    /// The revenue column is derived; it must always equal
    /// price × quantity.
    pub fn revenue_is_consistent(&self) -> bool {
        (self.revenue - self.price * self.quantity as f64).abs() < REVENUE_TOLERANCE
    }
}
