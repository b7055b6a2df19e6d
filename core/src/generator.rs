//! Synthetic order generation.
//!
//! The sampling order per candidate row is fixed:
//!   date → seasonal keep/drop → category → sku → price → quantity →
//!   region → channel → payment → age → rating → delivery.
//! Each column draws from its own seeded stream (see rng.rs), and a
//! rejected candidate consumes no draws beyond date and season, so the
//! surviving rows' column values never depend on how many candidates
//! were dropped before them.

use chrono::{Datelike, Days};

use crate::config::GenConfig;
use crate::record::OrderRecord;
use crate::rng::{FieldSlot, RngBank};
use crate::schema::{
    self, Category, Channel, PaymentMethod, Region, CUSTOMER_AGE_MAX, CUSTOMER_AGE_MIN,
    DELIVERY_DAYS_MAX, DELIVERY_DAYS_MIN, QUANTITY_MAX, QUANTITY_MIN, RATING_MAX, RATING_MIN,
    SKU_MAX, SKU_MIN,
};

/// Share of November/December candidates kept when seasonal shaping is
/// enabled. Rejection sampling: the rest are dropped, thinning the
/// holiday months relative to the uniform date draw.
pub const SEASONAL_KEEP_PROBABILITY: f64 = 0.3;

/// Numeric suffix of the first order id in a run.
pub const ORDER_ID_BASE: usize = 1000;

pub struct Generator {
    bank: RngBank,
}

impl Generator {
    pub fn new(master_seed: u64) -> Self {
        Self {
            bank: RngBank::new(master_seed),
        }
    }

    /// Build up to `cfg.rows` records. Every returned record satisfies
    /// revenue == price * quantity and draws each field from its closed
    /// set or declared range.
    ///
    /// With `cfg.seasonal` set the returned table is smaller than
    /// `cfg.rows`; callers that need an exact row count leave it off.
    pub fn generate(&self, cfg: &GenConfig) -> Vec<OrderRecord> {
        let mut date_rng = self.bank.for_field(FieldSlot::Date);
        let mut season_rng = self.bank.for_field(FieldSlot::Season);
        let mut category_rng = self.bank.for_field(FieldSlot::Category);
        let mut sku_rng = self.bank.for_field(FieldSlot::Sku);
        let mut price_rng = self.bank.for_field(FieldSlot::Price);
        let mut quantity_rng = self.bank.for_field(FieldSlot::Quantity);
        let mut region_rng = self.bank.for_field(FieldSlot::Region);
        let mut channel_rng = self.bank.for_field(FieldSlot::Channel);
        let mut payment_rng = self.bank.for_field(FieldSlot::Payment);
        let mut age_rng = self.bank.for_field(FieldSlot::CustomerAge);
        let mut rating_rng = self.bank.for_field(FieldSlot::Rating);
        let mut delivery_rng = self.bank.for_field(FieldSlot::Delivery);

        let start = schema::window_start();
        let mut rows = Vec::with_capacity(cfg.rows);

        for i in 0..cfg.rows {
            let offset = date_rng.next_u64_below(schema::WINDOW_DAYS);
            let date = start + Days::new(offset);

            if cfg.seasonal
                && matches!(date.month(), 11 | 12)
                && !season_rng.chance(SEASONAL_KEEP_PROBABILITY)
            {
                continue;
            }

            let category =
                Category::ALL[category_rng.next_u64_below(Category::ALL.len() as u64) as usize];
            let sku = SKU_MIN + sku_rng.next_u64_below(SKU_MAX - SKU_MIN + 1);
            let product = format!("{} SKU-{sku}", category.as_str());

            // Round the unit price to cents before deriving revenue, so
            // the stored revenue equals price * quantity exactly.
            let (lo, hi) = category.price_band();
            let price = round_cents(price_rng.uniform(lo, hi));
            let quantity = QUANTITY_MIN
                + quantity_rng.next_u64_below((QUANTITY_MAX - QUANTITY_MIN + 1) as u64) as u32;
            let revenue = price * quantity as f64;

            rows.push(OrderRecord {
                order_id: format!("ORD-{}", ORDER_ID_BASE + i),
                date,
                category,
                product,
                price,
                quantity,
                revenue,
                region: Region::ALL[region_rng.next_u64_below(Region::ALL.len() as u64) as usize],
                channel: Channel::ALL
                    [channel_rng.next_u64_below(Channel::ALL.len() as u64) as usize],
                payment_method: PaymentMethod::ALL
                    [payment_rng.next_u64_below(PaymentMethod::ALL.len() as u64) as usize],
                customer_age: CUSTOMER_AGE_MIN
                    + age_rng.next_u64_below((CUSTOMER_AGE_MAX - CUSTOMER_AGE_MIN + 1) as u64)
                        as u32,
                rating: RATING_MIN
                    + rating_rng.next_u64_below((RATING_MAX - RATING_MIN + 1) as u64) as u32,
                delivery_days: DELIVERY_DAYS_MIN
                    + delivery_rng.next_u64_below((DELIVERY_DAYS_MAX - DELIVERY_DAYS_MIN + 1) as u64)
                        as u32,
            });
        }

        log::info!(
            "generated {} rows (attempted {}, seed={}, seasonal={})",
            rows.len(),
            cfg.rows,
            cfg.seed,
            cfg.seasonal
        );
        rows
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
