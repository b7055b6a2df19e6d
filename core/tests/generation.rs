//! Generated-table invariants: the revenue derivation, domain membership
//! of every sampled field, order-id uniqueness, and the seasonal shaper.

use std::collections::HashSet;

use apexsales_core::{
    config::GenConfig,
    generator::{Generator, ORDER_ID_BASE},
    record::OrderRecord,
    schema::{
        self, CUSTOMER_AGE_MAX, CUSTOMER_AGE_MIN, DELIVERY_DAYS_MAX, DELIVERY_DAYS_MIN,
        QUANTITY_MAX, QUANTITY_MIN, RATING_MAX, RATING_MIN, WINDOW_DAYS,
    },
};
use chrono::{Datelike, Days};

fn generate(rows: usize, seed: u64, seasonal: bool) -> Vec<OrderRecord> {
    let cfg = GenConfig {
        rows,
        seed,
        seasonal,
        ..GenConfig::default()
    };
    Generator::new(cfg.seed).generate(&cfg)
}

#[test]
fn revenue_always_equals_price_times_quantity() {
    for row in generate(1000, 42, true) {
        assert!(
            row.revenue_is_consistent(),
            "{}: revenue {} != {} * {}",
            row.order_id,
            row.revenue,
            row.price,
            row.quantity
        );
    }
}

#[test]
fn every_field_stays_inside_its_declared_domain() {
    let window_end = schema::window_start() + Days::new(WINDOW_DAYS - 1);

    for row in generate(1000, 11, false) {
        assert!(
            row.date >= schema::window_start() && row.date <= window_end,
            "{}: date {} outside the sales window",
            row.order_id,
            row.date
        );

        let (lo, hi) = row.category.price_band();
        assert!(
            row.price >= lo && row.price < hi,
            "{}: price {} outside the {} band [{lo}, {hi})",
            row.order_id,
            row.price,
            row.category.as_str()
        );

        assert!((QUANTITY_MIN..=QUANTITY_MAX).contains(&row.quantity));
        assert!((CUSTOMER_AGE_MIN..=CUSTOMER_AGE_MAX).contains(&row.customer_age));
        assert!((RATING_MIN..=RATING_MAX).contains(&row.rating));
        assert!((DELIVERY_DAYS_MIN..=DELIVERY_DAYS_MAX).contains(&row.delivery_days));

        // Product names carry the category and a three-digit SKU suffix.
        assert!(
            row.product.starts_with(row.category.as_str()),
            "{}: product '{}' does not carry its category",
            row.order_id,
            row.product
        );
        let sku: u64 = row
            .product
            .rsplit("SKU-")
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("{}: product '{}' has no SKU suffix", row.order_id, row.product));
        assert!((schema::SKU_MIN..=schema::SKU_MAX).contains(&sku));
    }
}

#[test]
fn prices_land_on_whole_cents() {
    for row in generate(500, 3, false) {
        let cents = row.price * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-6,
            "{}: price {} is not cent-aligned",
            row.order_id,
            row.price
        );
    }
}

#[test]
fn order_ids_are_unique_and_monotonically_suffixed() {
    let rows = generate(1000, 42, false);

    let ids: HashSet<&str> = rows.iter().map(|r| r.order_id.as_str()).collect();
    assert_eq!(ids.len(), rows.len(), "duplicate order ids in one run");

    // Seasonal shaping off: no candidates dropped, so the suffixes run
    // contiguously from the base.
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.order_id, format!("ORD-{}", ORDER_ID_BASE + i));
    }
}

#[test]
fn unshaped_generation_yields_the_exact_row_count() {
    assert_eq!(generate(1234, 8, false).len(), 1234);
}

#[test]
fn seasonal_shaping_thins_november_and_december() {
    let uniform = generate(4000, 42, false);
    let shaped = generate(4000, 42, true);

    // Rejection sampling only ever drops rows.
    assert!(shaped.len() < uniform.len());

    let holiday_share = |rows: &[OrderRecord]| {
        let holiday = rows
            .iter()
            .filter(|r| matches!(r.date.month(), 11 | 12))
            .count();
        holiday as f64 / rows.len() as f64
    };

    let uniform_share = holiday_share(&uniform);
    let shaped_share = holiday_share(&shaped);
    assert!(
        shaped_share < uniform_share * 0.6,
        "holiday share {shaped_share:.3} not thinned from uniform {uniform_share:.3}"
    );

    // Both runs draw the same candidate dates, and the shaper only ever
    // drops November/December rows, so the rest of the year survives
    // intact.
    let outside = |rows: &[OrderRecord]| {
        rows.iter()
            .filter(|r| !matches!(r.date.month(), 11 | 12))
            .count()
    };
    assert_eq!(outside(&uniform), outside(&shaped));
}
