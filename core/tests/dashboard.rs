//! Dashboard frame recompute: one filtered table in, five views out.

use apexsales_core::{
    config::GenConfig,
    dashboard::{DashboardFrame, TOP_PRODUCT_COUNT},
    filter::FilterSelection,
    generator::Generator,
    record::OrderRecord,
};

const EPS: f64 = 1e-6;

fn table() -> Vec<OrderRecord> {
    let cfg = GenConfig {
        rows: 800,
        seed: 6,
        seasonal: false,
        ..GenConfig::default()
    };
    Generator::new(cfg.seed).generate(&cfg)
}

#[test]
fn frame_views_agree_on_the_total() {
    let rows = table();
    let frame = DashboardFrame::compute(&rows);
    let total = frame.overview.kpis.total_revenue;

    let by_category: f64 = frame
        .overview
        .revenue_by_category
        .iter()
        .map(|(_, s)| s.sum)
        .sum();
    let by_weekday: f64 = frame.trends.weekday_revenue.iter().map(|(_, s)| s.sum).sum();
    let by_region: f64 = frame.regional.region_summary.iter().map(|r| r.revenue).sum();

    assert!((by_category - total).abs() < EPS);
    assert!((by_weekday - total).abs() < EPS);
    assert!((by_region - total).abs() < EPS);
}

#[test]
fn frame_limits_the_product_ranking() {
    let frame = DashboardFrame::compute(&table());
    assert!(frame.products.top_products.len() <= TOP_PRODUCT_COUNT);
}

#[test]
fn empty_selection_yields_a_no_data_frame() {
    let rows = table();
    let selection = FilterSelection {
        regions: vec![],
        ..FilterSelection::full_range(&rows)
    };

    let frame = DashboardFrame::for_selection(&rows, &selection);
    assert_eq!(frame.overview.kpis.total_revenue, 0.0);
    assert!(frame.overview.daily_revenue.is_empty());
    assert!(frame.products.top_products.is_empty());
    assert!(frame.trends.monthly_revenue.is_empty());
    // Dense outputs keep their shape, with zero counts.
    assert_eq!(frame.trends.weekday_revenue.len(), 7);
    assert!(frame.customers.age_histogram.iter().all(|b| b.count == 0));
}

#[test]
fn frame_serializes_to_json() {
    let frame = DashboardFrame::compute(&table());
    let json = serde_json::to_string(&frame).expect("frame serializes");
    assert!(json.contains("total_revenue"));
    assert!(json.contains("Monday"));
}
