//! The per-interaction dashboard frame.
//!
//! The hosting UI re-runs the whole pipeline top-to-bottom on every
//! interaction: filter the table, then recompute every view from the
//! filtered rows. This module is the "produces tables, charts consume
//! them" boundary — it knows nothing about widgets or chart types.

use chrono::NaiveDate;
use serde::Serialize;

use crate::aggregate::{
    self, AgeBand, DailyRevenue, OverviewKpis, RegionSummary, RevenueStats,
};
use crate::filter::{apply_filters, FilterSelection};
use crate::record::OrderRecord;
use crate::schema::{Category, Channel, PaymentMethod, Region};
use crate::types::Money;

/// How many products the product view ranks.
pub const TOP_PRODUCT_COUNT: usize = 10;

/// Everything the five analytical views need, computed in one pass over
/// an already-filtered table.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardFrame {
    pub overview: OverviewView,
    pub trends: TrendsView,
    pub customers: CustomerView,
    pub products: ProductView,
    pub regional: RegionalView,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub kpis: OverviewKpis,
    pub revenue_by_category: Vec<(Category, RevenueStats)>,
    pub daily_revenue: Vec<DailyRevenue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendsView {
    pub monthly_revenue: Vec<(NaiveDate, Money)>,
    pub weekday_revenue: Vec<(&'static str, RevenueStats)>,
    pub channel_revenue: Vec<(Channel, RevenueStats)>,
    pub payment_revenue: Vec<(PaymentMethod, RevenueStats)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub age_histogram: Vec<AgeBand>,
    pub rating_by_category: Vec<(Category, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub top_products: Vec<(String, Money)>,
    pub delivery_days: Vec<(u32, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionalView {
    pub region_summary: Vec<RegionSummary>,
    pub region_channel: Vec<((Region, Channel), Money)>,
    pub region_category: Vec<((Region, Category), Money)>,
}

impl DashboardFrame {
    /// Recompute every view from `rows`. The rows are taken as already
    /// filtered; pair with `for_selection` for the full pipeline.
    pub fn compute(rows: &[OrderRecord]) -> Self {
        Self {
            overview: OverviewView {
                kpis: aggregate::overview_kpis(rows),
                revenue_by_category: aggregate::revenue_by_category(rows),
                daily_revenue: aggregate::daily_cumulative_revenue(rows),
            },
            trends: TrendsView {
                monthly_revenue: aggregate::monthly_revenue(rows),
                weekday_revenue: aggregate::revenue_by_weekday(rows)
                    .into_iter()
                    .map(|(day, stats)| (aggregate::weekday_label(day), stats))
                    .collect(),
                channel_revenue: aggregate::revenue_by_channel(rows),
                payment_revenue: aggregate::revenue_by_payment(rows),
            },
            customers: CustomerView {
                age_histogram: aggregate::age_histogram(rows),
                rating_by_category: aggregate::avg_rating_by_category(rows),
            },
            products: ProductView {
                top_products: aggregate::top_products(rows, TOP_PRODUCT_COUNT),
                delivery_days: aggregate::delivery_days_histogram(rows),
            },
            regional: RegionalView {
                region_summary: aggregate::region_summaries(rows),
                region_channel: aggregate::revenue_by_region_channel(rows),
                region_category: aggregate::revenue_by_region_category(rows),
            },
        }
    }

    /// Filter `table` by `selection`, then recompute. An empty selection
    /// produces a frame full of zero-row views, not an error.
    pub fn for_selection(table: &[OrderRecord], selection: &FilterSelection) -> Self {
        let rows = apply_filters(table, selection);
        Self::compute(&rows)
    }
}
