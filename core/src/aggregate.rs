//! Pure aggregation functions over order tables.
//!
//! Everything here is recomputed from scratch on every filter change; at
//! this table size there is nothing worth caching. Group orderings are
//! deterministic: enum-keyed groups sort by key, weekday and histogram
//! outputs are dense in their natural order, and product ranking breaks
//! ties by first appearance in the input.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::record::OrderRecord;
use crate::schema::{
    Category, Channel, PaymentMethod, Region, CUSTOMER_AGE_MAX, CUSTOMER_AGE_MIN,
    DELIVERY_DAYS_MAX, DELIVERY_DAYS_MIN,
};
use crate::types::Money;

/// Sum, mean, and count of revenue for one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueStats {
    pub sum: Money,
    pub mean: Money,
    pub count: usize,
}

impl RevenueStats {
    fn from_sum(sum: Money, count: usize) -> Self {
        let mean = if count == 0 { 0.0 } else { sum / count as f64 };
        Self { sum, mean, count }
    }
}

/// One point of the daily revenue stream, with the running total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Money,
    pub cumulative: Money,
}

/// Headline numbers for the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewKpis {
    pub total_revenue: Money,
    pub total_units: u64,
    pub avg_order_value: Money,
    pub avg_rating: f64,
}

/// Revenue and unit volume for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: Region,
    pub revenue: Money,
    pub units: u64,
}

/// A five-year customer age band and how many orders fell into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBand {
    pub start: u32,
    pub end: u32,
    pub count: usize,
}

pub const AGE_BAND_WIDTH: u32 = 5;

// ── Grouped revenue stats ──────────────────────────────────────────

fn revenue_stats_by<K: Ord>(
    rows: &[OrderRecord],
    key: impl Fn(&OrderRecord) -> K,
) -> Vec<(K, RevenueStats)> {
    let mut groups: BTreeMap<K, (Money, usize)> = BTreeMap::new();
    for row in rows {
        let cell = groups.entry(key(row)).or_insert((0.0, 0));
        cell.0 += row.revenue;
        cell.1 += 1;
    }
    groups
        .into_iter()
        .map(|(k, (sum, count))| (k, RevenueStats::from_sum(sum, count)))
        .collect()
}

fn revenue_sum_by<K: Ord>(rows: &[OrderRecord], key: impl Fn(&OrderRecord) -> K) -> Vec<(K, Money)> {
    let mut groups: BTreeMap<K, Money> = BTreeMap::new();
    for row in rows {
        *groups.entry(key(row)).or_insert(0.0) += row.revenue;
    }
    groups.into_iter().collect()
}

pub fn revenue_by_category(rows: &[OrderRecord]) -> Vec<(Category, RevenueStats)> {
    revenue_stats_by(rows, |r| r.category)
}

pub fn revenue_by_channel(rows: &[OrderRecord]) -> Vec<(Channel, RevenueStats)> {
    revenue_stats_by(rows, |r| r.channel)
}

pub fn revenue_by_payment(rows: &[OrderRecord]) -> Vec<(PaymentMethod, RevenueStats)> {
    revenue_stats_by(rows, |r| r.payment_method)
}

pub fn revenue_by_region(rows: &[OrderRecord]) -> Vec<(Region, RevenueStats)> {
    revenue_stats_by(rows, |r| r.region)
}

const WEEKDAY_ORDER: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full weekday name, the form chart axes want.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Revenue stats per weekday, dense Monday → Sunday. Days with no orders
/// still appear, with zero stats.
pub fn revenue_by_weekday(rows: &[OrderRecord]) -> Vec<(Weekday, RevenueStats)> {
    let mut cells = [(0.0, 0usize); 7];
    for row in rows {
        let cell = &mut cells[row.date.weekday().num_days_from_monday() as usize];
        cell.0 += row.revenue;
        cell.1 += 1;
    }
    WEEKDAY_ORDER
        .iter()
        .zip(cells)
        .map(|(day, (sum, count))| (*day, RevenueStats::from_sum(sum, count)))
        .collect()
}

// ── Product ranking ────────────────────────────────────────────────

/// Top `n` products by summed revenue, descending. A revenue tie keeps
/// the product that appeared first in the input ahead.
pub fn top_products(rows: &[OrderRecord], n: usize) -> Vec<(String, Money)> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Money> = HashMap::new();
    for row in rows {
        if !sums.contains_key(&row.product) {
            first_seen.push(row.product.clone());
        }
        *sums.entry(row.product.clone()).or_insert(0.0) += row.revenue;
    }

    let mut ranked: Vec<(String, Money)> = first_seen
        .into_iter()
        .map(|product| {
            let sum = sums[&product];
            (product, sum)
        })
        .collect();
    // Stable sort: revenue ties keep first-seen order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

// ── Time series ────────────────────────────────────────────────────

/// Per-day revenue, date ascending, with a running total.
pub fn daily_cumulative_revenue(rows: &[OrderRecord]) -> Vec<DailyRevenue> {
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for row in rows {
        *days.entry(row.date).or_insert(0.0) += row.revenue;
    }

    let mut cumulative = 0.0;
    days.into_iter()
        .map(|(date, revenue)| {
            cumulative += revenue;
            DailyRevenue {
                date,
                revenue,
                cumulative,
            }
        })
        .collect()
}

/// Revenue summed into calendar-month buckets, keyed by the first of
/// each month, ascending. Only months present in the input appear.
pub fn monthly_revenue(rows: &[OrderRecord]) -> Vec<(NaiveDate, Money)> {
    revenue_sum_by(rows, |r| {
        r.date.with_day(1).expect("day 1 exists in every month")
    })
}

// ── Two-key groupings ──────────────────────────────────────────────

pub fn revenue_by_region_channel(rows: &[OrderRecord]) -> Vec<((Region, Channel), Money)> {
    revenue_sum_by(rows, |r| (r.region, r.channel))
}

pub fn revenue_by_region_category(rows: &[OrderRecord]) -> Vec<((Region, Category), Money)> {
    revenue_sum_by(rows, |r| (r.region, r.category))
}

/// Revenue and unit totals per region, key order.
pub fn region_summaries(rows: &[OrderRecord]) -> Vec<RegionSummary> {
    let mut groups: BTreeMap<Region, (Money, u64)> = BTreeMap::new();
    for row in rows {
        let cell = groups.entry(row.region).or_insert((0.0, 0));
        cell.0 += row.revenue;
        cell.1 += row.quantity as u64;
    }
    groups
        .into_iter()
        .map(|(region, (revenue, units))| RegionSummary {
            region,
            revenue,
            units,
        })
        .collect()
}

// ── Headline and distribution aggregates ───────────────────────────

pub fn overview_kpis(rows: &[OrderRecord]) -> OverviewKpis {
    if rows.is_empty() {
        return OverviewKpis {
            total_revenue: 0.0,
            total_units: 0,
            avg_order_value: 0.0,
            avg_rating: 0.0,
        };
    }

    let total_revenue: Money = rows.iter().map(|r| r.revenue).sum();
    let total_units: u64 = rows.iter().map(|r| r.quantity as u64).sum();
    let rating_sum: u64 = rows.iter().map(|r| r.rating as u64).sum();
    OverviewKpis {
        total_revenue,
        total_units,
        avg_order_value: total_revenue / rows.len() as f64,
        avg_rating: rating_sum as f64 / rows.len() as f64,
    }
}

/// Mean rating per category, key order.
pub fn avg_rating_by_category(rows: &[OrderRecord]) -> Vec<(Category, f64)> {
    let mut groups: BTreeMap<Category, (u64, usize)> = BTreeMap::new();
    for row in rows {
        let cell = groups.entry(row.category).or_insert((0, 0));
        cell.0 += row.rating as u64;
        cell.1 += 1;
    }
    groups
        .into_iter()
        .map(|(category, (sum, count))| (category, sum as f64 / count as f64))
        .collect()
}

/// Customer ages counted into dense five-year bands spanning the
/// declared age range. Out-of-range ages clamp into the edge bands.
pub fn age_histogram(rows: &[OrderRecord]) -> Vec<AgeBand> {
    let band_count = (CUSTOMER_AGE_MAX - CUSTOMER_AGE_MIN) / AGE_BAND_WIDTH + 1;
    let mut bands: Vec<AgeBand> = (0..band_count)
        .map(|i| {
            let start = CUSTOMER_AGE_MIN + i * AGE_BAND_WIDTH;
            AgeBand {
                start,
                end: (start + AGE_BAND_WIDTH - 1).min(CUSTOMER_AGE_MAX),
                count: 0,
            }
        })
        .collect();

    for row in rows {
        let age = row.customer_age.clamp(CUSTOMER_AGE_MIN, CUSTOMER_AGE_MAX);
        bands[((age - CUSTOMER_AGE_MIN) / AGE_BAND_WIDTH) as usize].count += 1;
    }
    bands
}

/// Order counts per delivery duration, dense over the declared range.
pub fn delivery_days_histogram(rows: &[OrderRecord]) -> Vec<(u32, usize)> {
    let mut counts = vec![0usize; (DELIVERY_DAYS_MAX - DELIVERY_DAYS_MIN + 1) as usize];
    for row in rows {
        let days = row.delivery_days.clamp(DELIVERY_DAYS_MIN, DELIVERY_DAYS_MAX);
        counts[(days - DELIVERY_DAYS_MIN) as usize] += 1;
    }
    (DELIVERY_DAYS_MIN..=DELIVERY_DAYS_MAX).zip(counts).collect()
}
