//! Sidebar filter state and row filtering.

use chrono::NaiveDate;

use crate::record::OrderRecord;
use crate::schema::{self, Category, Region};

/// One interaction's filter state. Rebuilt on every interaction, never
/// persisted.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
}

impl FilterSelection {
    /// The widest selection for a table: its full date span plus every
    /// region and category. An empty table falls back to the generation
    /// window. Callers use this as the non-empty default — an empty
    /// `regions` or `categories` list selects nothing.
    pub fn full_range(rows: &[OrderRecord]) -> Self {
        let date_start = rows
            .iter()
            .map(|r| r.date)
            .min()
            .unwrap_or_else(schema::window_start);
        let date_end = rows
            .iter()
            .map(|r| r.date)
            .max()
            .unwrap_or_else(schema::window_start);
        Self {
            date_start,
            date_end,
            regions: Region::ALL.to_vec(),
            categories: Category::ALL.to_vec(),
        }
    }
}

/// Rows inside the inclusive date interval whose region and category are
/// both selected. No implicit select-all: empty `regions` or
/// `categories` yields an empty table.
pub fn apply_filters(rows: &[OrderRecord], selection: &FilterSelection) -> Vec<OrderRecord> {
    rows.iter()
        .filter(|r| r.date >= selection.date_start && r.date <= selection.date_end)
        .filter(|r| selection.regions.contains(&r.region))
        .filter(|r| selection.categories.contains(&r.category))
        .cloned()
        .collect()
}
