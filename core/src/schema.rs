//! The fixed dataset schema: closed categorical sets, required columns,
//! the sales date window, and per-field numeric ranges.
//!
//! RULE: this module is the single source of truth for the table shape.
//! The generator samples from these sets, the store validates the on-disk
//! header against `REQUIRED_COLUMNS`, and the aggregation layer groups by
//! the enums. A value outside these sets cannot be constructed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Required CSV columns, in on-disk order.
/// A persisted file whose header is missing any entry is stale and gets
/// regenerated on load.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "order_id",
    "date",
    "category",
    "product",
    "price",
    "quantity",
    "revenue",
    "region",
    "channel",
    "payment_method",
    "customer_age",
    "rating",
    "delivery_days",
];

/// First day of the one-year sales window.
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("window start is a valid date")
}

/// Length of the sales window in days.
pub const WINDOW_DAYS: u64 = 365;

// ── Numeric field ranges (all inclusive) ───────────────────────────

pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 5;

pub const CUSTOMER_AGE_MIN: u32 = 18;
pub const CUSTOMER_AGE_MAX: u32 = 72;

pub const RATING_MIN: u32 = 1;
pub const RATING_MAX: u32 = 5;

pub const DELIVERY_DAYS_MIN: u32 = 1;
pub const DELIVERY_DAYS_MAX: u32 = 8;

pub const SKU_MIN: u64 = 100;
pub const SKU_MAX: u64 = 999;

// ── Categorical sets ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Home & Kitchen")]
    HomeKitchen,
    Fashion,
    Beauty,
    Sports,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::HomeKitchen,
        Category::Fashion,
        Category::Beauty,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::HomeKitchen => "Home & Kitchen",
            Self::Fashion => "Fashion",
            Self::Beauty => "Beauty",
            Self::Sports => "Sports",
        }
    }

    /// Unit price band for the category, in dollars. Electronics carries
    /// a premium band; everything else shares the base band.
    pub fn price_band(&self) -> (Money, Money) {
        match self {
            Self::Electronics => (200.0, 1200.0),
            _ => (20.0, 400.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Central => "Central",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    Direct,
    #[serde(rename = "Social Media")]
    SocialMedia,
    Email,
    Affiliate,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Direct,
        Channel::SocialMedia,
        Channel::Email,
        Channel::Affiliate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::SocialMedia => "Social Media",
            Self::Email => "Email",
            Self::Affiliate => "Affiliate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    PayPal,
    Crypto,
    #[serde(rename = "Debit Card")]
    DebitCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::Crypto,
        PaymentMethod::DebitCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
            Self::Crypto => "Crypto",
            Self::DebitCard => "Debit Card",
        }
    }
}
