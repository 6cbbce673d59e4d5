//! Promo Records

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde_json::Value;

/// Audience assigned to promos created without a target.
pub const DEFAULT_TARGET: &str = "EVERYBODY";

/// Validity window in days for promos created without `validFor`.
pub const DEFAULT_VALID_FOR_DAYS: i64 = 30;

/// Field names owned by the server; callers cannot smuggle these in as extra fields.
pub const RESERVED_FIELDS: [&str; 7] = [
    "code",
    "target",
    "validFor",
    "created",
    "lastUpdated",
    "startDate",
    "endDate",
];

/// Promo Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromoRecord {
    /// Unique promo code, the primary key.
    pub code: String,

    /// Audience the promo is aimed at.
    pub target: String,

    /// Number of days the promo stays valid.
    pub valid_for: i64,

    pub created: Timestamp,
    pub last_updated: Timestamp,
    pub start_date: Timestamp,

    /// `start_date` plus `valid_for` days, fixed at creation.
    pub end_date: Timestamp,

    /// Caller supplied fields stored verbatim.
    pub extra: BTreeMap<String, Value>,
}

impl PromoRecord {
    /// Whether the promo's code or target equals `value`.
    #[must_use]
    pub fn matches_code_or_target(&self, value: &str) -> bool {
        self.code == value || self.target == value
    }
}

/// Whether `field` is one of the server managed promo fields.
#[must_use]
pub fn is_reserved_field(field: &str) -> bool {
    RESERVED_FIELDS.contains(&field)
}
