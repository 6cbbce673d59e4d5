//! Promo Models

use std::collections::BTreeMap;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use promos_app::domain::promos::{data::NewPromo, records::PromoRecord};

/// Create Promo Request
///
/// Fields other than the known ones are stored as given.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePromoRequest {
    /// Unique promo code
    pub code: Option<String>,

    /// Audience the promo applies to, `EVERYBODY` when omitted
    pub target: Option<String>,

    /// Validity window in days, 30 when omitted
    pub valid_for: Option<i64>,

    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub extra: BTreeMap<String, Value>,
}

impl From<CreatePromoRequest> for NewPromo {
    fn from(request: CreatePromoRequest) -> Self {
        NewPromo {
            code: request.code,
            target: request.target,
            valid_for: request.valid_for,
            extra: request.extra,
        }
    }
}

/// Promo Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromoResponse {
    pub code: String,
    pub target: String,
    pub valid_for: i64,
    pub created: String,
    pub last_updated: String,
    pub start_date: String,
    pub end_date: String,

    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub extra: BTreeMap<String, Value>,
}

impl From<PromoRecord> for PromoResponse {
    fn from(record: PromoRecord) -> Self {
        Self {
            code: record.code,
            target: record.target,
            valid_for: record.valid_for,
            created: record.created.to_string(),
            last_updated: record.last_updated.to_string(),
            start_date: record.start_date.to_string(),
            end_date: record.end_date.to_string(),
            extra: record.extra,
        }
    }
}
