//! Test Helpers

use std::collections::BTreeMap;

use jiff::Timestamp;

use crate::domain::promos::{data::NewPromo, records::PromoRecord};

pub(crate) fn make_promo(code: &str, target: &str) -> PromoRecord {
    PromoRecord {
        code: code.to_string(),
        target: target.to_string(),
        valid_for: 30,
        created: Timestamp::UNIX_EPOCH,
        last_updated: Timestamp::UNIX_EPOCH,
        start_date: Timestamp::UNIX_EPOCH,
        end_date: Timestamp::UNIX_EPOCH,
        extra: BTreeMap::new(),
    }
}

pub(crate) fn new_promo(code: &str) -> NewPromo {
    NewPromo {
        code: Some(code.to_string()),
        ..NewPromo::default()
    }
}
