//! Promos Data

use std::collections::BTreeMap;

use jiff::{Span, Timestamp};
use serde_json::Value;

use crate::domain::promos::{
    errors::PromosServiceError,
    records::{DEFAULT_TARGET, DEFAULT_VALID_FOR_DAYS, PromoRecord, is_reserved_field},
};

/// New Promo Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPromo {
    pub code: Option<String>,
    pub target: Option<String>,
    pub valid_for: Option<i64>,
    pub extra: BTreeMap<String, Value>,
}

impl NewPromo {
    /// Apply defaults and stamp the creation dates at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error when `code` is absent or empty, or when `validFor`
    /// pushes the end date outside the representable range.
    pub fn into_record(self, now: Timestamp) -> Result<PromoRecord, PromosServiceError> {
        let code = self
            .code
            .filter(|code| !code.is_empty())
            .ok_or(PromosServiceError::MissingRequiredData("code"))?;

        let valid_for = self.valid_for.unwrap_or(DEFAULT_VALID_FOR_DAYS);
        let end_date = end_date(now, valid_for)?;

        let mut extra = self.extra;

        extra.retain(|field, _| !is_reserved_field(field));

        Ok(PromoRecord {
            code,
            target: self.target.unwrap_or_else(|| DEFAULT_TARGET.to_string()),
            valid_for,
            created: now,
            last_updated: now,
            start_date: now,
            end_date,
            extra,
        })
    }
}

fn end_date(start_date: Timestamp, valid_for: i64) -> Result<Timestamp, PromosServiceError> {
    let out_of_range =
        || PromosServiceError::InvalidData(format!("validFor of {valid_for} days is out of range"));

    let hours = valid_for.checked_mul(24).ok_or_else(out_of_range)?;
    let span = Span::new().try_hours(hours).map_err(|_range| out_of_range())?;

    start_date
        .checked_add(span)
        .map_err(|_range| out_of_range())
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_second(1_767_225_600).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    #[test]
    fn defaults_target_and_valid_for() -> TestResult {
        let record = NewPromo {
            code: Some("A1".into()),
            ..NewPromo::default()
        }
        .into_record(now())?;

        assert_eq!(record.target, DEFAULT_TARGET);
        assert_eq!(record.valid_for, 30);
        assert_eq!(record.created, now());
        assert_eq!(record.last_updated, now());
        assert_eq!(record.start_date, now());
        assert_eq!(
            record.end_date.duration_since(record.start_date),
            SignedDuration::from_hours(30 * 24)
        );

        Ok(())
    }

    #[test]
    fn keeps_explicit_target_and_valid_for() -> TestResult {
        let record = NewPromo {
            code: Some("A1".into()),
            target: Some("STUDENTS".into()),
            valid_for: Some(7),
            extra: BTreeMap::new(),
        }
        .into_record(now())?;

        assert_eq!(record.target, "STUDENTS");
        assert_eq!(record.valid_for, 7);
        assert_eq!(
            record.end_date.duration_since(record.start_date),
            SignedDuration::from_hours(7 * 24)
        );

        Ok(())
    }

    #[test]
    fn zero_valid_for_ends_immediately() -> TestResult {
        let record = NewPromo {
            code: Some("A1".into()),
            valid_for: Some(0),
            ..NewPromo::default()
        }
        .into_record(now())?;

        assert_eq!(record.end_date, record.start_date);

        Ok(())
    }

    #[test]
    fn missing_code_is_rejected() {
        let result = NewPromo::default().into_record(now());

        assert!(
            matches!(result, Err(PromosServiceError::MissingRequiredData("code"))),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[test]
    fn empty_code_is_rejected() {
        let result = NewPromo {
            code: Some(String::new()),
            ..NewPromo::default()
        }
        .into_record(now());

        assert!(matches!(
            result,
            Err(PromosServiceError::MissingRequiredData("code"))
        ));
    }

    #[test]
    fn huge_valid_for_is_invalid_data() {
        let result = NewPromo {
            code: Some("A1".into()),
            valid_for: Some(i64::MAX),
            ..NewPromo::default()
        }
        .into_record(now());

        assert!(
            matches!(result, Err(PromosServiceError::InvalidData(_))),
            "expected InvalidData, got {result:?}"
        );
    }

    #[test]
    fn extra_fields_are_kept_and_reserved_ones_dropped() -> TestResult {
        let mut extra = BTreeMap::new();

        extra.insert("discount".to_string(), json!(15));
        extra.insert("tags".to_string(), json!(["spring", "online"]));
        extra.insert("endDate".to_string(), json!("1999-01-01T00:00:00Z"));
        extra.insert("created".to_string(), json!("1999-01-01T00:00:00Z"));

        let record = NewPromo {
            code: Some("A1".into()),
            extra,
            ..NewPromo::default()
        }
        .into_record(now())?;

        assert_eq!(record.extra.len(), 2, "only caller fields should remain");
        assert_eq!(record.extra.get("discount"), Some(&json!(15)));
        assert_eq!(record.extra.get("tags"), Some(&json!(["spring", "online"])));
        assert_ne!(record.end_date, "1999-01-01T00:00:00Z".parse::<Timestamp>()?);

        Ok(())
    }
}
