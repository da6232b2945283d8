use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use priceboard_core::{DomainError, DomainResult};
use priceboard_pricing::Price;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub product_id: u64,
    pub brand_id: u32,
    pub application_date: String,
}

/// Parse the query timestamp: RFC 3339, or a zone-less `YYYY-MM-DDTHH:MM:SS`
/// interpreted as UTC.
pub fn parse_application_date(raw: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    Err(DomainError::validation(format!(
        "application_date is not a valid timestamp: {raw:?}"
    )))
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub product_id: u64,
    pub brand_id: u32,
    pub price_list: u32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: Decimal,
    pub currency: String,
}

pub fn price_to_response(price: &Price) -> PriceResponse {
    PriceResponse {
        product_id: price.product_id().value(),
        brand_id: price.brand_id().value(),
        price_list: price.price_list().value(),
        start_date: price.date_range().start(),
        end_date: price.date_range().end(),
        price: price.amount().amount(),
        currency: price.amount().currency().code().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rfc3339_dates_parse() {
        let parsed = parse_application_date("2020-06-14T16:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 6, 14, 16, 0, 0).unwrap());

        let parsed = parse_application_date("2020-06-14T18:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 6, 14, 16, 0, 0).unwrap());
    }

    #[test]
    fn naive_dates_are_interpreted_as_utc() {
        let parsed = parse_application_date("2020-06-14T16:00:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 6, 14, 16, 0, 0).unwrap());
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(parse_application_date("").is_err());
        assert!(parse_application_date("2020-06-14").is_err());
        assert!(parse_application_date("14/06/2020 16:00").is_err());
    }
}
