//! Validity window of a price rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use priceboard_core::{DomainError, DomainResult, ValueObject};

/// Closed interval `[start, end]` of UTC timestamps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Build a range. Equal endpoints are allowed (an instantaneous window);
    /// a start strictly after the end is rejected.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::validation(
                "start date must be before or equal to end date",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Inclusive on both ends: a rule valid "until 18:30" still applies to a
    /// request stamped exactly 18:30:00.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl core::fmt::Display for DateRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

impl ValueObject for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn start_after_end_is_rejected() {
        let err = DateRange::new(at(2020, 6, 15, 0, 0), at(2020, 6, 14, 0, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn equal_endpoints_are_allowed() {
        let t = at(2020, 6, 14, 18, 30);
        let range = DateRange::new(t, t).unwrap();
        assert!(range.contains(t));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let start = at(2020, 6, 14, 15, 0);
        let end = at(2020, 6, 14, 18, 30);
        let range = DateRange::new(start, end).unwrap();

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(range.contains(at(2020, 6, 14, 16, 0)));

        assert!(!range.contains(start - Duration::seconds(1)));
        assert!(!range.contains(end + Duration::seconds(1)));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the interval is closed — both endpoints are inside,
            /// anything strictly outside is not.
            #[test]
            fn closed_interval_boundaries(
                start_secs in 0i64..2_000_000_000,
                len_secs in 0i64..10_000_000,
                epsilon_secs in 1i64..1_000_000
            ) {
                let start = Utc.timestamp_opt(start_secs, 0).unwrap();
                let end = start + Duration::seconds(len_secs);
                let range = DateRange::new(start, end).unwrap();

                prop_assert!(range.contains(start));
                prop_assert!(range.contains(end));
                prop_assert!(!range.contains(start - Duration::seconds(epsilon_secs)));
                prop_assert!(!range.contains(end + Duration::seconds(epsilon_secs)));
            }

            /// Property: construction succeeds iff start <= end.
            #[test]
            fn construction_requires_ordered_endpoints(
                a_secs in 0i64..2_000_000_000,
                b_secs in 0i64..2_000_000_000
            ) {
                let a = Utc.timestamp_opt(a_secs, 0).unwrap();
                let b = Utc.timestamp_opt(b_secs, 0).unwrap();
                prop_assert_eq!(DateRange::new(a, b).is_ok(), a <= b);
            }
        }
    }
}
