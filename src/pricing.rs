//! Booking price computation.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared state.
//! Callers fetch the [`Room`] first and hand it in together with the request.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{BookingRequest, Room, RoomCategory, RoomRates};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    #[error("No nightly rate available for room {room_id} (requested category: {category:?})")]
    RateUnavailable {
        room_id: String,
        category: Option<RoomCategory>,
    },
}

/// Anything that can be reduced to a calendar date. Time-of-day is dropped.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl CalendarDate for DateTime<Utc> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Derived price of a stay. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    nights: u32,
    nightly_rate: f64,
    total_price: f64,
}

impl PricingResult {
    fn new(nights: u32, nightly_rate: f64) -> Self {
        Self {
            nights,
            nightly_rate,
            total_price: nightly_rate * f64::from(nights),
        }
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn nightly_rate(&self) -> f64 {
        self.nightly_rate
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// Number of nights between two dates, both normalized to midnight.
///
/// # Errors
/// [`PricingError::InvalidDateRange`] when `check_out` is not strictly after
/// `check_in`. Same-day stays are rejected rather than billed as zero nights.
pub fn compute_nights<D: CalendarDate>(check_in: D, check_out: D) -> Result<u32, PricingError> {
    let check_in = check_in.calendar_date();
    let check_out = check_out.calendar_date();

    if check_out <= check_in {
        return Err(PricingError::InvalidDateRange { check_in, check_out });
    }

    // Both ends sit on midnight, so the day difference is already the ceiling.
    u32::try_from((check_out - check_in).num_days())
        .map_err(|_| PricingError::InvalidDateRange { check_in, check_out })
}

/// Picks the nightly price for a stay.
///
/// A flat-priced room ignores the requested category. A per-category room
/// needs a category whose price is set. Either way the price must be finite
/// and positive; there is no fallback.
pub fn resolve_nightly_rate(
    room: &Room,
    requested_category: Option<RoomCategory>,
) -> Result<f64, PricingError> {
    let price = match &room.rates {
        RoomRates::Flat(price) => Some(*price),
        RoomRates::ByCategory(prices) => {
            requested_category.and_then(|category| prices.get(&category).copied())
        }
    };
    price
        .filter(|price| RoomRates::is_valid_rate(*price))
        .ok_or_else(|| PricingError::RateUnavailable {
            room_id: room.id.clone(),
            category: requested_category,
        })
}

/// Prices a booking request against an already resolved room.
pub fn price_booking(room: &Room, request: &BookingRequest) -> Result<PricingResult, PricingError> {
    let nights = compute_nights(request.check_in, request.check_out)?;
    let nightly_rate = resolve_nightly_rate(room, request.room_category)?;
    Ok(PricingResult::new(nights, nightly_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(room_id: &str, check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
        BookingRequest::new(
            "Juan dela Cruz",
            "juan@example.com",
            "09171234567",
            room_id,
            check_in,
            check_out,
        )
    }

    fn flat_room(price: f64) -> Room {
        Room::new("Deluxe", RoomRates::flat(price)).with_id("room_1")
    }

    fn split_room() -> Room {
        Room::new(
            "Twin",
            RoomRates::by_category([(RoomCategory::Single, 1800.0), (RoomCategory::Double, 2500.0)]),
        )
        .with_id("room_2")
    }

    #[test]
    fn test_flat_rate_three_nights() {
        let room = flat_room(2500.0);
        let req = request("room_1", date(2024, 6, 1), date(2024, 6, 4));

        let priced = price_booking(&room, &req).unwrap();
        assert_eq!(priced.nights(), 3);
        assert_eq!(priced.nightly_rate(), 2500.0);
        assert_eq!(priced.total_price(), 7500.0);
    }

    #[test]
    fn test_category_rate_two_nights() {
        let room = split_room();
        let req = request("room_2", date(2024, 6, 1), date(2024, 6, 3))
            .with_category(RoomCategory::Double);

        let priced = price_booking(&room, &req).unwrap();
        assert_eq!(priced.nights(), 2);
        assert_eq!(priced.nightly_rate(), 2500.0);
        assert_eq!(priced.total_price(), 5000.0);
    }

    #[test]
    fn test_missing_category_price_is_unavailable() {
        let room = Room::new("Solo", RoomRates::by_category([(RoomCategory::Single, 1800.0)]))
            .with_id("room_3");

        let err = resolve_nightly_rate(&room, Some(RoomCategory::Double)).unwrap_err();
        assert_eq!(
            err,
            PricingError::RateUnavailable {
                room_id: "room_3".to_string(),
                category: Some(RoomCategory::Double),
            }
        );
    }

    #[test]
    fn test_zero_category_price_is_unavailable() {
        let room = Room::new(
            "Promo",
            RoomRates::by_category([(RoomCategory::Single, 0.0), (RoomCategory::Double, 2000.0)]),
        );
        assert!(matches!(
            resolve_nightly_rate(&room, Some(RoomCategory::Single)),
            Err(PricingError::RateUnavailable { .. })
        ));
    }

    #[test]
    fn test_unusable_flat_price_is_unavailable() {
        let req = request("room_1", date(2024, 6, 1), date(2024, 6, 4));
        for price in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let room = flat_room(price);
            assert_eq!(
                price_booking(&room, &req),
                Err(PricingError::RateUnavailable {
                    room_id: "room_1".to_string(),
                    category: None,
                }),
                "flat price {price}"
            );
        }
    }

    #[test]
    fn test_category_room_without_requested_category() {
        let err = resolve_nightly_rate(&split_room(), None).unwrap_err();
        assert!(matches!(err, PricingError::RateUnavailable { category: None, .. }));
    }

    #[test]
    fn test_same_day_is_invalid() {
        let day = date(2024, 6, 1);
        assert_eq!(
            compute_nights(day, day),
            Err(PricingError::InvalidDateRange {
                check_in: day,
                check_out: day
            })
        );
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let check_in = date(2024, 6, 1).and_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap());
        let check_out = date(2024, 6, 2).and_time(NaiveTime::from_hms_opt(0, 15, 0).unwrap());
        assert_eq!(compute_nights(check_in, check_out), Ok(1));

        let same_day_out = date(2024, 6, 1).and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        let same_day_in = date(2024, 6, 1).and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert!(compute_nights(same_day_in, same_day_out).is_err());

        let utc_in = check_in.and_utc();
        let utc_out = (check_in + Duration::days(5)).and_utc();
        assert_eq!(compute_nights(utc_in, utc_out), Ok(5));
    }

    #[test]
    fn test_date_error_wins_over_rate_error() {
        let room = Room::new("Solo", RoomRates::by_category([(RoomCategory::Single, 1800.0)]));
        let day = date(2024, 6, 1);
        let req = request("room_3", day, day).with_category(RoomCategory::Double);

        assert!(matches!(
            price_booking(&room, &req),
            Err(PricingError::InvalidDateRange { .. })
        ));
    }

    fn any_category() -> impl Strategy<Value = Option<RoomCategory>> {
        prop_oneof![
            Just(None),
            Just(Some(RoomCategory::Single)),
            Just(Some(RoomCategory::Double)),
        ]
    }

    proptest! {
        #[test]
        fn prop_flat_rate_ignores_category(price in 1.0f64..100_000.0, category in any_category()) {
            let room = flat_room(price);
            prop_assert_eq!(resolve_nightly_rate(&room, category), Ok(price));
        }

        #[test]
        fn prop_non_positive_ranges_are_rejected(start in 0i64..20_000, back in 0i64..400) {
            let check_out = date(2000, 1, 1) + Duration::days(start);
            let check_in = check_out + Duration::days(back);
            let rejected = matches!(
                compute_nights(check_in, check_out),
                Err(PricingError::InvalidDateRange { .. })
            );
            prop_assert!(rejected);
        }

        #[test]
        fn prop_total_is_rate_times_nights(
            price in 1.0f64..50_000.0,
            start in 0i64..20_000,
            stay in 1i64..60,
            category in any_category(),
        ) {
            let room = flat_room(price);
            let check_in = date(2000, 1, 1) + Duration::days(start);
            let mut req = request("room_1", check_in, check_in + Duration::days(stay));
            req.room_category = category;

            let first = price_booking(&room, &req).unwrap();
            let second = price_booking(&room, &req).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(i64::from(first.nights()), stay);
            prop_assert_eq!(first.total_price(), first.nightly_rate() * f64::from(first.nights()));
        }
    }
}
