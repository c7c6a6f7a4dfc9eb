//! Booking total for a renter's chosen date range.
//!
//! Trip length is the number of calendar days between the two dates.
//! Missing or malformed dates never raise: they produce an all-zero total
//! with the confirm action disabled.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PricingConfig;

use super::calculators::calculate_price;
use super::services::PricingError;

/// Date format used by the booking form's date inputs.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// State of the date range the total was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateInput {
    /// Both dates present and in order
    Complete,
    /// One or both dates not chosen yet
    Incomplete,
    /// Unparseable date, or end before start
    Invalid,
}

/// Totals shown in the booking panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTotal {
    pub days: i64,
    /// Host daily rate times days
    pub subtotal: Decimal,
    pub platform_fee: Decimal,
    pub total: Decimal,
    pub input: DateInput,
    pub can_confirm: bool,
}

impl BookingTotal {
    fn zero(input: DateInput) -> Self {
        Self {
            days: 0,
            subtotal: Decimal::ZERO,
            platform_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            input,
            can_confirm: false,
        }
    }

    /// Whether the chosen range covers a listing's minimum trip length.
    pub fn meets_minimum(&self, min_trip_duration: i64) -> bool {
        self.input == DateInput::Complete && self.days >= min_trip_duration
    }
}

/// Signed number of days from `start` to `end`.
pub fn trip_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Compute the booking total for a daily rate and an optional date range.
///
/// A same-day range is a complete zero-day trip: totals are zero and the
/// confirm action stays enabled, matching the booking panel. Only a negative
/// daily rate is an error.
pub fn calculate_booking_total(
    config: &PricingConfig,
    daily_rate: Decimal,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<BookingTotal, PricingError> {
    if daily_rate < Decimal::ZERO {
        return Err(PricingError::InvalidArgument {
            field: "daily_rate",
            message: format!("Daily rate must not be negative, got {}", daily_rate),
        });
    }

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(BookingTotal::zero(DateInput::Incomplete)),
    };

    let days = trip_days(start, end);
    if days < 0 {
        tracing::debug!("Booking range ends before it starts: {} > {}", start, end);
        return Ok(BookingTotal::zero(DateInput::Invalid));
    }
    if days == 0 {
        return Ok(BookingTotal {
            can_confirm: true,
            ..BookingTotal::zero(DateInput::Complete)
        });
    }

    let quote = calculate_price(config, daily_rate, days)?;

    Ok(BookingTotal {
        days,
        subtotal: quote.host_total,
        platform_fee: quote.platform_fee_total,
        total: quote.customer_total,
        input: DateInput::Complete,
        can_confirm: true,
    })
}

/// Same as [`calculate_booking_total`] for raw form values.
///
/// Empty strings count as not chosen; anything that is not `YYYY-MM-DD`
/// yields an invalid, all-zero total.
pub fn booking_total_from_form(
    config: &PricingConfig,
    daily_rate: Decimal,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<BookingTotal, PricingError> {
    let start = match parse_form_date(start) {
        Ok(date) => date,
        Err(()) => return invalid_or_rate_error(daily_rate),
    };
    let end = match parse_form_date(end) {
        Ok(date) => date,
        Err(()) => return invalid_or_rate_error(daily_rate),
    };
    calculate_booking_total(config, daily_rate, start, end)
}

fn invalid_or_rate_error(daily_rate: Decimal) -> Result<BookingTotal, PricingError> {
    if daily_rate < Decimal::ZERO {
        return Err(PricingError::InvalidArgument {
            field: "daily_rate",
            message: format!("Daily rate must not be negative, got {}", daily_rate),
        });
    }
    Ok(BookingTotal::zero(DateInput::Invalid))
}

fn parse_form_date(value: Option<&str>) -> Result<Option<NaiveDate>, ()> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT)
            .map(Some)
            .map_err(|e| {
                tracing::debug!("Unparseable booking date {:?}: {}", raw, e);
            }),
    }
}
