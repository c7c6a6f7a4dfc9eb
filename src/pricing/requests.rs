//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{Booking, Listing};

/// Request to quote a host rate over a trip length
#[derive(Debug, Deserialize)]
pub struct PriceQuoteRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(default)]
    pub days: Option<i64>,
}

/// Query for the per-day customer price
#[derive(Debug, Deserialize)]
pub struct CustomerPriceQuery {
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
}

/// Request for a display breakdown
#[derive(Debug, Deserialize)]
pub struct PriceBreakdownRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(default)]
    pub days: Option<i64>,
}

/// Request for booking panel totals.
///
/// Dates are the raw `YYYY-MM-DD` values of the form inputs; empty or
/// missing means not chosen yet.
#[derive(Debug, Deserialize)]
pub struct BookingTotalRequest {
    pub listing: Listing,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request for dashboard revenue figures
#[derive(Debug, Deserialize)]
pub struct EarningsSummaryRequest {
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
