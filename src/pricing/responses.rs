//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PricingConfig;

use super::booking::DateInput;
use super::format::format_amount;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub display: String,
}

impl MoneyResponse {
    /// Amount with its plain display string (`₪362`)
    pub fn new(config: &PricingConfig, amount: Decimal) -> Self {
        Self {
            amount,
            currency: config.currency_symbol.clone(),
            display: format_amount(config, amount),
        }
    }
}

/// Response for a price quote
#[derive(Debug, Serialize)]
pub struct PriceQuoteResponse {
    pub host_daily_rate: MoneyResponse,
    pub host_total: MoneyResponse,
    pub platform_fee_per_day: MoneyResponse,
    pub platform_fee_total: MoneyResponse,
    pub customer_daily_rate: MoneyResponse,
    pub customer_total: MoneyResponse,
    pub days: i64,
}

/// Response for the per-day customer price
#[derive(Debug, Serialize)]
pub struct CustomerPriceResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub host_daily_rate: Decimal,
    pub display: String,
}

/// One labelled amount in a breakdown
#[derive(Debug, Serialize)]
pub struct LineItemResponse {
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub display: String,
}

/// Response for a display breakdown
#[derive(Debug, Serialize)]
pub struct PriceBreakdownResponse {
    pub display: String,
    pub subtitle: String,
    pub total: String,
    pub breakdown: Vec<LineItemResponse>,
}

/// Response for booking panel totals
#[derive(Debug, Serialize)]
pub struct BookingTotalResponse {
    pub days: i64,
    pub subtotal: MoneyResponse,
    pub platform_fee: MoneyResponse,
    pub total: MoneyResponse,
    pub input: DateInput,
    pub can_confirm: bool,
    pub meets_min_trip: bool,
    pub min_trip_duration: i64,
    pub listing_bookable: bool,
}

/// Response for dashboard revenue figures
#[derive(Debug, Serialize)]
pub struct EarningsSummaryResponse {
    pub total_revenue: MoneyResponse,
    pub average_per_booking: MoneyResponse,
    pub booking_count: usize,
    pub pending_bookings: usize,
    pub upcoming_bookings: usize,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
