//! Pricing service functions behind the HTTP endpoints.
//!
//! Each function takes a request DTO, runs the pure calculators and shapes
//! the result into a response DTO. All amounts stay `Decimal` until the
//! response layer serializes them as strings.

use chrono::{NaiveDate, Utc};

use crate::config::PricingConfig;

use super::booking::booking_total_from_form;
use super::calculators::calculate_price;
use super::earnings::summarize_earnings;
use super::format::{format_amount, format_customer_price, format_total, get_price_breakdown};
use super::requests::{
    BookingTotalRequest, CustomerPriceQuery, EarningsSummaryRequest, PriceBreakdownRequest,
    PriceQuoteRequest,
};
use super::responses::{
    BookingTotalResponse, CustomerPriceResponse, EarningsSummaryResponse, LineItemResponse,
    MoneyResponse, PriceBreakdownResponse, PriceQuoteResponse,
};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid {field}: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    #[error("Amount out of range")]
    Overflow,
}

impl PricingError {
    /// Stable identifier for error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidArgument { .. } => "invalid_argument",
            PricingError::Overflow => "overflow",
        }
    }
}

/// Full quote for a host rate and trip length (default one day).
pub fn quote(
    config: &PricingConfig,
    request: &PriceQuoteRequest,
) -> Result<PriceQuoteResponse, PricingError> {
    let days = request.days.unwrap_or(1);
    let quote = calculate_price(config, request.daily_rate, days)?;

    tracing::debug!(
        "Quoted {} x {} days: customer total {}",
        quote.host_daily_rate,
        quote.days,
        quote.customer_total
    );

    Ok(PriceQuoteResponse {
        host_daily_rate: MoneyResponse::new(config, quote.host_daily_rate),
        host_total: MoneyResponse::new(config, quote.host_total),
        platform_fee_per_day: MoneyResponse::new(config, quote.platform_fee_per_day),
        platform_fee_total: MoneyResponse::new(config, quote.platform_fee_total),
        customer_daily_rate: MoneyResponse::new(config, quote.customer_daily_rate),
        customer_total: MoneyResponse::new(config, quote.customer_total),
        days: quote.days,
    })
}

/// "Starting from" per-day price for a listing card.
pub fn customer_price(
    config: &PricingConfig,
    query: &CustomerPriceQuery,
) -> Result<CustomerPriceResponse, PricingError> {
    Ok(CustomerPriceResponse {
        host_daily_rate: query.daily_rate,
        display: format_customer_price(config, query.daily_rate)?,
    })
}

/// Display breakdown, defaulting to the configured day count.
pub fn breakdown(
    config: &PricingConfig,
    request: &PriceBreakdownRequest,
) -> Result<PriceBreakdownResponse, PricingError> {
    let days = request.days.unwrap_or(config.default_breakdown_days);
    let breakdown = get_price_breakdown(config, request.daily_rate, days)?;

    Ok(PriceBreakdownResponse {
        display: breakdown.display,
        subtitle: breakdown.subtitle,
        total: breakdown.total,
        breakdown: breakdown
            .breakdown
            .into_iter()
            .map(|item| LineItemResponse {
                display: format_amount(config, item.amount),
                label: item.label,
                amount: item.amount,
            })
            .collect(),
    })
}

/// Booking panel totals for a listing and the renter's chosen dates.
pub fn booking_total(
    config: &PricingConfig,
    request: &BookingTotalRequest,
) -> Result<BookingTotalResponse, PricingError> {
    let listing = &request.listing;
    let total = booking_total_from_form(
        config,
        listing.daily_rate,
        request.start_date.as_deref(),
        request.end_date.as_deref(),
    )?;

    tracing::debug!(
        "Booking total for listing {}: {} days, total {} ({:?})",
        listing.id,
        total.days,
        total.total,
        total.input
    );

    Ok(BookingTotalResponse {
        days: total.days,
        subtotal: money_total(config, total.subtotal),
        platform_fee: money_total(config, total.platform_fee),
        total: money_total(config, total.total),
        input: total.input,
        can_confirm: total.can_confirm,
        meets_min_trip: total.meets_minimum(listing.min_trip_duration),
        min_trip_duration: listing.min_trip_duration,
        listing_bookable: listing.is_bookable(),
    })
}

/// Revenue figures for the dashboards, as of `today` or the current UTC date.
pub fn earnings_summary(
    config: &PricingConfig,
    request: &EarningsSummaryRequest,
) -> Result<EarningsSummaryResponse, PricingError> {
    let today: NaiveDate = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let summary = summarize_earnings(&request.bookings, today)?;

    Ok(EarningsSummaryResponse {
        total_revenue: MoneyResponse::new(config, summary.total_revenue),
        average_per_booking: MoneyResponse::new(config, summary.average_per_booking),
        booking_count: summary.booking_count,
        pending_bookings: summary.pending_bookings,
        upcoming_bookings: summary.upcoming_bookings,
    })
}

fn money_total(config: &PricingConfig, amount: rust_decimal::Decimal) -> MoneyResponse {
    MoneyResponse {
        amount,
        currency: config.currency_symbol.clone(),
        display: format_total(config, amount),
    }
}
