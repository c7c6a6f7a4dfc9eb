//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no formatting.
//! The platform fee is a flat per-day add-on, so everything here is
//! addition and multiplication on `Decimal`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::config::PricingConfig;

use super::services::PricingError;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. Only display code rounds; the arithmetic
/// core never does.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use carshare_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Full price breakdown for a host rate over a number of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// What the host asked for per day
    pub host_daily_rate: Decimal,
    /// What the host receives for the whole trip
    pub host_total: Decimal,
    pub platform_fee_per_day: Decimal,
    pub platform_fee_total: Decimal,
    /// What the renter sees per day
    pub customer_daily_rate: Decimal,
    /// What the renter pays for the whole trip
    pub customer_total: Decimal,
    pub days: i64,
}

/// Per-day price shown to renters: host rate plus the platform fee.
pub fn customer_daily_rate(
    config: &PricingConfig,
    host_daily_rate: Decimal,
) -> Result<Decimal, PricingError> {
    validate_rate(host_daily_rate)?;
    host_daily_rate
        .checked_add(config.platform_fee_per_day)
        .ok_or(PricingError::Overflow)
}

/// Calculate what the renter pays and what the host receives.
///
/// # Arguments
/// * `config` - Pricing configuration (platform fee per day)
/// * `host_daily_rate` - Amount the host wants per day, must not be negative
/// * `days` - Trip length, must be at least 1
///
/// # Returns
/// `PriceQuote` where `customer_total == host_total + platform_fee_total`
pub fn calculate_price(
    config: &PricingConfig,
    host_daily_rate: Decimal,
    days: i64,
) -> Result<PriceQuote, PricingError> {
    validate_rate(host_daily_rate)?;
    if days <= 0 {
        return Err(PricingError::InvalidArgument {
            field: "days",
            message: format!("Day count must be positive, got {}", days),
        });
    }

    let day_count = Decimal::from(days);
    let fee = config.platform_fee_per_day;

    let host_total = host_daily_rate
        .checked_mul(day_count)
        .ok_or(PricingError::Overflow)?;
    let platform_fee_total = fee.checked_mul(day_count).ok_or(PricingError::Overflow)?;
    let customer_total = host_total
        .checked_add(platform_fee_total)
        .ok_or(PricingError::Overflow)?;

    Ok(PriceQuote {
        host_daily_rate,
        host_total,
        platform_fee_per_day: fee,
        platform_fee_total,
        customer_daily_rate: customer_daily_rate(config, host_daily_rate)?,
        customer_total,
        days,
    })
}

fn validate_rate(host_daily_rate: Decimal) -> Result<(), PricingError> {
    if host_daily_rate < Decimal::ZERO {
        return Err(PricingError::InvalidArgument {
            field: "daily_rate",
            message: format!("Daily rate must not be negative, got {}", host_daily_rate),
        });
    }
    Ok(())
}
