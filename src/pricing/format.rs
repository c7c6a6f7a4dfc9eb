//! Display formatting for prices.
//!
//! Keeps the currency glyph and the product copy out of the arithmetic in
//! `calculators`.

use rust_decimal::Decimal;

use crate::config::PricingConfig;

use super::calculators::{calculate_price, round_money};
use super::services::PricingError;

/// Label for the host's share in a breakdown ("rental price").
pub const RENTAL_PRICE_LABEL: &str = "سعر التأجير";

/// Label for the marketplace's share in a breakdown ("platform fee").
pub const PLATFORM_FEE_LABEL: &str = "رسوم المنصة";

/// One labelled amount in a price breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

/// Presentation-ready price summary for a listing card or detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    /// Customer daily rate, e.g. "₪300"
    pub display: String,
    /// Day count caption
    pub subtitle: String,
    /// Customer total for the whole trip
    pub total: String,
    /// Rental price then platform fee
    pub breakdown: Vec<LineItem>,
}

/// Currency glyph followed by the amount without trailing zeros.
///
/// Whole amounts render as integers (`₪362`), fractional ones keep only
/// the significant digits (`₪362.5`).
pub fn format_amount(config: &PricingConfig, amount: Decimal) -> String {
    format!("{}{}", config.currency_symbol, amount.normalize())
}

/// Currency glyph followed by the amount at exactly two decimal places.
pub fn format_total(config: &PricingConfig, amount: Decimal) -> String {
    let mut rounded = round_money(amount, 2);
    rounded.rescale(2);
    format!("{}{}", config.currency_symbol, rounded)
}

/// Per-day price a renter sees for a host rate.
pub fn format_customer_price(
    config: &PricingConfig,
    host_daily_rate: Decimal,
) -> Result<String, PricingError> {
    let quote = calculate_price(config, host_daily_rate, 1)?;
    Ok(format_amount(config, quote.customer_daily_rate))
}

/// Caption describing a trip length ("for N days").
pub fn days_caption(days: i64) -> String {
    if days == 1 {
        format!("لـ {} يوم", days)
    } else {
        format!("لـ {} أيام", days)
    }
}

/// Build the display breakdown for a host rate over `days`.
pub fn get_price_breakdown(
    config: &PricingConfig,
    host_daily_rate: Decimal,
    days: i64,
) -> Result<PriceBreakdown, PricingError> {
    let quote = calculate_price(config, host_daily_rate, days)?;

    Ok(PriceBreakdown {
        display: format_amount(config, quote.customer_daily_rate),
        subtitle: days_caption(days),
        total: format_amount(config, quote.customer_total),
        breakdown: vec![
            LineItem {
                label: RENTAL_PRICE_LABEL.to_string(),
                amount: quote.host_total,
            },
            LineItem {
                label: PLATFORM_FEE_LABEL.to_string(),
                amount: quote.platform_fee_total,
            },
        ],
    })
}
