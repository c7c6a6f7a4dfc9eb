//! Application configuration loaded from the environment.
//!
//! `dotenvy` populates the process environment from a `.env` file first,
//! then every value is read through a lookup closure so tests can supply
//! their own.

use std::net::SocketAddr;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Platform fee charged on top of every host daily rate.
pub const DEFAULT_PLATFORM_FEE_PER_DAY: Decimal = dec!(20);

/// Shekel sign, the marketplace's display currency.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₪";

/// Day count used by the listing card breakdown when none is given.
pub const DEFAULT_BREAKDOWN_DAYS: i64 = 3;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Pricing knobs shared by every calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    pub platform_fee_per_day: Decimal,
    pub currency_symbol: String,
    pub default_breakdown_days: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            platform_fee_per_day: DEFAULT_PLATFORM_FEE_PER_DAY,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            default_breakdown_days: DEFAULT_BREAKDOWN_DAYS,
        }
    }
}

impl PricingConfig {
    /// Same defaults with a different per-day fee.
    pub fn with_fee(platform_fee_per_day: Decimal) -> Self {
        Self {
            platform_fee_per_day,
            ..Self::default()
        }
    }
}

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", || SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let platform_fee_per_day =
            parse_or(&lookup, "PLATFORM_FEE_PER_DAY", || DEFAULT_PLATFORM_FEE_PER_DAY)?;
        if platform_fee_per_day < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                key: "PLATFORM_FEE_PER_DAY",
                value: platform_fee_per_day.to_string(),
                reason: "fee must not be negative".to_string(),
            });
        }

        let default_breakdown_days =
            parse_or(&lookup, "DEFAULT_BREAKDOWN_DAYS", || DEFAULT_BREAKDOWN_DAYS)?;
        if default_breakdown_days <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "DEFAULT_BREAKDOWN_DAYS",
                value: default_breakdown_days.to_string(),
                reason: "day count must be positive".to_string(),
            });
        }

        let currency_symbol = lookup("CURRENCY_SYMBOL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        Ok(Self {
            bind_addr,
            pricing: PricingConfig {
                platform_fee_per_day,
                currency_symbol,
                default_breakdown_days,
            },
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> T,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    key,
                    value: raw.clone(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(default()),
    }
}
