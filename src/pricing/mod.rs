//! Pricing engine module for the car-sharing marketplace.
//!
//! Turns a host's daily rate into what the renter pays: a flat platform fee
//! is added per rental day. Exposed to the web UI via HTTP/JSON.

pub mod booking;
pub mod calculators;
pub mod earnings;
pub mod format;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use booking::{calculate_booking_total, BookingTotal, DateInput};
pub use calculators::{calculate_price, round_money, PriceQuote};
pub use format::{format_customer_price, get_price_breakdown, PriceBreakdown};
pub use routes::router;
pub use services::PricingError;
