//! Marketplace records the pricing service reads.
//!
//! These mirror the columns of the backend's `cars` and `bookings` tables
//! that pricing and earnings need. The UI forwards them as JSON; nothing
//! here is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Inactive,
    Maintenance,
}

/// Car listing (subset of the `cars` row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    #[serde(default = "default_min_trip_duration")]
    pub min_trip_duration: i64,
    pub status: ListingStatus,
}

fn default_min_trip_duration() -> i64 {
    1
}

impl Listing {
    /// Whether renters can currently book this car
    pub fn is_bookable(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

/// Payment state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// Booking (subset of the `bookings` row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

impl Booking {
    /// Confirmed and starting strictly after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == BookingStatus::Confirmed && self.start_date > today
    }
}
