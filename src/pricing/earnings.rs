//! Revenue figures for the host dashboard and the admin panel.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::models::{Booking, BookingStatus, PaymentStatus};
use super::services::PricingError;

/// Aggregates over a set of bookings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsSummary {
    /// Sum of paid bookings
    pub total_revenue: Decimal,
    pub booking_count: usize,
    /// Total revenue over all bookings, rounded down to a whole amount
    pub average_per_booking: Decimal,
    pub pending_bookings: usize,
    pub upcoming_bookings: usize,
}

/// Summarize bookings as of `today`.
///
/// Only paid bookings count toward revenue, but the average divides by
/// every booking in the set. Fails with `PricingError::Overflow` when the
/// paid total does not fit in a `Decimal`.
pub fn summarize_earnings(
    bookings: &[Booking],
    today: NaiveDate,
) -> Result<EarningsSummary, PricingError> {
    let total_revenue = bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .try_fold(Decimal::ZERO, |acc, b| acc.checked_add(b.total_amount))
        .ok_or(PricingError::Overflow)?;

    let booking_count = bookings.len();
    let average_per_booking = if booking_count > 0 {
        (total_revenue / Decimal::from(booking_count)).floor()
    } else {
        Decimal::ZERO
    };

    Ok(EarningsSummary {
        total_revenue,
        booking_count,
        average_per_booking,
        pending_bookings: bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count(),
        upcoming_bookings: bookings.iter().filter(|b| b.is_upcoming(today)).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(
        amount: Decimal,
        status: BookingStatus,
        payment_status: PaymentStatus,
        start: NaiveDate,
    ) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            start_date: start,
            end_date: start + chrono::Duration::days(3),
            total_days: 3,
            total_amount: amount,
            status,
            payment_status,
        }
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_earnings(&[], date(2025, 6, 1)).unwrap();
        assert_eq!(summary.total_revenue, dec!(0));
        assert_eq!(summary.booking_count, 0);
        assert_eq!(summary.average_per_booking, dec!(0));
        assert_eq!(summary.pending_bookings, 0);
        assert_eq!(summary.upcoming_bookings, 0);
    }

    #[test]
    fn test_summarize_counts_only_paid_revenue() {
        let today = date(2025, 6, 1);
        let bookings = vec![
            booking(dec!(660), BookingStatus::Completed, PaymentStatus::Paid, date(2025, 5, 1)),
            booking(dec!(300), BookingStatus::Confirmed, PaymentStatus::Paid, date(2025, 6, 10)),
            booking(dec!(500), BookingStatus::Pending, PaymentStatus::Pending, date(2025, 6, 20)),
            booking(dec!(220), BookingStatus::Cancelled, PaymentStatus::Refunded, date(2025, 5, 5)),
        ];

        let summary = summarize_earnings(&bookings, today).unwrap();

        assert_eq!(summary.total_revenue, dec!(960));
        assert_eq!(summary.booking_count, 4);
        // 960 / 4 over every booking, not just paid ones
        assert_eq!(summary.average_per_booking, dec!(240));
        assert_eq!(summary.pending_bookings, 1);
        assert_eq!(summary.upcoming_bookings, 1);
    }

    #[test]
    fn test_summarize_average_rounds_down() {
        let today = date(2025, 6, 1);
        let bookings = vec![
            booking(dec!(100), BookingStatus::Completed, PaymentStatus::Paid, today),
            booking(dec!(100), BookingStatus::Completed, PaymentStatus::Paid, today),
            booking(dec!(101), BookingStatus::Completed, PaymentStatus::Paid, today),
        ];

        let summary = summarize_earnings(&bookings, today).unwrap();
        assert_eq!(summary.total_revenue, dec!(301));
        assert_eq!(summary.average_per_booking, dec!(100));
        // starting today is not upcoming
        assert_eq!(summary.upcoming_bookings, 0);
    }

    #[test]
    fn test_summarize_overflow_is_error() {
        let today = date(2025, 6, 1);
        let bookings = vec![
            booking(Decimal::MAX, BookingStatus::Completed, PaymentStatus::Paid, today),
            booking(dec!(1), BookingStatus::Completed, PaymentStatus::Paid, today),
        ];

        let err = summarize_earnings(&bookings, today).unwrap_err();
        assert_eq!(err, PricingError::Overflow);
    }

    #[test]
    fn test_summarize_unpaid_amounts_do_not_overflow() {
        let today = date(2025, 6, 1);
        let bookings = vec![
            booking(Decimal::MAX, BookingStatus::Completed, PaymentStatus::Paid, today),
            booking(Decimal::MAX, BookingStatus::Cancelled, PaymentStatus::Refunded, today),
        ];

        let summary = summarize_earnings(&bookings, today).unwrap();
        assert_eq!(summary.total_revenue, Decimal::MAX);
    }
}
