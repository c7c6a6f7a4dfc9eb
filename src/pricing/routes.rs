//! Pricing API route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::requests::{
    BookingTotalRequest, CustomerPriceQuery, EarningsSummaryRequest, PriceBreakdownRequest,
    PriceQuoteRequest,
};
use super::responses::{
    BookingTotalResponse, CustomerPriceResponse, EarningsSummaryResponse, PriceBreakdownResponse,
    PriceQuoteResponse,
};
use super::services;

/// Routes under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pricing/quote", post(quote))
        .route("/pricing/customer-price", get(customer_price))
        .route("/pricing/breakdown", post(breakdown))
        .route("/pricing/booking-total", post(booking_total))
        .route("/earnings/summary", post(earnings_summary))
}

fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

/// Full quote for a host rate
async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PriceQuoteRequest>, JsonRejection>,
) -> Result<Json<PriceQuoteResponse>> {
    let request = json_body(payload)?;
    Ok(Json(services::quote(&state.pricing, &request)?))
}

/// Per-day customer price for a listing card
async fn customer_price(
    State(state): State<AppState>,
    query: std::result::Result<Query<CustomerPriceQuery>, QueryRejection>,
) -> Result<Json<CustomerPriceResponse>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(services::customer_price(&state.pricing, &query)?))
}

/// Display breakdown
async fn breakdown(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PriceBreakdownRequest>, JsonRejection>,
) -> Result<Json<PriceBreakdownResponse>> {
    let request = json_body(payload)?;
    Ok(Json(services::breakdown(&state.pricing, &request)?))
}

/// Booking panel totals
async fn booking_total(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookingTotalRequest>, JsonRejection>,
) -> Result<Json<BookingTotalResponse>> {
    let request = json_body(payload)?;
    Ok(Json(services::booking_total(&state.pricing, &request)?))
}

/// Dashboard revenue figures
async fn earnings_summary(
    State(state): State<AppState>,
    payload: std::result::Result<Json<EarningsSummaryRequest>, JsonRejection>,
) -> Result<Json<EarningsSummaryResponse>> {
    let request = json_body(payload)?;
    Ok(Json(services::earnings_summary(&state.pricing, &request)?))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::PricingConfig;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let app = crate::app(PricingConfig::default());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_quote_endpoint() {
        let (status, body) = send(post_json(
            "/api/pricing/quote",
            json!({ "daily_rate": "200", "days": 3 }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["host_total"]["amount"], "600");
        assert_eq!(body["platform_fee_total"]["amount"], "60");
        assert_eq!(body["customer_total"]["amount"], "660");
        assert_eq!(body["customer_daily_rate"]["display"], "₪220");
        assert_eq!(body["days"], 3);
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_zero_days() {
        let (status, body) = send(post_json(
            "/api/pricing/quote",
            json!({ "daily_rate": "200", "days": 0 }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_argument");
    }

    #[tokio::test]
    async fn test_quote_endpoint_rejects_malformed_body() {
        let (status, body) = send(post_json("/api/pricing/quote", json!({ "days": 3 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "bad_request");
    }

    #[tokio::test]
    async fn test_customer_price_endpoint() {
        let request = Request::builder()
            .uri("/api/pricing/customer-price?daily_rate=342")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display"], "₪362");
    }

    #[tokio::test]
    async fn test_breakdown_endpoint() {
        let (status, body) = send(post_json(
            "/api/pricing/breakdown",
            json!({ "daily_rate": "280", "days": 1 }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display"], "₪300");
        assert_eq!(body["total"], "₪300");
        assert_eq!(body["breakdown"][0]["amount"], "280");
        assert_eq!(body["breakdown"][1]["amount"], "20");
    }

    #[tokio::test]
    async fn test_booking_total_endpoint() {
        let (status, body) = send(post_json(
            "/api/pricing/booking-total",
            json!({
                "listing": {
                    "id": "7d8f6a5e-1c2b-4a3d-9e8f-0a1b2c3d4e5f",
                    "daily_rate": "200",
                    "min_trip_duration": 1,
                    "status": "active"
                },
                "start_date": "2025-06-01",
                "end_date": "2025-06-04"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"], 3);
        assert_eq!(body["total"]["display"], "₪660.00");
        assert_eq!(body["input"], "complete");
        assert_eq!(body["can_confirm"], true);
    }

    #[tokio::test]
    async fn test_booking_total_endpoint_without_dates() {
        let (status, body) = send(post_json(
            "/api/pricing/booking-total",
            json!({
                "listing": {
                    "id": "7d8f6a5e-1c2b-4a3d-9e8f-0a1b2c3d4e5f",
                    "daily_rate": "200",
                    "status": "active"
                }
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["days"], 0);
        assert_eq!(body["total"]["amount"], "0");
        assert_eq!(body["input"], "incomplete");
        assert_eq!(body["can_confirm"], false);
    }

    #[tokio::test]
    async fn test_earnings_summary_endpoint() {
        let (status, body) = send(post_json(
            "/api/earnings/summary",
            json!({
                "as_of": "2025-06-01",
                "bookings": [{
                    "id": "0b9f3c1e-2d4a-4e6b-8c7d-9e0f1a2b3c4d",
                    "start_date": "2025-06-10",
                    "end_date": "2025-06-13",
                    "total_days": 3,
                    "total_amount": "660",
                    "status": "confirmed",
                    "payment_status": "paid"
                }]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_revenue"]["amount"], "660");
        assert_eq!(body["booking_count"], 1);
        assert_eq!(body["upcoming_bookings"], 1);
    }

    #[tokio::test]
    async fn test_earnings_summary_endpoint_overflow_is_bad_request() {
        let booking = |id: &str, amount: &str| {
            json!({
                "id": id,
                "start_date": "2025-05-01",
                "end_date": "2025-05-04",
                "total_days": 3,
                "total_amount": amount,
                "status": "completed",
                "payment_status": "paid"
            })
        };
        let (status, body) = send(post_json(
            "/api/earnings/summary",
            json!({
                "as_of": "2025-06-01",
                "bookings": [
                    booking("0b9f3c1e-2d4a-4e6b-8c7d-9e0f1a2b3c4d", "79228162514264337593543950335"),
                    booking("1c0a4d2f-3e5b-4f7c-9d8e-0f1a2b3c4d5e", "1")
                ]
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "overflow");
    }
}
