//! Estimator route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::calculators::compute_cost_breakdown;
use super::models::TourConfiguration;
use super::requests::EstimateRequest;
use super::responses::{EstimateResponse, OptionsResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/estimate", post(estimate))
        .route("/estimate/options", get(options))
}

/// Price a tour configuration
pub async fn estimate(
    payload: std::result::Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>> {
    let Json(req) = payload?;
    let config = TourConfiguration::from(req);
    let breakdown = compute_cost_breakdown(&config);

    tracing::debug!(
        days = config.days,
        hotel_tier = ?config.hotel_tier,
        room_type = ?config.room_type,
        transport_mode = ?config.transport_mode,
        guide = config.guide_included,
        grand_total = breakdown.grand_total,
        "Estimated tour"
    );

    Ok(Json(EstimateResponse::new(config, breakdown)))
}

/// Option catalog for the calculator form
pub async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(OptionsResponse::new(state.config.destinations.clone()))
}
