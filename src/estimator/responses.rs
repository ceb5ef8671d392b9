//! Response DTOs for estimator API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::CostBreakdown;
use super::models::{
    HotelTier, RoomType, TourConfiguration, TransportMode, DAY_CHOICES, GUIDE_DAILY_RATE,
    PARTY_SIZE,
};

/// Response for a tour estimate
///
/// Option fields echo the selection the price was computed from, so a
/// value that fell back is reported as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub destination: Option<String>,
    pub days: i32,
    pub nights: i64,
    pub hotel_tier: Option<HotelTier>,
    pub room_type: Option<RoomType>,
    pub transport_mode: Option<TransportMode>,
    pub guide_included: bool,
    pub party_size: i64,
    pub nightly_rate: i64,
    pub accommodation_total: i64,
    pub transport_total: i64,
    pub guide_total: i64,
    pub grand_total: i64,
    pub per_person_total: i64,
}

impl EstimateResponse {
    pub fn new(config: TourConfiguration, breakdown: CostBreakdown) -> Self {
        Self {
            nights: config.nights(),
            destination: config.destination,
            days: config.days,
            hotel_tier: config.hotel_tier,
            room_type: config.room_type,
            transport_mode: config.transport_mode,
            guide_included: config.guide_included,
            party_size: PARTY_SIZE,
            nightly_rate: breakdown.nightly_rate,
            accommodation_total: breakdown.accommodation_total,
            transport_total: breakdown.transport_total,
            guide_total: breakdown.guide_total,
            grand_total: breakdown.grand_total,
            per_person_total: breakdown.per_person_total,
        }
    }
}

/// A priced option in the calculator form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedOption<T: Serialize> {
    pub value: T,
    pub label: &'static str,
    pub rate: i64,
}

/// A room option; multipliers are decimal strings to keep them exact
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOption {
    pub value: RoomType,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

/// Everything a client needs to build the calculator form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub destinations: Vec<String>,
    pub day_choices: Vec<i32>,
    pub hotel_tiers: Vec<RatedOption<HotelTier>>,
    pub room_types: Vec<RoomOption>,
    pub transport_modes: Vec<RatedOption<TransportMode>>,
    pub default_transport_mode: TransportMode,
    pub guide_daily_rate: i64,
    pub party_size: i64,
}

impl OptionsResponse {
    pub fn new(destinations: Vec<String>) -> Self {
        Self {
            destinations,
            day_choices: DAY_CHOICES.to_vec(),
            hotel_tiers: HotelTier::ALL
                .into_iter()
                .map(|tier| RatedOption {
                    value: tier,
                    label: tier.label(),
                    rate: tier.nightly_rate(),
                })
                .collect(),
            room_types: RoomType::ALL
                .into_iter()
                .map(|room| RoomOption {
                    value: room,
                    label: room.label(),
                    multiplier: room.multiplier(),
                })
                .collect(),
            transport_modes: TransportMode::ALL
                .into_iter()
                .map(|mode| RatedOption {
                    value: mode,
                    label: mode.label(),
                    rate: mode.daily_rate(),
                })
                .collect(),
            default_transport_mode: TransportMode::default(),
            guide_daily_rate: GUIDE_DAILY_RATE,
            party_size: PARTY_SIZE,
        }
    }
}

/// Generic error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
