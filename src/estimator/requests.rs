//! Request DTOs for estimator API endpoints.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::models::{HotelTier, RoomType, TourConfiguration, TransportMode};

/// Request to estimate a custom tour
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default)]
    pub destination: Option<String>,
    pub days: i32,
    #[serde(default, deserialize_with = "lenient_option")]
    pub hotel_tier: Option<HotelTier>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub room_type: Option<RoomType>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub transport_mode: Option<TransportMode>,
    #[serde(default)]
    pub guide_included: bool,
}

impl From<EstimateRequest> for TourConfiguration {
    fn from(req: EstimateRequest) -> Self {
        TourConfiguration {
            destination: req.destination.filter(|d| !d.trim().is_empty()),
            days: req.days,
            hotel_tier: req.hotel_tier,
            room_type: req.room_type,
            transport_mode: req.transport_mode,
            guide_included: req.guide_included,
        }
    }
}

/// Accept any JSON value for an option field.
///
/// Only a string naming a known variant selects it; anything else (null,
/// numbers, unknown names) leaves the option unset so the calculator's
/// fallback applies.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(serde_json::Value::String(s)) => match s.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Falling back for unrecognised option: {}", e);
                None
            }
        },
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            tracing::debug!("Falling back for non-string option value: {}", other);
            None
        }
    })
}
