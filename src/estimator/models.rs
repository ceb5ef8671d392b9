//! Tour configuration model and the fixed rate tables.
//!
//! Every selectable option carries its own rate. Unset or unrecognised
//! selections are represented as `None` on [`TourConfiguration`] and resolved
//! by the calculator's fallback policy, never rejected.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Daily rate charged when a guide accompanies the tour.
pub const GUIDE_DAILY_RATE: i64 = 150;

/// Number of travellers the grand total is split across.
pub const PARTY_SIZE: i64 = 2;

/// Trip lengths offered by the calculator form.
pub const DAY_CHOICES: [i32; 5] = [3, 4, 5, 7, 10];

/// Error returned when an option string does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Accommodation quality category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HotelTier {
    Budget,
    Comfort,
    Luxury,
    Premium,
}

impl HotelTier {
    pub const ALL: [HotelTier; 4] = [
        HotelTier::Budget,
        HotelTier::Comfort,
        HotelTier::Luxury,
        HotelTier::Premium,
    ];

    /// Base nightly rate before the room multiplier is applied
    pub fn nightly_rate(self) -> i64 {
        match self {
            HotelTier::Budget => 100,
            HotelTier::Comfort => 180,
            HotelTier::Luxury => 350,
            HotelTier::Premium => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HotelTier::Budget => "budget",
            HotelTier::Comfort => "comfort",
            HotelTier::Luxury => "luxury",
            HotelTier::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HotelTier::Budget => "Budget",
            HotelTier::Comfort => "Comfort",
            HotelTier::Luxury => "Luxury",
            HotelTier::Premium => "Premium",
        }
    }
}

impl FromStr for HotelTier {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(HotelTier::Budget),
            "comfort" => Ok(HotelTier::Comfort),
            "luxury" => Ok(HotelTier::Luxury),
            "premium" => Ok(HotelTier::Premium),
            _ => Err(UnknownOption {
                kind: "hotel tier",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HotelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room category, scales the hotel tier's nightly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    FamilyRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::FamilyRoom,
    ];

    pub fn multiplier(self) -> Decimal {
        match self {
            RoomType::Standard => dec!(1),
            RoomType::Deluxe => dec!(1.3),
            RoomType::Suite => dec!(1.7),
            RoomType::FamilyRoom => dec!(2.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::FamilyRoom => "family_room",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::FamilyRoom => "Family Room",
        }
    }
}

impl FromStr for RoomType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "suite" => Ok(RoomType::Suite),
            "family" | "family_room" | "family-room" | "familyroom" => Ok(RoomType::FamilyRoom),
            _ => Err(UnknownOption {
                kind: "room type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ground transport hired for the whole tour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Pre-selected in the calculator form, so it also stands in for an unset mode.
    #[default]
    Car,
    Van,
    Jeep,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Car,
        TransportMode::Van,
        TransportMode::Jeep,
    ];

    pub fn daily_rate(self) -> i64 {
        match self {
            TransportMode::Car => 50,
            TransportMode::Van => 80,
            TransportMode::Jeep => 70,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Van => "van",
            TransportMode::Jeep => "jeep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::Van => "Van",
            TransportMode::Jeep => "Jeep",
        }
    }
}

impl FromStr for TransportMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(TransportMode::Car),
            "van" => Ok(TransportMode::Van),
            "jeep" => Ok(TransportMode::Jeep),
            _ => Err(UnknownOption {
                kind: "transport mode",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options selected in the custom tour calculator.
///
/// `days` carries no lower bound here: a value below 2 produces zero or
/// negative accommodation, and rejecting it is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourConfiguration {
    /// Display only, has no effect on price
    pub destination: Option<String>,
    pub days: i32,
    pub hotel_tier: Option<HotelTier>,
    pub room_type: Option<RoomType>,
    pub transport_mode: Option<TransportMode>,
    pub guide_included: bool,
}

impl TourConfiguration {
    /// Billed nights: the last day's checkout is not charged
    pub fn nights(&self) -> i64 {
        i64::from(self.days) - 1
    }
}
