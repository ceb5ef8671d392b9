//! Tour cost estimator.
//!
//! Converts the options picked in the custom tour calculator into an
//! itemised price. The calculation itself is pure; `routes` exposes it over
//! HTTP for server-side estimates.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_cost_breakdown, round_half_up, CostBreakdown};
pub use models::{HotelTier, RoomType, TourConfiguration, TransportMode};
pub use routes::router;
