//! Core tour cost calculation.
//!
//! Pure functions for pricing math - no I/O and no shared state, so they are
//! safe to call on every change of the calculator form.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{TourConfiguration, GUIDE_DAILY_RATE, PARTY_SIZE};

/// Round to the nearest whole amount, ties toward positive infinity.
///
/// This is `floor(x + 0.5)`, so `-2.5` rounds to `-2`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_estimator::estimator::round_half_up;
///
/// assert_eq!(round_half_up(dec!(2.5)), dec!(3));
/// assert_eq!(round_half_up(dec!(594.99)), dec!(595));
/// assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    (amount + dec!(0.5)).floor()
}

/// Itemised price of a configured tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    pub nightly_rate: i64,
    pub accommodation_total: i64,
    pub transport_total: i64,
    pub guide_total: i64,
    pub grand_total: i64,
    pub per_person_total: i64,
}

/// Price a tour configuration.
///
/// Fallbacks: an unset hotel tier prices at 0 per night, an unset room type
/// multiplies by 1, and an unset transport mode is charged as a car.
pub fn compute_cost_breakdown(config: &TourConfiguration) -> CostBreakdown {
    let days = Decimal::from(config.days);

    let hotel_base_rate = config
        .hotel_tier
        .map(|tier| Decimal::from(tier.nightly_rate()))
        .unwrap_or(Decimal::ZERO);
    let room_multiplier = config
        .room_type
        .map(|room| room.multiplier())
        .unwrap_or(Decimal::ONE);

    let nightly_rate = round_half_up(hotel_base_rate * room_multiplier);
    let accommodation_total = nightly_rate * Decimal::from(config.nights());

    let transport_mode = config.transport_mode.unwrap_or_default();
    let transport_daily_rate = Decimal::from(transport_mode.daily_rate());
    let transport_total = transport_daily_rate * days;

    let guide_daily_rate = if config.guide_included {
        Decimal::from(GUIDE_DAILY_RATE)
    } else {
        Decimal::ZERO
    };
    let guide_total = guide_daily_rate * days;

    let grand_total = accommodation_total + transport_total + guide_total;
    let per_person_total = round_half_up(grand_total / Decimal::from(PARTY_SIZE));

    CostBreakdown {
        nightly_rate: whole(nightly_rate),
        accommodation_total: whole(accommodation_total),
        transport_total: whole(transport_total),
        guide_total: whole(guide_total),
        grand_total: whole(grand_total),
        per_person_total: whole(per_person_total),
    }
}

/// Amounts reaching here are already whole and far inside `i64` range.
fn whole(amount: Decimal) -> i64 {
    amount.trunc().to_i64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::models::{HotelTier, RoomType, TransportMode, DAY_CHOICES};

    fn config(
        hotel_tier: Option<HotelTier>,
        room_type: Option<RoomType>,
        transport_mode: Option<TransportMode>,
        guide_included: bool,
        days: i32,
    ) -> TourConfiguration {
        TourConfiguration {
            destination: None,
            days,
            hotel_tier,
            room_type,
            transport_mode,
            guide_included,
        }
    }

    // ==================== round_half_up tests ====================

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(dec!(0.5)), dec!(1));
        assert_eq!(round_half_up(dec!(1.5)), dec!(2));
        assert_eq!(round_half_up(dec!(2.5)), dec!(3)); // not banker's
        assert_eq!(round_half_up(dec!(1765)), dec!(1765));
    }

    #[test]
    fn test_round_half_up_non_ties() {
        assert_eq!(round_half_up(dec!(233.99)), dec!(234));
        assert_eq!(round_half_up(dec!(234.49)), dec!(234));
        assert_eq!(round_half_up(dec!(0)), dec!(0));
    }

    #[test]
    fn test_round_half_up_negative() {
        assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
        assert_eq!(round_half_up(dec!(-2.6)), dec!(-3));
        assert_eq!(round_half_up(dec!(-0.4)), dec!(0));
    }

    // ==================== compute_cost_breakdown tests ====================

    #[test]
    fn test_luxury_suite_van_with_guide() {
        let breakdown = compute_cost_breakdown(&config(
            Some(HotelTier::Luxury),
            Some(RoomType::Suite),
            Some(TransportMode::Van),
            true,
            5,
        ));

        assert_eq!(
            breakdown,
            CostBreakdown {
                nightly_rate: 595,
                accommodation_total: 2380,
                transport_total: 400,
                guide_total: 750,
                grand_total: 3530,
                per_person_total: 1765,
            }
        );
    }

    #[test]
    fn test_budget_standard_car_without_guide() {
        let breakdown = compute_cost_breakdown(&config(
            Some(HotelTier::Budget),
            Some(RoomType::Standard),
            Some(TransportMode::Car),
            false,
            3,
        ));

        assert_eq!(breakdown.nightly_rate, 100);
        assert_eq!(breakdown.accommodation_total, 200);
        assert_eq!(breakdown.transport_total, 150);
        assert_eq!(breakdown.guide_total, 0);
        assert_eq!(breakdown.grand_total, 350);
        assert_eq!(breakdown.per_person_total, 175);
    }

    #[test]
    fn test_nightly_rate_for_every_tier_and_room() {
        let expected = [
            (HotelTier::Budget, [100, 130, 170, 200]),
            (HotelTier::Comfort, [180, 234, 306, 360]),
            (HotelTier::Luxury, [350, 455, 595, 700]),
            (HotelTier::Premium, [500, 650, 850, 1000]),
        ];

        for (tier, rates) in expected {
            for (room, rate) in RoomType::ALL.into_iter().zip(rates) {
                let breakdown = compute_cost_breakdown(&config(Some(tier), Some(room), None, false, 3));
                assert_eq!(breakdown.nightly_rate, rate, "{tier} / {room}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let input = config(Some(HotelTier::Comfort), Some(RoomType::Deluxe), Some(TransportMode::Jeep), true, 7);
        assert_eq!(compute_cost_breakdown(&input), compute_cost_breakdown(&input));
    }

    #[test]
    fn test_everything_unset_except_days() {
        let breakdown = compute_cost_breakdown(&config(None, None, None, false, 4));

        // No hotel selected: nothing per night. Transport falls back to car.
        assert_eq!(breakdown.nightly_rate, 0);
        assert_eq!(breakdown.accommodation_total, 0);
        assert_eq!(breakdown.transport_total, 200);
        assert_eq!(breakdown.guide_total, 0);
        assert_eq!(breakdown.grand_total, 200);
        assert_eq!(breakdown.per_person_total, 100);
    }

    #[test]
    fn test_unset_room_type_keeps_base_rate() {
        // Rate tables fall back to 0 but the multiplier falls back to 1.
        // Kept as-is so a pending room choice does not zero the hotel cost.
        for tier in HotelTier::ALL {
            let breakdown = compute_cost_breakdown(&config(Some(tier), None, None, false, 3));
            assert_eq!(breakdown.nightly_rate, tier.nightly_rate());
        }
    }

    #[test]
    fn test_unset_transport_is_charged_as_car() {
        let unset = compute_cost_breakdown(&config(None, None, None, false, 5));
        let car = compute_cost_breakdown(&config(None, None, Some(TransportMode::Car), false, 5));
        assert_eq!(unset.transport_total, car.transport_total);
        assert_eq!(unset.transport_total, 250);
    }

    #[test]
    fn test_single_day_has_no_accommodation() {
        for tier in HotelTier::ALL {
            for room in RoomType::ALL {
                let breakdown = compute_cost_breakdown(&config(Some(tier), Some(room), None, true, 1));
                assert_eq!(breakdown.accommodation_total, 0);
                assert_eq!(breakdown.grand_total, 50 + 150);
            }
        }
    }

    #[test]
    fn test_zero_days_goes_negative() {
        // Unreachable from the form, but the subtraction is not clamped.
        let breakdown = compute_cost_breakdown(&config(
            Some(HotelTier::Premium),
            Some(RoomType::Standard),
            Some(TransportMode::Van),
            true,
            0,
        ));

        assert_eq!(breakdown.accommodation_total, -500);
        assert_eq!(breakdown.transport_total, 0);
        assert_eq!(breakdown.guide_total, 0);
        assert_eq!(breakdown.grand_total, -500);
        assert_eq!(breakdown.per_person_total, -250);
    }

    #[test]
    fn test_even_grand_total_splits_exactly() {
        // 130 * 2 nights + 70 * 3 days
        let breakdown = compute_cost_breakdown(&config(
            Some(HotelTier::Budget),
            Some(RoomType::Deluxe),
            Some(TransportMode::Jeep),
            false,
            3,
        ));
        assert_eq!(breakdown.grand_total, 470);
        assert_eq!(breakdown.per_person_total, 235);
    }

    #[test]
    fn test_odd_grand_total_rounds_per_person_up() {
        // 595 * 3 nights + 80 * 4 days = 2105
        let breakdown = compute_cost_breakdown(&config(
            Some(HotelTier::Luxury),
            Some(RoomType::Suite),
            Some(TransportMode::Van),
            false,
            4,
        ));
        assert_eq!(breakdown.accommodation_total, 1785);
        assert_eq!(breakdown.grand_total, 2105);
        assert_eq!(breakdown.per_person_total, 1053);
    }

    #[test]
    fn test_extreme_days_stay_exact() {
        let at = |days| {
            compute_cost_breakdown(&config(
                Some(HotelTier::Premium),
                Some(RoomType::FamilyRoom),
                Some(TransportMode::Van),
                true,
                days,
            ))
        };

        let breakdown = at(-1);
        assert_eq!(breakdown.accommodation_total, -2000);
        assert_eq!(breakdown.grand_total, -2230);
        assert_eq!(breakdown.per_person_total, -1115);

        let max = i64::from(i32::MAX);
        let breakdown = at(i32::MAX);
        assert_eq!(breakdown.grand_total, 1000 * (max - 1) + 230 * max);

        let min = i64::from(i32::MIN);
        let breakdown = at(i32::MIN);
        assert_eq!(breakdown.grand_total, 1000 * (min - 1) + 230 * min);
    }

    #[test]
    fn test_monotonic_in_days() {
        let mut previous: Option<CostBreakdown> = None;
        for days in DAY_CHOICES {
            let breakdown = compute_cost_breakdown(&config(
                Some(HotelTier::Luxury),
                Some(RoomType::Deluxe),
                Some(TransportMode::Jeep),
                true,
                days,
            ));
            if let Some(prev) = previous {
                assert!(breakdown.transport_total >= prev.transport_total);
                assert!(breakdown.guide_total >= prev.guide_total);
            }
            previous = Some(breakdown);
        }
    }

    #[test]
    fn test_destination_does_not_affect_price() {
        let mut input = config(Some(HotelTier::Budget), Some(RoomType::Suite), None, true, 7);
        let without = compute_cost_breakdown(&input);
        input.destination = Some("Lisbon".to_string());
        assert_eq!(compute_cost_breakdown(&input), without);
    }
}
