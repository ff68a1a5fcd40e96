//! Min/max craft counts for an exact propulsion-unit total

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// Propulsion units of the smaller craft type.
pub const LIGHT_CRAFT_UNITS: u64 = 4;

/// Propulsion units of the larger craft type.
pub const HEAVY_CRAFT_UNITS: u64 = 6;

/// The fewest and the most crafts whose units sum exactly to a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRange {
    pub min_crafts: u64,
    pub max_crafts: u64,
}

/// Compute the feasible craft-count range for `total` units.
///
/// Rejects negative and zero totals as invalid arguments. Odd totals
/// and a total of 2 have no decomposition into 4s and 6s and come back
/// as the infeasible errors.
///
/// Minimum: spend heavy crafts. A remainder of 4 mod 6 needs one light
/// craft; a remainder of 2 needs two, since 4a ≡ 2 (mod 6) forces
/// a ≡ 2 (mod 3) and trading a heavy craft for light ones never lowers
/// the count. Maximum: spend light crafts, with one heavy craft
/// absorbing a remainder of 2 mod 4.
pub fn fleet_range(total: i64) -> Result<FleetRange> {
    if total < 0 {
        return Err(FleetError::Negative { got: total });
    }
    if total == 0 {
        return Err(FleetError::ZeroUnits);
    }
    let total = total as u64;
    if total % 2 != 0 {
        return Err(FleetError::OddTotal { got: total });
    }
    if total == 2 {
        return Err(FleetError::BelowMinimum { got: total });
    }

    // total is even and >= 4 from here on
    let min_crafts = match total % 6 {
        0 => total / 6,
        2 => 2 + (total - 8) / 6, // smallest such total is 8
        _ => 1 + (total - 4) / 6,
    };
    let max_crafts = match total % 4 {
        0 => total / 4,
        _ => 1 + (total - 6) / 4, // remainder 2: smallest such total is 6
    };

    Ok(FleetRange {
        min_crafts,
        max_crafts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Solve a + b = crafts, 4a + 6b = total for non-negative (a, b).
    fn witness(total: u64, crafts: u64) -> Option<(u64, u64)> {
        let light_units = crafts.checked_mul(LIGHT_CRAFT_UNITS)?;
        let spread = total.checked_sub(light_units)?;
        if spread % 2 != 0 {
            return None;
        }
        let heavy = spread / 2;
        let light = crafts.checked_sub(heavy)?;
        Some((light, heavy))
    }

    #[test]
    fn test_official_cases() {
        assert_eq!(
            fleet_range(4).unwrap(),
            FleetRange {
                min_crafts: 1,
                max_crafts: 1
            }
        );
        assert_eq!(
            fleet_range(24).unwrap(),
            FleetRange {
                min_crafts: 4,
                max_crafts: 6
            }
        );
        assert_eq!(
            fleet_range(10).unwrap(),
            FleetRange {
                min_crafts: 2,
                max_crafts: 2
            }
        );
    }

    #[test]
    fn test_near_u64_scale_total() {
        let range = fleet_range(998_244_353_998_244_352).unwrap();
        assert_eq!(range.min_crafts, 166_374_058_999_707_392);
        assert_eq!(range.max_crafts, 249_561_088_499_561_088);
    }

    #[test]
    fn test_remainder_classes() {
        // total % 6 == 2 needs two light crafts
        for (total, min, max) in [(8, 2, 2), (14, 3, 3), (20, 4, 5)] {
            let range = fleet_range(total).unwrap();
            assert_eq!((range.min_crafts, range.max_crafts), (min, max), "total {total}");
        }
        // total % 6 == 4 needs one light craft
        for (total, min, max) in [(10, 2, 2), (16, 3, 4), (22, 4, 5)] {
            let range = fleet_range(total).unwrap();
            assert_eq!((range.min_crafts, range.max_crafts), (min, max), "total {total}");
        }
    }

    #[test]
    fn test_bounds_are_achievable_for_sweep() {
        for total in (4..=600u64).step_by(2) {
            let range = fleet_range(total as i64).unwrap();
            assert!(range.min_crafts <= range.max_crafts, "total {total}");
            assert!(range.min_crafts * LIGHT_CRAFT_UNITS <= total, "total {total}");
            assert!(total <= range.max_crafts * HEAVY_CRAFT_UNITS, "total {total}");

            // both bounds must be realized by an actual craft mix
            let (light, heavy) = witness(total, range.min_crafts)
                .unwrap_or_else(|| panic!("no witness for min at total {total}"));
            assert_eq!(light * 4 + heavy * 6, total);
            let (light, heavy) = witness(total, range.max_crafts)
                .unwrap_or_else(|| panic!("no witness for max at total {total}"));
            assert_eq!(light * 4 + heavy * 6, total);

            // and nothing outside the range may be
            assert!(witness(total, range.min_crafts - 1).is_none(), "total {total}");
            assert!(witness(total, range.max_crafts + 1).is_none(), "total {total}");
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            fleet_range(-4).unwrap_err(),
            FleetError::Negative { got: -4 }
        );
        assert_eq!(fleet_range(0).unwrap_err(), FleetError::ZeroUnits);
    }

    #[test]
    fn test_infeasible_totals() {
        assert_eq!(fleet_range(7).unwrap_err(), FleetError::OddTotal { got: 7 });
        assert_eq!(fleet_range(1).unwrap_err(), FleetError::OddTotal { got: 1 });
        assert_eq!(
            fleet_range(2).unwrap_err(),
            FleetError::BelowMinimum { got: 2 }
        );
        assert!(fleet_range(7).unwrap_err().is_infeasible());
        assert!(fleet_range(2).unwrap_err().is_infeasible());
        assert!(!fleet_range(-1).unwrap_err().is_infeasible());
        assert!(!fleet_range(0).unwrap_err().is_infeasible());
    }
}
