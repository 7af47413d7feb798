//! Travel cost of an ordered multi-stop drive.
//!
//! Distances are summed leg by leg; time and fuel are then estimated once
//! from the total so per-leg rounding does not accumulate.

use geo::Coord;

use crate::geodesy::path_length_miles;
use crate::{TravelCostModel, TravelTime};

/// Aggregate distance, time and fuel cost of a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use basket_core::{RouteCost, TravelCostModel};
///
/// let home = Coord { x: 0.0, y: 0.0 };
/// let cost = RouteCost::round_trip(home, &[], &TravelCostModel::default());
/// assert_eq!(cost, RouteCost::zero());
/// assert_eq!(cost.total_travel_time.to_string(), "0 min");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RouteCost {
    /// Total great-circle distance in miles.
    pub total_distance: f64,
    /// Estimated driving time for the whole route.
    pub total_travel_time: TravelTime,
    /// Estimated fuel cost in dollars for the whole route.
    pub total_gas_cost: f64,
}

impl RouteCost {
    /// A route that goes nowhere.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_distance: 0.0,
            total_travel_time: TravelTime::ZERO,
            total_gas_cost: 0.0,
        }
    }

    /// Cost of visiting `stops` in order.
    ///
    /// The caller includes any start and return points. Sequences with fewer
    /// than two points cost nothing.
    #[must_use]
    pub fn along(stops: &[Coord<f64>], model: &TravelCostModel) -> Self {
        if stops.len() < 2 {
            return Self::zero();
        }
        let total_distance = path_length_miles(stops);
        Self {
            total_distance,
            total_travel_time: model.travel_time(total_distance),
            total_gas_cost: model.fuel_cost(total_distance),
        }
    }

    /// Cost of driving `origin → stops… → origin`.
    ///
    /// With no stops there is no trip and the cost is zero.
    #[must_use]
    pub fn round_trip(origin: Coord<f64>, stops: &[Coord<f64>], model: &TravelCostModel) -> Self {
        if stops.is_empty() {
            return Self::zero();
        }
        let mut path = Vec::with_capacity(stops.len() + 2);
        path.push(origin);
        path.extend_from_slice(stops);
        path.push(origin);
        Self::along(&path, model)
    }
}

impl Default for RouteCost {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::distance_miles;
    use rstest::{fixture, rstest};

    const HOME: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    #[fixture]
    fn model() -> TravelCostModel {
        TravelCostModel::default()
    }

    #[rstest]
    #[case(&[])]
    #[case(&[HOME])]
    fn short_sequences_cost_nothing(model: TravelCostModel, #[case] stops: &[Coord<f64>]) {
        assert_eq!(RouteCost::along(stops, &model), RouteCost::zero());
    }

    #[rstest]
    fn round_trip_includes_return_leg(model: TravelCostModel) {
        let a = Coord { x: 0.0, y: 0.1 };
        let b = Coord { x: 0.1, y: 0.1 };
        let cost = RouteCost::round_trip(HOME, &[a, b], &model);
        let expected = distance_miles(HOME, a) + distance_miles(a, b) + distance_miles(b, HOME);
        assert!((cost.total_distance - expected).abs() < 1e-9);
        assert_eq!(cost.total_travel_time, model.travel_time(expected));
        assert_eq!(cost.total_gas_cost, model.fuel_cost(expected));
    }

    #[rstest]
    fn time_is_estimated_from_total_distance(model: TravelCostModel) {
        // Two 0.1-mile legs would each round up to a minute on their own.
        let near = Coord { x: 0.0, y: 0.1 / 69.0 };
        let cost = RouteCost::round_trip(HOME, &[near], &model);
        assert_eq!(cost.total_travel_time.to_string(), "1 min");
    }
}
