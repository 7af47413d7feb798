//! Trip totals combining item cost, sales tax and fuel.

use crate::{MultiStorePlan, SingleStorePlan};

/// What a trip costs once tax and fuel are added to the items.
///
/// # Examples
/// ```
/// use basket_core::TripTotals;
///
/// let totals = TripTotals::new(10.0, 0.05, 1.5);
/// assert_eq!(totals.tax_cost, 0.5);
/// assert_eq!(totals.total, 12.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TripTotals {
    /// Sum of item subtotals.
    pub item_cost: f64,
    /// `item_cost × tax_rate`.
    pub tax_cost: f64,
    /// Fuel for the whole trip.
    pub fuel_cost: f64,
    /// Items plus tax plus fuel.
    pub total: f64,
}

impl TripTotals {
    /// Combine an item cost, a sales-tax rate in `0.0..=1.0` and a fuel cost.
    #[must_use]
    pub fn new(item_cost: f64, tax_rate: f64, fuel_cost: f64) -> Self {
        let tax_cost = item_cost * tax_rate;
        Self {
            item_cost,
            tax_cost,
            fuel_cost,
            total: item_cost + tax_cost + fuel_cost,
        }
    }

    /// Totals for a single-store plan; fuel covers the drive there and back.
    #[must_use]
    pub fn for_single_store(plan: &SingleStorePlan, tax_rate: f64) -> Self {
        Self::new(plan.total_cost, tax_rate, plan.gas_cost * 2.0)
    }

    /// Totals for a multi-store plan; fuel covers the full round-trip route.
    #[must_use]
    pub fn for_multi_store(plan: &MultiStorePlan, tax_rate: f64) -> Self {
        Self::new(plan.total_cost, tax_rate, plan.travel_info.total_gas_cost)
    }
}
