//! Plan requests, results and the [`Planner`] trait.
//!
//! Every result type here is ephemeral: it is rebuilt for each request and
//! never persisted by the engine.

use geo::Coord;
use thiserror::Error;

use crate::{
    CandidateStore, CityInfo, ContextError, LocationError, RequestContext, RouteCost,
    ShoppingList, ShoppingListEntry, ShoppingListError, StoreCatalogError, StoreId, TravelTime,
    TripTotals,
};

/// Availability and price of one item at one candidate store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StoreOffer {
    /// Store identifier.
    pub store_id: StoreId,
    /// Store display name.
    pub store_name: String,
    /// Whether the item can be bought here.
    pub available: bool,
    /// Unit price, present only when `available` is true.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub price: Option<f64>,
}

/// Per-store availability of one requested item.
///
/// `per_store` covers every candidate store in candidate order, so a missing
/// offer is never ambiguous.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ItemAvailability {
    /// Item name as requested.
    pub item_name: String,
    /// Requested quantity.
    pub quantity: u32,
    /// One offer per candidate store.
    pub per_store: Vec<StoreOffer>,
}

/// One line of a single-store breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PricedItem {
    /// Item name as requested.
    pub name: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Unit price, zero when unavailable.
    pub price: f64,
    /// `price × quantity`.
    pub subtotal: f64,
    /// Whether the store stocks the item.
    pub available: bool,
}

/// The cheapest single store that stocks every requested item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SingleStorePlan {
    /// Store identifier.
    pub store_id: StoreId,
    /// Store display name.
    pub store_name: String,
    /// Store address.
    pub store_address: String,
    /// Sum of item subtotals.
    pub total_cost: f64,
    /// Breakdown in request order.
    pub items: Vec<PricedItem>,
    /// One-way distance from the shopper in miles.
    pub distance_from_user: f64,
    /// One-way driving time.
    pub travel_time: TravelTime,
    /// One-way fuel cost in dollars.
    pub gas_cost: f64,
}

/// An item assigned to a store in a multi-store plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AssignedItem {
    /// Item name as requested.
    pub name: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Unit price at the assigned store.
    pub price: f64,
    /// `price × quantity`.
    pub subtotal: f64,
}

/// The part of a shopping list bought at one store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StoreGroup {
    /// Store identifier.
    pub store_id: StoreId,
    /// Store display name.
    pub store_name: String,
    /// Store address.
    pub store_address: String,
    /// Items bought here, in request order.
    pub items: Vec<AssignedItem>,
    /// Sum of item subtotals.
    pub subtotal: f64,
    /// Standalone distance from the shopper in miles.
    pub distance_from_user: f64,
    /// Standalone one-way driving time.
    pub travel_time: TravelTime,
    /// Standalone one-way fuel cost in dollars.
    pub gas_cost: f64,
    /// Store position.
    #[cfg_attr(feature = "serde", serde(with = "crate::coord_serde"))]
    pub coordinate: Coord<f64>,
}

/// An item no candidate store stocks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnavailableItem {
    /// Item name as requested.
    pub name: String,
    /// Requested quantity.
    pub quantity: u32,
}

/// Greedy per-item split across stores with the round-trip route cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MultiStorePlan {
    /// Sum of store group subtotals.
    pub total_cost: f64,
    /// Store groups ordered by distance from the shopper.
    pub stores: Vec<StoreGroup>,
    /// Items nobody stocks, in request order.
    pub unavailable_items: Vec<UnavailableItem>,
    /// Round-trip route cost `user → stores… → user`.
    pub travel_info: RouteCost,
}

impl MultiStorePlan {
    /// The well-formed answer when no item can be bought anywhere.
    #[must_use]
    pub fn nothing_available(list: &ShoppingList) -> Self {
        Self {
            total_cost: 0.0,
            stores: Vec::new(),
            unavailable_items: list
                .iter()
                .map(|entry| UnavailableItem {
                    name: entry.name.clone(),
                    quantity: entry.quantity,
                })
                .collect(),
            travel_info: RouteCost::zero(),
        }
    }
}

/// Where the shopper is, as text to resolve or as a coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum LocationQuery {
    /// Free-form text such as `"Oxford, MS"`.
    Text(String),
    /// An already-known coordinate.
    Coordinates(
        #[cfg_attr(feature = "serde", serde(with = "crate::coord_serde"))] Coord<f64>,
    ),
}

/// A request to price a shopping list around a location.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use basket_core::{LocationQuery, PlanRequest, ShoppingListEntry};
///
/// let request = PlanRequest {
///     location: LocationQuery::Coordinates(Coord { x: -89.5, y: 34.4 }),
///     items: vec![
///         ShoppingListEntry::new("milk", 1)?,
///         ShoppingListEntry::new("Milk", 1)?,
///     ],
/// };
/// assert_eq!(request.shopping_list()?.len(), 1);
/// # Ok::<(), basket_core::ShoppingListError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Shopper location.
    pub location: LocationQuery,
    /// Raw entries; duplicates are combined by [`PlanRequest::shopping_list`].
    pub items: Vec<ShoppingListEntry>,
}

impl PlanRequest {
    /// Validate and combine the requested items into a non-empty list.
    pub fn shopping_list(&self) -> Result<ShoppingList, ShoppingListError> {
        let list = ShoppingList::combine(self.items.iter().cloned())?;
        list.ensure_not_empty()?;
        Ok(list)
    }
}

/// Counters describing how a plan was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Diagnostics {
    /// Number of candidate stores considered.
    pub candidates_evaluated: u64,
    /// Inventory lookups that failed and were treated as unavailable.
    pub degraded_lookups: u64,
}

/// Everything a caller needs to present a priced shopping trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlanResponse {
    /// Resolved shopper position.
    #[cfg_attr(feature = "serde", serde(with = "crate::coord_serde"))]
    pub origin: Coord<f64>,
    /// City details of the resolved position, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub city: Option<CityInfo>,
    /// The combined shopping list that was priced.
    pub items: Vec<ShoppingListEntry>,
    /// Candidate stores, nearest first.
    pub candidates: Vec<CandidateStore>,
    /// Per-item availability across candidates.
    pub availability: Vec<ItemAvailability>,
    /// Cheapest store stocking everything, if one exists.
    pub single_store: Option<SingleStorePlan>,
    /// Items, tax and fuel for the single-store plan.
    pub single_store_totals: Option<TripTotals>,
    /// Cheapest greedy split across stores.
    pub multi_store: MultiStorePlan,
    /// Items, tax and fuel for the multi-store plan.
    pub multi_store_totals: TripTotals,
    /// How the plan was produced.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Planner::plan`].
///
/// Only request-level failures appear here. A store missing an item, or an
/// inventory lookup failing, degrades inside the result instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The shopping list was empty or contained an invalid entry.
    #[error("invalid shopping list: {0}")]
    InvalidList(#[from] ShoppingListError),
    /// The shopper's location could not be resolved.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// The store catalog could not be queried.
    #[error("failed to list nearby stores: {0}")]
    StoreCatalog(#[from] StoreCatalogError),
    /// No store lies within the search radius.
    #[error("no stores found within {radius_miles} miles")]
    NoCandidateStores {
        /// Search radius that was used.
        radius_miles: f64,
    },
    /// The request was cancelled or expired before planning began.
    #[error(transparent)]
    Context(#[from] ContextError),
    /// The planner was configured with unusable parameters.
    #[error("invalid planner configuration: {reason}")]
    InvalidConfig {
        /// Description of the rejected parameter.
        reason: String,
    },
}

/// Price a shopping list around a location.
///
/// Implementations must be `Send + Sync` so independent requests can be
/// served concurrently; they hold no per-request mutable state.
pub trait Planner: Send + Sync {
    /// Produce a plan or a request-level error.
    fn plan(
        &self,
        request: &PlanRequest,
        context: &RequestContext,
    ) -> Result<PlanResponse, PlanError>;
}
