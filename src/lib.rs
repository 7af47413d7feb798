//! Facade crate for the basket grocery cost engine.
//!
//! This crate re-exports the core domain types and exposes the planner and the
//! bundled data sources behind feature flags.

#![forbid(unsafe_code)]

pub use basket_core::{
    CandidateStore, CityInfo, ContextError, Diagnostics, InventoryEntry, InventoryError,
    InventoryProvider, ItemAvailability, ItemKey, LocationError, LocationQuery, LocationResolver,
    MultiStorePlan, PlanError, PlanRequest, PlanResponse, Planner, RequestContext,
    ResolvedLocation, RouteCost, ShoppingList, ShoppingListEntry, ShoppingListError,
    SingleStorePlan, Store, StoreCatalog, StoreCatalogError, StoreGroup, StoreId, TravelCostModel,
    TravelTime, TripTotals, distance_miles, gas_cost, travel_time,
};

#[cfg(feature = "planner")]
pub use basket_planner::{
    BasketPlanner, PlannerConfig, PriceTable, cheapest_combination, cheapest_single_store,
    resolve_candidates, search_availability,
};

#[cfg(feature = "data")]
pub use basket_data::{CatalogLoadError, GazetteerResolver, JsonCatalog, SyntheticCatalog};
