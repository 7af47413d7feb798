//! Core domain types for the basket engine.
//!
//! The engine prices a shopping list against the stores around a shopper and
//! answers two questions: which single store stocks everything for the least
//! money, and what the cheapest split across several stores costs once the
//! extra driving is included.
//!
//! This crate holds the vocabulary shared by every other crate: shopping lists,
//! stores, inventory lookups, travel estimates, plan results and the traits
//! that data sources and planners implement. It performs no I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
#[cfg(feature = "serde")]
mod coord_serde;
pub mod geodesy;
mod inventory;
mod list;
mod location;
mod plan;
mod route;
mod store;
mod totals;
mod travel;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use context::{ContextError, RequestContext};
pub use geodesy::{EARTH_RADIUS_MILES, distance_miles};
pub use inventory::{InventoryEntry, InventoryError, InventoryProvider};
pub use list::{ItemKey, MAX_QUANTITY, ShoppingList, ShoppingListEntry, ShoppingListError};
pub use location::{CityInfo, LocationError, LocationResolver, ResolvedLocation};
pub use plan::{
    AssignedItem, Diagnostics, ItemAvailability, LocationQuery, MultiStorePlan, PlanError,
    PlanRequest, PlanResponse, Planner, PricedItem, SingleStorePlan, StoreGroup, StoreOffer,
    UnavailableItem,
};
pub use route::RouteCost;
pub use store::{CandidateStore, Store, StoreCatalog, StoreCatalogError, StoreId};
pub use totals::TripTotals;
pub use travel::{
    DEFAULT_AVERAGE_SPEED_MPH, DEFAULT_FUEL_PRICE_PER_GALLON, DEFAULT_MILES_PER_GALLON,
    ParseTravelTimeError, TravelCostModel, TravelCostModelError, TravelTime, gas_cost,
    round_cents, travel_time,
};
