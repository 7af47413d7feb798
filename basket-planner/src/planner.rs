//! `BasketPlanner`: the default [`Planner`] implementation.

use basket_core::{
    Diagnostics, InventoryProvider, LocationError, LocationQuery, LocationResolver, PlanError,
    PlanRequest, PlanResponse, Planner, RequestContext, ResolvedLocation, StoreCatalog,
    TravelCostModel, TripTotals,
};
use geo::Coord;

use crate::{
    PriceTable, cheapest_combination, cheapest_single_store, resolve_candidates,
    search_availability,
};

/// Search radius used when none is configured.
pub const DEFAULT_RADIUS_MILES: f64 = 100.0;

/// Configuration for [`BasketPlanner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Stores farther than this from the shopper are ignored.
    pub radius_miles: f64,
    /// Speed and fuel assumptions for travel estimates.
    pub cost_model: TravelCostModel,
    /// Sales-tax rate applied to item costs, in `0.0..=1.0`.
    pub tax_rate: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            cost_model: TravelCostModel::default(),
            tax_rate: 0.0,
        }
    }
}

impl PlannerConfig {
    /// Replace the search radius.
    #[must_use]
    pub const fn with_radius_miles(mut self, radius_miles: f64) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    /// Replace the sales-tax rate.
    #[must_use]
    pub const fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Replace the travel cost model.
    #[must_use]
    pub const fn with_cost_model(mut self, cost_model: TravelCostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Check that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] when the radius is not a positive
    /// finite number, the tax rate lies outside `0.0..=1.0`, or the cost
    /// model is rejected by [`TravelCostModel::validate`].
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.radius_miles.is_finite() && self.radius_miles > 0.0) {
            return Err(invalid_config(format!(
                "search radius must be a positive number of miles, got {}",
                self.radius_miles
            )));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(invalid_config(format!(
                "tax rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        self.cost_model
            .validate()
            .map_err(|error| invalid_config(error.to_string()))
    }
}

const fn invalid_config(reason: String) -> PlanError {
    PlanError::InvalidConfig { reason }
}

/// Planner wiring a store catalog, an inventory provider and a location
/// resolver into the pricing pipeline.
///
/// The planner holds no per-request state, so one instance can serve many
/// requests concurrently.
///
/// # Examples
/// ```
/// use basket_core::test_support::{FixedLocationResolver, ORIGIN, three_store_catalog};
/// use basket_core::{LocationQuery, PlanRequest, Planner, RequestContext, ShoppingListEntry};
/// use basket_planner::BasketPlanner;
///
/// let catalog = three_store_catalog();
/// let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
/// let request = PlanRequest {
///     location: LocationQuery::Text("home".to_owned()),
///     items: vec![
///         ShoppingListEntry::new("milk", 1)?,
///         ShoppingListEntry::new("bread", 1)?,
///     ],
/// };
/// let response = planner.plan(&request, &RequestContext::new())?;
/// assert_eq!(response.single_store.map(|plan| plan.store_id.to_string()), Some("A".to_owned()));
/// assert_eq!(response.multi_store.stores.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BasketPlanner<C, I, L>
where
    C: StoreCatalog,
    I: InventoryProvider,
    L: LocationResolver,
{
    catalog: C,
    inventory: I,
    resolver: L,
    config: PlannerConfig,
}

impl<C, I, L> BasketPlanner<C, I, L>
where
    C: StoreCatalog,
    I: InventoryProvider,
    L: LocationResolver,
{
    /// Construct a planner using default configuration.
    pub fn new(catalog: C, inventory: I, resolver: L) -> Self {
        Self::with_config(catalog, inventory, resolver, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(catalog: C, inventory: I, resolver: L, config: PlannerConfig) -> Self {
        Self {
            catalog,
            inventory,
            resolver,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn resolve_origin(&self, query: &LocationQuery) -> Result<ResolvedLocation, LocationError> {
        match query {
            LocationQuery::Text(text) => self.resolver.resolve(text),
            LocationQuery::Coordinates(location) if is_valid_coordinate(*location) => {
                Ok(ResolvedLocation {
                    location: *location,
                    city: None,
                })
            }
            LocationQuery::Coordinates(location) => Err(LocationError::NotFound {
                query: format!("{},{}", location.y, location.x),
            }),
        }
    }
}

fn is_valid_coordinate(location: Coord<f64>) -> bool {
    (-180.0..=180.0).contains(&location.x) && (-90.0..=90.0).contains(&location.y)
}

impl<C, I, L> Planner for BasketPlanner<C, I, L>
where
    C: StoreCatalog + Send + Sync,
    I: InventoryProvider + Send + Sync,
    L: LocationResolver + Send + Sync,
{
    fn plan(
        &self,
        request: &PlanRequest,
        context: &RequestContext,
    ) -> Result<PlanResponse, PlanError> {
        context.check()?;
        self.config.validate()?;
        let list = request.shopping_list()?;
        let ResolvedLocation { location: origin, city } = self.resolve_origin(&request.location)?;

        let radius_miles = self.config.radius_miles;
        let stores = self.catalog.stores_near(origin, radius_miles)?;
        let candidates = resolve_candidates(origin, stores, radius_miles);
        if candidates.is_empty() {
            return Err(PlanError::NoCandidateStores { radius_miles });
        }

        let model = &self.config.cost_model;
        let table = PriceTable::collect(&list, &candidates, &self.inventory);
        let availability = search_availability(&table);
        let single_store = cheapest_single_store(&table, model);
        let multi_store = cheapest_combination(&table, origin, model);

        let tax_rate = self.config.tax_rate;
        let single_store_totals = single_store
            .as_ref()
            .map(|plan| TripTotals::for_single_store(plan, tax_rate));
        let multi_store_totals = TripTotals::for_multi_store(&multi_store, tax_rate);
        let diagnostics = Diagnostics {
            candidates_evaluated: u64::try_from(candidates.len()).unwrap_or(u64::MAX),
            degraded_lookups: table.degraded_lookups(),
        };

        log::info!(
            "priced {} items at {} candidate stores: single store {}, {} store(s) for the split, {} unavailable",
            list.len(),
            candidates.len(),
            single_store
                .as_ref()
                .map_or("none", |plan| plan.store_id.as_str()),
            multi_store.stores.len(),
            multi_store.unavailable_items.len(),
        );

        Ok(PlanResponse {
            origin,
            city,
            items: list.entries().to_vec(),
            candidates,
            availability,
            single_store,
            single_store_totals,
            multi_store,
            multi_store_totals,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::test_support::{
        FailingInventory, FixedLocationResolver, MemoryCatalog, ORIGIN, UnavailableCatalog,
        three_store_catalog,
    };
    use basket_core::{ContextError, ShoppingListEntry, ShoppingListError};
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> PlanRequest {
        PlanRequest {
            location: LocationQuery::Text("home".to_owned()),
            items: vec![
                ShoppingListEntry::new("milk", 1).expect("entry"),
                ShoppingListEntry::new("bread", 1).expect("entry"),
            ],
        }
    }

    #[fixture]
    fn catalog() -> MemoryCatalog {
        three_store_catalog()
    }

    #[rstest]
    fn plans_single_and_multi_store_trips(request: PlanRequest, catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let response = planner
            .plan(&request, &RequestContext::new())
            .expect("plan");

        let single = response.single_store.expect("single store");
        assert_eq!(single.store_id.as_str(), "A");
        let totals = response.single_store_totals.expect("single totals");
        assert!((totals.total - (5.5 + 0.56)).abs() < 1e-9);

        assert!((response.multi_store.total_cost - 4.5).abs() < 1e-9);
        assert!((response.multi_store_totals.total - (4.5 + 1.4)).abs() < 1e-9);
        assert_eq!(response.diagnostics.candidates_evaluated, 3);
        assert_eq!(response.diagnostics.degraded_lookups, 0);
        assert_eq!(response.availability.len(), 2);
    }

    #[rstest]
    fn cancelled_requests_fail_fast(request: PlanRequest, catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let context = RequestContext::new();
        context.cancel();
        assert_eq!(
            planner.plan(&request, &context),
            Err(PlanError::Context(ContextError::Cancelled))
        );
    }

    #[rstest]
    fn duplicate_entries_are_combined_before_pricing(catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let request = PlanRequest {
            location: LocationQuery::Coordinates(ORIGIN),
            items: vec![
                ShoppingListEntry::new("Bread", 1).expect("entry"),
                ShoppingListEntry::new("bread ", 2).expect("entry"),
            ],
        };
        let response = planner
            .plan(&request, &RequestContext::new())
            .expect("plan");
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 3);
        assert_eq!(response.multi_store.total_cost, 6.0);
    }

    #[rstest]
    fn empty_lists_are_rejected(catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let request = PlanRequest {
            location: LocationQuery::Coordinates(ORIGIN),
            items: Vec::new(),
        };
        assert_eq!(
            planner.plan(&request, &RequestContext::new()),
            Err(PlanError::InvalidList(ShoppingListError::Empty))
        );
    }

    #[rstest]
    fn unknown_locations_abort_the_request(request: PlanRequest, catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let blank = PlanRequest {
            location: LocationQuery::Text("   ".to_owned()),
            ..request
        };
        let result = planner.plan(&blank, &RequestContext::new());
        assert!(matches!(result, Err(PlanError::Location(_))));
    }

    #[rstest]
    fn out_of_range_coordinates_are_rejected(request: PlanRequest, catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(&catalog, &catalog, FixedLocationResolver(ORIGIN));
        let off_the_map = PlanRequest {
            location: LocationQuery::Coordinates(Coord { x: 0.0, y: 91.0 }),
            ..request
        };
        let result = planner.plan(&off_the_map, &RequestContext::new());
        assert!(matches!(result, Err(PlanError::Location(_))));
    }

    #[rstest]
    fn no_stores_in_range_is_a_hard_failure(request: PlanRequest, catalog: MemoryCatalog) {
        let config = PlannerConfig::default().with_radius_miles(0.5);
        let planner = BasketPlanner::with_config(
            &catalog,
            &catalog,
            FixedLocationResolver(ORIGIN),
            config,
        );
        assert_eq!(
            planner.plan(&request, &RequestContext::new()),
            Err(PlanError::NoCandidateStores { radius_miles: 0.5 })
        );
    }

    #[rstest]
    fn catalog_failures_abort_the_request(request: PlanRequest, catalog: MemoryCatalog) {
        let planner = BasketPlanner::new(UnavailableCatalog, &catalog, FixedLocationResolver(ORIGIN));
        let result = planner.plan(&request, &RequestContext::new());
        assert!(matches!(result, Err(PlanError::StoreCatalog(_))));
    }

    #[rstest]
    fn inventory_failures_degrade_and_are_counted(request: PlanRequest, catalog: MemoryCatalog) {
        let inventory = FailingInventory::new(catalog.clone(), "A");
        let planner = BasketPlanner::new(&catalog, inventory, FixedLocationResolver(ORIGIN));
        let response = planner
            .plan(&request, &RequestContext::new())
            .expect("plan");
        assert!(response.single_store.is_none());
        assert!(response.single_store_totals.is_none());
        assert_eq!(response.diagnostics.degraded_lookups, 2);
        assert!((response.multi_store.total_cost - 4.5).abs() < 1e-9);
    }

    #[rstest]
    #[case(PlannerConfig::default().with_radius_miles(0.0))]
    #[case(PlannerConfig::default().with_radius_miles(f64::NAN))]
    #[case(PlannerConfig::default().with_tax_rate(1.5))]
    #[case(PlannerConfig::default().with_tax_rate(-0.1))]
    #[case(PlannerConfig::default().with_cost_model(TravelCostModel {
        average_speed_mph: 0.0,
        ..TravelCostModel::default()
    }))]
    fn invalid_configuration_is_rejected(#[case] config: PlannerConfig) {
        assert!(matches!(
            config.validate(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[rstest]
    fn tax_is_applied_to_item_costs(request: PlanRequest, catalog: MemoryCatalog) {
        let config = PlannerConfig::default().with_tax_rate(0.1);
        let planner = BasketPlanner::with_config(
            &catalog,
            &catalog,
            FixedLocationResolver(ORIGIN),
            config,
        );
        let response = planner
            .plan(&request, &RequestContext::new())
            .expect("plan");
        assert!((response.multi_store_totals.tax_cost - 0.45).abs() < 1e-9);
    }
}
