//! Greedy per-item split across stores.

use std::collections::BTreeMap;

use basket_core::{
    AssignedItem, MultiStorePlan, RouteCost, StoreGroup, TravelCostModel, UnavailableItem,
};
use geo::Coord;

use crate::PriceTable;
use crate::table::{subtotal, sum};

/// Buy every item at the candidate offering it cheapest and price the drive.
///
/// Each item goes to the store with the lowest offered price; ties go to the
/// earliest candidate. Items nobody offers are listed as unavailable and left
/// out of the cost. Store groups are visited nearest first, and the route
/// runs `origin → groups… → origin`.
///
/// Per-group travel time and fuel describe a standalone drive to that store.
/// `travel_info` describes the whole round trip.
///
/// # Examples
/// ```
/// use basket_core::test_support::{ORIGIN, three_store_catalog};
/// use basket_core::{ShoppingList, ShoppingListEntry, TravelCostModel};
/// use basket_planner::{PriceTable, cheapest_combination, resolve_candidates};
///
/// let catalog = three_store_catalog();
/// let candidates = resolve_candidates(ORIGIN, catalog.stores().to_vec(), 100.0);
/// let list = ShoppingList::combine([
///     ShoppingListEntry::new("milk", 1)?,
///     ShoppingListEntry::new("bread", 1)?,
/// ])?;
/// let table = PriceTable::collect(&list, &candidates, &catalog);
/// let plan = cheapest_combination(&table, ORIGIN, &TravelCostModel::default());
///
/// let order: Vec<&str> = plan.stores.iter().map(|g| g.store_id.as_str()).collect();
/// assert_eq!(order, ["C", "B"]);
/// assert!((plan.total_cost - 4.5).abs() < 1e-9);
/// # Ok::<(), basket_core::ShoppingListError>(())
/// ```
#[must_use]
pub fn cheapest_combination(
    table: &PriceTable<'_>,
    origin: Coord<f64>,
    model: &TravelCostModel,
) -> MultiStorePlan {
    let mut assignments: BTreeMap<usize, Vec<AssignedItem>> = BTreeMap::new();
    let mut unavailable_items = Vec::new();

    for (item, entry) in table.list().iter().enumerate() {
        match cheapest_offer(table, item) {
            Some((store, price)) => assignments.entry(store).or_default().push(AssignedItem {
                name: entry.name.clone(),
                quantity: entry.quantity,
                price,
                subtotal: subtotal(price, entry.quantity),
            }),
            None => {
                log::debug!("no candidate store offers {:?}", entry.name);
                unavailable_items.push(UnavailableItem {
                    name: entry.name.clone(),
                    quantity: entry.quantity,
                });
            }
        }
    }

    let mut ranked: Vec<(usize, StoreGroup)> = assignments
        .into_iter()
        .filter_map(|(store, items)| {
            let candidate = table.candidates().get(store)?;
            let distance = candidate.distance_from_user;
            Some((
                store,
                StoreGroup {
                    store_id: candidate.store.id.clone(),
                    store_name: candidate.store.name.clone(),
                    store_address: candidate.store.address.clone(),
                    subtotal: sum(items.iter().map(|item| item.subtotal)),
                    items,
                    distance_from_user: distance,
                    travel_time: model.travel_time(distance),
                    gas_cost: model.fuel_cost(distance),
                    coordinate: candidate.store.location,
                },
            ))
        })
        .collect();
    ranked.sort_by(|(lhs_rank, lhs), (rhs_rank, rhs)| {
        lhs.distance_from_user
            .total_cmp(&rhs.distance_from_user)
            .then_with(|| lhs_rank.cmp(rhs_rank))
    });
    let stores: Vec<StoreGroup> = ranked.into_iter().map(|(_, group)| group).collect();

    let stops: Vec<Coord<f64>> = stores.iter().map(|group| group.coordinate).collect();
    MultiStorePlan {
        total_cost: sum(stores.iter().map(|group| group.subtotal)),
        travel_info: RouteCost::round_trip(origin, &stops, model),
        stores,
        unavailable_items,
    }
}

/// Candidate index and price of the lowest offer for the `item`-th entry.
fn cheapest_offer(table: &PriceTable<'_>, item: usize) -> Option<(usize, f64)> {
    table
        .item_prices(item)
        .enumerate()
        .filter_map(|(store, price)| price.map(|p| (store, p)))
        .fold(None, |best, (store, price)| match best {
            Some((_, best_price)) if best_price <= price => best,
            _ => Some((store, price)),
        })
}
