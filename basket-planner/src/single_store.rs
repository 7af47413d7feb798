//! Cheapest single store stocking the whole list.

use basket_core::{CandidateStore, PricedItem, SingleStorePlan, TravelCostModel};

use crate::PriceTable;
use crate::table::{subtotal, sum};

/// Find the cheapest candidate that offers every requested item.
///
/// Returns `None` when no store qualifies; that is an ordinary outcome. When
/// several stores tie on total cost the earliest candidate wins, so with
/// candidates sorted nearest first the closest of them is chosen.
///
/// Travel time and fuel cost describe the one-way drive to the store.
#[must_use]
pub fn cheapest_single_store(
    table: &PriceTable<'_>,
    model: &TravelCostModel,
) -> Option<SingleStorePlan> {
    let mut best: Option<(&CandidateStore, Vec<PricedItem>, f64)> = None;

    for (store, candidate) in table.candidates().iter().enumerate() {
        let Some(items) = priced_items(table, store) else {
            continue;
        };
        let total = sum(items.iter().map(|item| item.subtotal));
        if best.as_ref().is_none_or(|(_, _, best_total)| total < *best_total) {
            best = Some((candidate, items, total));
        }
    }

    let Some((candidate, items, total_cost)) = best else {
        log::debug!("no candidate store stocks every requested item");
        return None;
    };
    let distance = candidate.distance_from_user;
    Some(SingleStorePlan {
        store_id: candidate.store.id.clone(),
        store_name: candidate.store.name.clone(),
        store_address: candidate.store.address.clone(),
        total_cost,
        items,
        distance_from_user: distance,
        travel_time: model.travel_time(distance),
        gas_cost: model.fuel_cost(distance),
    })
}

/// Price every list entry at the `store`-th candidate, or `None` if any entry
/// is unavailable there.
fn priced_items(table: &PriceTable<'_>, store: usize) -> Option<Vec<PricedItem>> {
    table
        .list()
        .iter()
        .enumerate()
        .map(|(item, entry)| {
            table.price(item, store).map(|price| PricedItem {
                name: entry.name.clone(),
                quantity: entry.quantity,
                price,
                subtotal: subtotal(price, entry.quantity),
                available: true,
            })
        })
        .collect()
}
