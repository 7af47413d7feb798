//! Per-item availability across candidate stores.

use basket_core::{ItemAvailability, StoreOffer};

use crate::PriceTable;

/// Report, for every requested item, whether and at what price each
/// candidate store offers it.
///
/// Items keep list order and each `per_store` list keeps candidate order.
/// Cells with no usable price, including failed lookups, are unavailable.
#[must_use]
pub fn search_availability(table: &PriceTable<'_>) -> Vec<ItemAvailability> {
    table
        .list()
        .iter()
        .enumerate()
        .map(|(item, entry)| ItemAvailability {
            item_name: entry.name.clone(),
            quantity: entry.quantity,
            per_store: table
                .candidates()
                .iter()
                .zip(table.item_prices(item))
                .map(|(candidate, price)| StoreOffer {
                    store_id: candidate.store.id.clone(),
                    store_name: candidate.store.name.clone(),
                    available: price.is_some(),
                    price,
                })
                .collect(),
        })
        .collect()
}
