//! Materialised item × store price lookups.

use basket_core::{
    CandidateStore, InventoryEntry, InventoryError, InventoryProvider, ShoppingList,
    ShoppingListEntry, StoreId,
};

/// Offered unit prices for every requested item at every candidate store.
///
/// The table is collected once per request so the availability search and
/// both optimizers see the same answers, and so the inventory provider is
/// asked at most once per cell. A cell is `None` when the store does not
/// offer the item, for whatever reason.
///
/// # Examples
/// ```
/// use basket_core::test_support::{ORIGIN, three_store_catalog};
/// use basket_core::{ShoppingList, ShoppingListEntry};
/// use basket_planner::{PriceTable, resolve_candidates};
///
/// let catalog = three_store_catalog();
/// let candidates = resolve_candidates(ORIGIN, catalog.stores().to_vec(), 100.0);
/// let list = ShoppingList::combine([ShoppingListEntry::new("milk", 1)?])?;
/// let table = PriceTable::collect(&list, &candidates, &catalog);
/// // Candidates are C, A, B; C has no milk.
/// assert_eq!(table.price(0, 0), None);
/// assert_eq!(table.price(0, 1), Some(3.0));
/// # Ok::<(), basket_core::ShoppingListError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable<'a> {
    list: &'a ShoppingList,
    candidates: &'a [CandidateStore],
    prices: Vec<Vec<Option<f64>>>,
    degraded_lookups: u64,
}

impl<'a> PriceTable<'a> {
    /// Look up every item in `list` at every store in `candidates`.
    ///
    /// Lookup failures are logged and recorded as unavailable; they never
    /// abort the collection.
    #[must_use]
    pub fn collect<I>(list: &'a ShoppingList, candidates: &'a [CandidateStore], inventory: &I) -> Self
    where
        I: InventoryProvider + ?Sized,
    {
        let mut degraded_lookups = 0_u64;
        let prices = list
            .iter()
            .map(|entry| {
                let key = entry.key();
                candidates
                    .iter()
                    .map(|candidate| match inventory.inventory(&candidate.store.id, &key) {
                        Ok(record) => offered_price(&candidate.store.id, entry, record.as_ref()),
                        Err(error) => {
                            degraded_lookups = degraded_lookups.saturating_add(1);
                            log_degraded(&error);
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            list,
            candidates,
            prices,
            degraded_lookups,
        }
    }

    /// The shopping list the table was collected for.
    #[must_use]
    pub const fn list(&self) -> &'a ShoppingList {
        self.list
    }

    /// The candidate stores the table was collected for, in candidate order.
    #[must_use]
    pub const fn candidates(&self) -> &'a [CandidateStore] {
        self.candidates
    }

    /// Offered unit price of the `item`-th list entry at the `store`-th
    /// candidate.
    #[must_use]
    pub fn price(&self, item: usize, store: usize) -> Option<f64> {
        self.prices
            .get(item)
            .and_then(|row| row.get(store))
            .copied()
            .flatten()
    }

    /// Offered prices of the `item`-th list entry across all candidates.
    pub fn item_prices(&self, item: usize) -> impl Iterator<Item = Option<f64>> + '_ {
        self.prices.get(item).into_iter().flatten().copied()
    }

    /// Number of lookups that failed and were treated as unavailable.
    #[must_use]
    pub const fn degraded_lookups(&self) -> u64 {
        self.degraded_lookups
    }
}

fn offered_price(
    store: &StoreId,
    entry: &ShoppingListEntry,
    lookup: Option<&InventoryEntry>,
) -> Option<f64> {
    let Some(record) = lookup else {
        log::debug!("store {store} has no inventory record for {:?}", entry.name);
        return None;
    };
    let price = record.offered_price();
    if record.available && price.is_none() {
        log::warn!(
            "store {store} lists {:?} with unusable price {}; treating as unavailable",
            entry.name,
            record.price
        );
    }
    price
}

fn log_degraded(error: &InventoryError) {
    log::warn!("{error}; treating as unavailable");
}

/// Line cost of `quantity` units at `price`.
#[expect(
    clippy::float_arithmetic,
    reason = "line subtotals multiply unit price by quantity"
)]
pub(crate) fn subtotal(price: f64, quantity: u32) -> f64 {
    price * f64::from(quantity)
}

/// Sum of `amounts`, starting from positive zero.
#[expect(clippy::float_arithmetic, reason = "order totals add line subtotals")]
pub(crate) fn sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    amounts.into_iter().fold(0.0, |total, amount| total + amount)
}
