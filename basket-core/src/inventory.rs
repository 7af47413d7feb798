//! Per-store stock and pricing lookups.
//!
//! The engine treats inventory as a pure lookup table keyed by
//! `(StoreId, ItemKey)`. Providers may be backed by fixtures, generated data
//! or a remote service; failures are reported per cell so callers can degrade
//! a single lookup without abandoning the whole query.

use thiserror::Error;

use crate::{ItemKey, StoreId};

/// Stock level and unit price of one item at one store.
///
/// An unavailable entry never contributes a price, whatever `price` holds.
///
/// # Examples
/// ```
/// use basket_core::InventoryEntry;
///
/// assert_eq!(InventoryEntry::in_stock(2.49, "gallon").offered_price(), Some(2.49));
/// assert_eq!(InventoryEntry::out_of_stock("gallon").offered_price(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryEntry {
    /// Whether the store currently stocks the item.
    pub available: bool,
    /// Unit price in dollars. Meaningless when `available` is false.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: f64,
    /// Unit of sale, e.g. `"gallon"` or `"lb"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unit: String,
}

impl InventoryEntry {
    /// An available item at `price` per `unit`.
    pub fn in_stock(price: f64, unit: impl Into<String>) -> Self {
        Self {
            available: true,
            price,
            unit: unit.into(),
        }
    }

    /// An item the store does not currently stock.
    pub fn out_of_stock(unit: impl Into<String>) -> Self {
        Self {
            available: false,
            price: 0.0,
            unit: unit.into(),
        }
    }

    /// The price a shopper would pay, if the item can be bought here.
    ///
    /// Returns `None` when the item is unavailable or its price is negative
    /// or non-finite.
    #[must_use]
    pub fn offered_price(&self) -> Option<f64> {
        (self.available && self.price.is_finite() && self.price >= 0.0).then_some(self.price)
    }
}

/// Errors raised by an [`InventoryProvider`] for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// The provider could not answer for this store and item.
    #[error("inventory lookup for {item} at store {store} failed: {reason}")]
    Lookup {
        /// Store being queried.
        store: StoreId,
        /// Item being queried.
        item: ItemKey,
        /// Human-readable cause.
        reason: String,
    },
}

/// Look up stock and price for an item at a store.
///
/// `Ok(None)` means the provider has no record, which callers treat as
/// unavailable.
///
/// # Examples
/// ```
/// use basket_core::{InventoryEntry, InventoryError, InventoryProvider, ItemKey, StoreId};
///
/// struct EverythingCostsOne;
///
/// impl InventoryProvider for EverythingCostsOne {
///     fn inventory(
///         &self,
///         _store: &StoreId,
///         _item: &ItemKey,
///     ) -> Result<Option<InventoryEntry>, InventoryError> {
///         Ok(Some(InventoryEntry::in_stock(1.0, "each")))
///     }
/// }
///
/// let entry = EverythingCostsOne.inventory(&"s1".into(), &ItemKey::new("milk"))?;
/// assert_eq!(entry.and_then(|e| e.offered_price()), Some(1.0));
/// # Ok::<(), InventoryError>(())
/// ```
pub trait InventoryProvider {
    /// Return the inventory record for `item` at `store`, if any.
    fn inventory(
        &self,
        store: &StoreId,
        item: &ItemKey,
    ) -> Result<Option<InventoryEntry>, InventoryError>;
}

impl<T: InventoryProvider + ?Sized> InventoryProvider for &T {
    fn inventory(
        &self,
        store: &StoreId,
        item: &ItemKey,
    ) -> Result<Option<InventoryEntry>, InventoryError> {
        (**self).inventory(store, item)
    }
}
