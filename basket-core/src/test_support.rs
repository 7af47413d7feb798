//! In-memory catalogs and resolvers used by unit and behaviour tests.

use std::collections::HashMap;

use geo::Coord;

use crate::geodesy::{EARTH_RADIUS_MILES, distance_miles};
use crate::{
    InventoryEntry, InventoryError, InventoryProvider, ItemKey, LocationError, LocationResolver,
    ResolvedLocation, Store, StoreCatalog, StoreCatalogError, StoreId,
};

/// The coordinate `miles` due north of `origin`.
///
/// Useful for building stores at an exact great-circle distance.
#[must_use]
pub fn coord_north_of(origin: Coord<f64>, miles: f64) -> Coord<f64> {
    Coord {
        x: origin.x,
        y: origin.y + (miles / EARTH_RADIUS_MILES).to_degrees(),
    }
}

/// In-memory `StoreCatalog` and `InventoryProvider`.
///
/// The catalog performs a linear scan and is intended only for small datasets.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    stores: Vec<Store>,
    inventory: HashMap<(StoreId, ItemKey), InventoryEntry>,
}

impl MemoryCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a store.
    #[must_use]
    pub fn with_store(mut self, store: Store) -> Self {
        self.stores.push(store);
        self
    }

    /// Stock `item` at `store` for `price`.
    #[must_use]
    pub fn with_price(self, store: &str, item: &str, price: f64) -> Self {
        self.with_entry(store, item, InventoryEntry::in_stock(price, "each"))
    }

    /// Record `item` as out of stock at `store`.
    #[must_use]
    pub fn with_out_of_stock(self, store: &str, item: &str) -> Self {
        self.with_entry(store, item, InventoryEntry::out_of_stock("each"))
    }

    /// Record an arbitrary inventory entry.
    #[must_use]
    pub fn with_entry(mut self, store: &str, item: &str, entry: InventoryEntry) -> Self {
        self.inventory
            .insert((StoreId::from(store), ItemKey::new(item)), entry);
        self
    }

    /// All stores regardless of distance.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }
}

impl StoreCatalog for MemoryCatalog {
    fn stores_near(
        &self,
        origin: Coord<f64>,
        radius_miles: f64,
    ) -> Result<Vec<Store>, StoreCatalogError> {
        Ok(self
            .stores
            .iter()
            .filter(|store| distance_miles(origin, store.location) <= radius_miles)
            .cloned()
            .collect())
    }
}

impl InventoryProvider for MemoryCatalog {
    fn inventory(
        &self,
        store: &StoreId,
        item: &ItemKey,
    ) -> Result<Option<InventoryEntry>, InventoryError> {
        Ok(self.inventory.get(&(store.clone(), item.clone())).cloned())
    }
}

/// `StoreCatalog` that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCatalog;

impl StoreCatalog for UnavailableCatalog {
    fn stores_near(
        &self,
        _origin: Coord<f64>,
        _radius_miles: f64,
    ) -> Result<Vec<Store>, StoreCatalogError> {
        Err(StoreCatalogError::Unavailable {
            reason: "catalog offline".to_owned(),
        })
    }
}

/// `InventoryProvider` that fails for one store and delegates the rest.
#[derive(Debug, Clone)]
pub struct FailingInventory<I> {
    inner: I,
    failing_store: StoreId,
}

impl<I> FailingInventory<I> {
    /// Fail every lookup at `failing_store`.
    pub fn new(inner: I, failing_store: impl Into<StoreId>) -> Self {
        Self {
            inner,
            failing_store: failing_store.into(),
        }
    }
}

impl<I: InventoryProvider> InventoryProvider for FailingInventory<I> {
    fn inventory(
        &self,
        store: &StoreId,
        item: &ItemKey,
    ) -> Result<Option<InventoryEntry>, InventoryError> {
        if *store == self.failing_store {
            return Err(InventoryError::Lookup {
                store: store.clone(),
                item: item.clone(),
                reason: "inventory service timed out".to_owned(),
            });
        }
        self.inner.inventory(store, item)
    }
}

/// `LocationResolver` that maps every query to one coordinate.
///
/// Blank queries still fail so callers exercise the error path.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationResolver(pub Coord<f64>);

impl LocationResolver for FixedLocationResolver {
    fn resolve(&self, query: &str) -> Result<ResolvedLocation, LocationError> {
        if query.trim().is_empty() {
            return Err(LocationError::NotFound {
                query: query.to_owned(),
            });
        }
        Ok(ResolvedLocation {
            location: self.0,
            city: None,
        })
    }
}

/// Shopper position used by [`three_store_catalog`].
pub const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

/// Three stores north of [`ORIGIN`]:
///
/// | store | distance | milk | bread |
/// |-------|----------|------|-------|
/// | A     | 2 mi     | 3.00 | 2.50  |
/// | B     | 5 mi     | 2.50 | –     |
/// | C     | 1 mi     | –    | 2.00  |
#[must_use]
pub fn three_store_catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with_store(Store::new("A", "Store A", "2 North Rd", coord_north_of(ORIGIN, 2.0)))
        .with_store(Store::new("B", "Store B", "5 North Rd", coord_north_of(ORIGIN, 5.0)))
        .with_store(Store::new("C", "Store C", "1 North Rd", coord_north_of(ORIGIN, 1.0)))
        .with_price("A", "milk", 3.00)
        .with_price("A", "bread", 2.50)
        .with_price("B", "milk", 2.50)
        .with_out_of_stock("B", "bread")
        .with_price("C", "bread", 2.00)
}
