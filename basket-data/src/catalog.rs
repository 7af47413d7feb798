//! JSON fixture catalog.

use std::collections::{BTreeMap, HashMap, HashSet};

use basket_core::{
    InventoryEntry, InventoryError, InventoryProvider, ItemKey, Store, StoreCatalog,
    StoreCatalogError, StoreId, distance_miles,
};
use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One store as written in a catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Unique store identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// On-disk shape of a catalog: stores plus `store id → item → entry`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Every store in the catalog.
    pub stores: Vec<StoreRecord>,
    /// Inventory keyed by store id, then item name.
    #[serde(default)]
    pub inventory: BTreeMap<String, BTreeMap<String, InventoryEntry>>,
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a valid catalog document.
    #[error("failed to parse catalog {path}: {source}")]
    ParseFile {
        /// Path of the catalog file.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Inline catalog JSON is not a valid catalog document.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two stores share an identifier.
    #[error("duplicate store id {id:?}")]
    DuplicateStore {
        /// Repeated identifier.
        id: String,
    },
    /// A store's coordinates are not a valid latitude/longitude pair.
    #[error("store {id:?} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        /// Offending store.
        id: String,
        /// Latitude as written.
        lat: f64,
        /// Longitude as written.
        lng: f64,
    },
    /// Inventory refers to a store that is not listed.
    #[error("inventory refers to unknown store {id:?}")]
    UnknownStore {
        /// Unlisted store identifier.
        id: String,
    },
    /// Two inventory items of one store normalise to the same key.
    #[error("store {store:?} lists item {item:?} more than once")]
    DuplicateItem {
        /// Store identifier.
        store: String,
        /// Normalised item key.
        item: String,
    },
    /// A price is negative or not a number.
    #[error("store {store:?} lists item {item:?} at invalid price {price}")]
    InvalidPrice {
        /// Store identifier.
        store: String,
        /// Item name as written.
        item: String,
        /// Rejected price.
        price: f64,
    },
}

/// In-memory store catalog and inventory, loaded from a [`CatalogDocument`].
///
/// # Examples
/// ```
/// use basket_core::{InventoryProvider, ItemKey};
/// use basket_data::JsonCatalog;
///
/// let catalog = JsonCatalog::from_json_str(
///     r#"{
///         "stores": [{"id": "s1", "name": "Corner", "address": "1 Main St", "lat": 34.37, "lng": -89.52}],
///         "inventory": {"s1": {"Milk": {"available": true, "price": 3.49, "unit": "gallon"}}}
///     }"#,
/// )?;
/// let entry = catalog.inventory(&"s1".into(), &ItemKey::new("milk")).expect("lookup");
/// assert_eq!(entry.and_then(|e| e.offered_price()), Some(3.49));
/// # Ok::<(), basket_data::CatalogLoadError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonCatalog {
    stores: Vec<Store>,
    inventory: HashMap<StoreId, HashMap<ItemKey, InventoryEntry>>,
}

impl JsonCatalog {
    /// Load and validate a catalog file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogLoadError> {
        let contents = basket_fs::read_utf8_file(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CatalogDocument =
            serde_json::from_str(&contents).map_err(|source| CatalogLoadError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_document(document)?;
        log::info!(
            "loaded {} stores from catalog {path}",
            catalog.stores.len()
        );
        Ok(catalog)
    }

    /// Parse and validate catalog JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Validate a document and index its inventory.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::new();
        let mut stores = Vec::with_capacity(document.stores.len());
        for record in document.stores {
            if !seen.insert(record.id.clone()) {
                return Err(CatalogLoadError::DuplicateStore { id: record.id });
            }
            if !valid_coordinates(record.lat, record.lng) {
                return Err(CatalogLoadError::InvalidCoordinates {
                    id: record.id,
                    lat: record.lat,
                    lng: record.lng,
                });
            }
            stores.push(Store::new(
                record.id,
                record.name,
                record.address,
                Coord {
                    x: record.lng,
                    y: record.lat,
                },
            ));
        }

        let mut inventory = HashMap::with_capacity(document.inventory.len());
        for (store, items) in document.inventory {
            if !seen.contains(&store) {
                return Err(CatalogLoadError::UnknownStore { id: store });
            }
            let mut entries = HashMap::with_capacity(items.len());
            for (item, entry) in items {
                if !(entry.price.is_finite() && entry.price >= 0.0) {
                    return Err(CatalogLoadError::InvalidPrice {
                        store,
                        item,
                        price: entry.price,
                    });
                }
                let key = ItemKey::new(&item);
                if entries.insert(key.clone(), entry).is_some() {
                    return Err(CatalogLoadError::DuplicateItem {
                        store,
                        item: key.to_string(),
                    });
                }
            }
            inventory.insert(StoreId::new(store), entries);
        }

        Ok(Self { stores, inventory })
    }

    /// Assemble a catalog from already-validated parts.
    pub(crate) fn from_parts(
        stores: Vec<Store>,
        inventory: HashMap<StoreId, HashMap<ItemKey, InventoryEntry>>,
    ) -> Self {
        Self { stores, inventory }
    }

    /// All stores regardless of distance, in document order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    #[cfg(test)]
    fn to_document(&self) -> CatalogDocument {
        let stores = self
            .stores
            .iter()
            .map(|store| StoreRecord {
                id: store.id.to_string(),
                name: store.name.clone(),
                address: store.address.clone(),
                lat: store.location.y,
                lng: store.location.x,
            })
            .collect();
        let inventory = self
            .inventory
            .iter()
            .map(|(store, items)| {
                let items = items
                    .iter()
                    .map(|(item, entry)| (item.to_string(), entry.clone()))
                    .collect();
                (store.to_string(), items)
            })
            .collect();
        CatalogDocument { stores, inventory }
    }
}

fn valid_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

impl StoreCatalog for JsonCatalog {
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

impl InventoryProvider for JsonCatalog {
    fn inventory(
        &self,
        store: &StoreId,
        item: &ItemKey,
    ) -> Result<Option<InventoryEntry>, InventoryError> {
        Ok(self
            .inventory
            .get(store)
            .and_then(|items| items.get(item))
            .cloned())
    }
}
