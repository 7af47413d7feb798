//! Stores and the catalog that lists them.
//!
//! The [`StoreCatalog`] trait is the engine's read-only view of where stores
//! are. A [`CandidateStore`] pairs a store with its distance from the shopper,
//! which is derived per query and never stored authoritatively.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Unique store identifier.
///
/// Identifiers order lexicographically; the candidate resolver relies on this
/// to break distance ties deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct StoreId(String);

impl StoreId {
    /// Wrap an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StoreId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A physical store.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use basket_core::Store;
///
/// let store = Store::new("store1", "Corner Market", "1 Main St", Coord { x: -89.5, y: 34.4 });
/// assert_eq!(store.id.as_str(), "store1");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Store {
    /// Unique identifier.
    pub id: StoreId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Position with `x = longitude`, `y = latitude`.
    #[cfg_attr(feature = "serde", serde(with = "crate::coord_serde"))]
    pub location: Coord<f64>,
}

impl Store {
    /// Construct a store.
    pub fn new(
        id: impl Into<StoreId>,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            location,
        }
    }
}

/// A store eligible for optimisation together with its distance from the
/// shopper in miles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct CandidateStore {
    /// The store itself.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub store: Store,
    /// Great-circle distance from the shopper, in miles.
    pub distance_from_user: f64,
}

/// Errors raised by a [`StoreCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreCatalogError {
    /// The catalog could not be queried at all.
    #[error("store catalog unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
}

/// Read-only access to stores near a coordinate.
///
/// Implementations may over-approximate the radius; the candidate resolver
/// re-filters by exact great-circle distance. Results need not be sorted.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use basket_core::{Store, StoreCatalog, StoreCatalogError};
///
/// struct OneStore(Store);
///
/// impl StoreCatalog for OneStore {
///     fn stores_near(
///         &self,
///         _origin: Coord<f64>,
///         _radius_miles: f64,
///     ) -> Result<Vec<Store>, StoreCatalogError> {
///         Ok(vec![self.0.clone()])
///     }
/// }
///
/// let store = Store::new("s", "Shop", "1 Main St", Coord { x: 0.0, y: 0.0 });
/// let catalog = OneStore(store.clone());
/// assert_eq!(catalog.stores_near(Coord { x: 0.0, y: 0.0 }, 5.0)?, vec![store]);
/// # Ok::<(), StoreCatalogError>(())
/// ```
pub trait StoreCatalog {
    /// Return stores within roughly `radius_miles` of `origin`.
    fn stores_near(
        &self,
        origin: Coord<f64>,
        radius_miles: f64,
    ) -> Result<Vec<Store>, StoreCatalogError>;
}

impl<T: StoreCatalog + ?Sized> StoreCatalog for &T {
    fn stores_near(
        &self,
        origin: Coord<f64>,
        radius_miles: f64,
    ) -> Result<Vec<Store>, StoreCatalogError> {
        (**self).stores_near(origin, radius_miles)
    }
}
