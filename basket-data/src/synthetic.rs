//! Seeded synthetic store catalogs.
//!
//! Seven familiar grocery chains are scattered around an origin and stocked
//! from [`PRODUCTS`]. Each chain applies its own price multiplier, so some
//! stores are reliably cheaper than others while individual prices still
//! vary. The same seed and origin always yield the same catalog.

use std::collections::HashMap;

use basket_core::{CityInfo, InventoryEntry, ItemKey, Store, StoreId, round_cents};
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{JsonCatalog, PRODUCTS, ProductSpec};

/// Largest latitude or longitude offset of a generated store, in degrees.
const MAX_OFFSET_DEGREES: f64 = 0.075;

/// Chance that a store stocks any given product.
const AVAILABILITY: f64 = 0.9;

/// Per-store random price variation, as a factor range.
const VARIATION: std::ops::Range<f64> = 0.97..1.03;

/// A store chain the generator places near the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreChain {
    /// Store identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Street part of the address.
    pub street: &'static str,
    /// Factor applied to every base price at this store.
    pub price_multiplier: f64,
}

/// The chains every synthetic catalog contains, in store order.
pub const STORE_CHAINS: [StoreChain; 7] = [
    StoreChain {
        id: "store1",
        name: "Whole Foods Market",
        street: "123 Main St",
        price_multiplier: 1.10,
    },
    StoreChain {
        id: "store2",
        name: "Trader Joe's",
        street: "456 Oak Ave",
        price_multiplier: 0.95,
    },
    StoreChain {
        id: "store3",
        name: "Safeway",
        street: "789 Pine St",
        price_multiplier: 1.00,
    },
    StoreChain {
        id: "store4",
        name: "Target",
        street: "101 Market St",
        price_multiplier: 0.98,
    },
    StoreChain {
        id: "store5",
        name: "Costco Wholesale",
        street: "202 Mission St",
        price_multiplier: 0.90,
    },
    StoreChain {
        id: "store6",
        name: "Walmart Supercenter",
        street: "303 Broadway",
        price_multiplier: 0.92,
    },
    StoreChain {
        id: "store7",
        name: "Kroger",
        street: "404 Valencia St",
        price_multiplier: 1.05,
    },
];

/// Builder for a reproducible synthetic [`JsonCatalog`].
///
/// # Examples
/// ```
/// use basket_data::SyntheticCatalog;
/// use geo::Coord;
///
/// let origin = Coord { x: -89.5192, y: 34.3668 };
/// let first = SyntheticCatalog::new(7).generate(origin);
/// let second = SyntheticCatalog::new(7).generate(origin);
/// assert_eq!(first, second);
/// assert_eq!(first.stores().len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticCatalog {
    seed: u64,
    city: Option<CityInfo>,
}

impl SyntheticCatalog {
    /// A generator seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed, city: None }
    }

    /// Write full postal addresses for `city` instead of bare streets.
    #[must_use]
    pub fn with_city(mut self, city: CityInfo) -> Self {
        self.city = Some(city);
        self
    }

    /// Generate stores around `origin` and stock them.
    #[must_use]
    pub fn generate(&self, origin: Coord<f64>) -> JsonCatalog {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let stores: Vec<Store> = STORE_CHAINS
            .iter()
            .map(|chain| self.place(&mut rng, chain, origin))
            .collect();

        let inventory: HashMap<StoreId, HashMap<ItemKey, InventoryEntry>> = STORE_CHAINS
            .iter()
            .map(|chain| {
                let entries = PRODUCTS
                    .iter()
                    .map(|product| {
                        (
                            ItemKey::new(product.key),
                            stock(&mut rng, product, chain.price_multiplier),
                        )
                    })
                    .collect();
                (StoreId::new(chain.id), entries)
            })
            .collect();

        log::debug!(
            "generated {} synthetic stores with seed {}",
            stores.len(),
            self.seed
        );
        JsonCatalog::from_parts(stores, inventory)
    }

    fn place(&self, rng: &mut ChaCha8Rng, chain: &StoreChain, origin: Coord<f64>) -> Store {
        let lat = origin.y + rng.gen_range(-MAX_OFFSET_DEGREES..MAX_OFFSET_DEGREES);
        let lng = origin.x + rng.gen_range(-MAX_OFFSET_DEGREES..MAX_OFFSET_DEGREES);
        let extension: u32 = rng.gen_range(0..10_000);
        let address = match &self.city {
            Some(city) => format!(
                "{}, {}, {} {}-{extension:04}",
                chain.street, city.city, city.state, city.zip
            ),
            None => chain.street.to_owned(),
        };
        Store::new(chain.id, chain.name, address, Coord { x: lng, y: lat })
    }
}

fn stock(rng: &mut ChaCha8Rng, product: &ProductSpec, multiplier: f64) -> InventoryEntry {
    if !rng.gen_bool(AVAILABILITY) {
        return InventoryEntry::out_of_stock(product.unit);
    }
    let base = rng.gen_range(product.min_price..product.max_price);
    let price = base * multiplier * rng.gen_range(VARIATION);
    InventoryEntry::in_stock(
        round_cents(price.clamp(product.min_price, product.max_price)),
        product.unit,
    )
}
