//! Concrete data sources for the basket engine.
//!
//! Responsibilities:
//! - Load store and inventory fixtures from JSON files.
//! - Resolve location text with a built-in city gazetteer.
//! - Generate reproducible synthetic catalogs for demos and tests.
//!
//! Boundaries:
//! - Do not encode pricing rules (live in `basket-planner`).
//! - Perform all file I/O up front; the traits implemented here never touch
//!   the filesystem.
//!
//! Invariants:
//! - Inventory item keys are normalised on the way in.
//! - Generation is deterministic for a given seed and origin.

#![forbid(unsafe_code)]

mod catalog;
mod gazetteer;
mod products;
mod synthetic;

pub use catalog::{CatalogDocument, CatalogLoadError, JsonCatalog, StoreRecord};
pub use gazetteer::{GazetteerEntry, GazetteerResolver};
pub use products::{PRODUCTS, ProductSpec};
pub use synthetic::{STORE_CHAINS, StoreChain, SyntheticCatalog};
