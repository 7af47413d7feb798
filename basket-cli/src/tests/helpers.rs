//! Test helpers for writing plan requests and store catalogs to disk.

use basket_core::test_support::coord_north_of;
use basket_core::{InventoryEntry, LocationQuery, PlanRequest, ShoppingListEntry};
use basket_data::{CatalogDocument, StoreRecord};
use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use std::collections::BTreeMap;
use tempfile::TempDir;

/// Oxford, MS as listed in the built-in gazetteer.
pub(super) const OXFORD: Coord<f64> = Coord {
    x: -89.5192,
    y: 34.3668,
};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Three stores due north of Oxford at 2, 5 and 1 miles.
///
/// Store A sells milk at 3.00 and bread at 2.50, B sells milk at 2.50 with
/// bread out of stock, and C sells bread at 2.00.
pub(super) fn three_store_document() -> CatalogDocument {
    let store = |id: &str, miles: f64| {
        let location = coord_north_of(OXFORD, miles);
        StoreRecord {
            id: id.to_owned(),
            name: format!("Store {id}"),
            address: format!("{miles} North Lamar Blvd"),
            lat: location.y,
            lng: location.x,
        }
    };
    let mut inventory: BTreeMap<String, BTreeMap<String, InventoryEntry>> = BTreeMap::new();
    let mut stock = |store: &str, item: &str, entry: InventoryEntry| {
        inventory
            .entry(store.to_owned())
            .or_default()
            .insert(item.to_owned(), entry);
    };
    stock("A", "milk", InventoryEntry::in_stock(3.0, "gallon"));
    stock("A", "bread", InventoryEntry::in_stock(2.5, "loaf"));
    stock("B", "milk", InventoryEntry::in_stock(2.5, "gallon"));
    stock("B", "bread", InventoryEntry::out_of_stock("loaf"));
    stock("C", "bread", InventoryEntry::in_stock(2.0, "loaf"));

    CatalogDocument {
        stores: vec![store("A", 2.0), store("B", 5.0), store("C", 1.0)],
        inventory,
    }
}

pub(super) fn write_catalog(path: &Utf8Path, document: &CatalogDocument) {
    let payload = serde_json::to_string_pretty(document).expect("serialise catalog");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn milk_and_bread_request(location: &str) -> PlanRequest {
    PlanRequest {
        location: LocationQuery::Text(location.to_owned()),
        items: vec![
            ShoppingListEntry::new("milk", 1).expect("entry"),
            ShoppingListEntry::new("bread", 1).expect("entry"),
        ],
    }
}

pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
