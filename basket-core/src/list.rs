//! Shopping lists and the item keys used to look them up.
//!
//! A [`ShoppingList`] is the only list type the optimizers accept. Building
//! one validates every entry and folds case-insensitive duplicates together,
//! so downstream code never sees the same item twice.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Largest quantity a single entry may request.
pub const MAX_QUANTITY: u32 = 100;

/// Normalised inventory key for an item name: trimmed and lower-cased.
///
/// # Examples
/// ```
/// use basket_core::ItemKey;
///
/// assert_eq!(ItemKey::new("  Sour Cream ").as_str(), "sour cream");
/// assert_eq!(ItemKey::new("MILK"), ItemKey::new("milk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemKey(String);

impl ItemKey {
    /// Normalise `name` into a key.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Borrow the normalised key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One requested item and how many of it to buy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingListEntry {
    /// Display name as entered by the shopper.
    pub name: String,
    /// Units to buy, `1..=MAX_QUANTITY` for a single entry.
    pub quantity: u32,
}

/// Errors raised while validating or combining shopping list entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShoppingListError {
    /// An entry had a blank name.
    #[error("shopping list entry {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry.
        index: usize,
    },
    /// An entry asked for zero or more than [`MAX_QUANTITY`] units.
    #[error("quantity {quantity} for {name:?} must be between 1 and {MAX_QUANTITY}")]
    QuantityOutOfRange {
        /// Name of the offending entry.
        name: String,
        /// Rejected quantity.
        quantity: u32,
    },
    /// The list contained no entries at all.
    #[error("shopping list must contain at least one item")]
    Empty,
}

impl ShoppingListEntry {
    /// Validate and construct an entry.
    ///
    /// # Examples
    /// ```
    /// use basket_core::ShoppingListEntry;
    ///
    /// let entry = ShoppingListEntry::new("Milk", 2)?;
    /// assert_eq!(entry.key().as_str(), "milk");
    /// assert!(ShoppingListEntry::new("Milk", 0).is_err());
    /// # Ok::<(), basket_core::ShoppingListError>(())
    /// ```
    pub fn new(name: impl Into<String>, quantity: u32) -> Result<Self, ShoppingListError> {
        let entry = Self {
            name: name.into(),
            quantity,
        };
        entry.validate(0)?;
        Ok(entry)
    }

    /// Inventory key for this entry.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name)
    }

    fn validate(&self, index: usize) -> Result<(), ShoppingListError> {
        if self.name.trim().is_empty() {
            return Err(ShoppingListError::EmptyName { index });
        }
        if !(1..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(ShoppingListError::QuantityOutOfRange {
                name: self.name.clone(),
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// A validated shopping list with no duplicate item keys.
///
/// Entries keep the order in which each key first appeared and the display
/// name of that first occurrence.
///
/// # Examples
/// ```
/// use basket_core::{ShoppingList, ShoppingListEntry};
///
/// let list = ShoppingList::combine([
///     ShoppingListEntry::new("Milk", 1)?,
///     ShoppingListEntry::new("bread", 1)?,
///     ShoppingListEntry::new("MILK ", 2)?,
/// ])?;
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.entries()[0].name, "Milk");
/// assert_eq!(list.entries()[0].quantity, 3);
/// # Ok::<(), basket_core::ShoppingListError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(transparent)
)]
pub struct ShoppingList {
    entries: Vec<ShoppingListEntry>,
}

impl ShoppingList {
    /// Validate `entries` and merge those sharing an [`ItemKey`], summing
    /// their quantities.
    ///
    /// Each input entry must satisfy the per-entry quantity bound; merged
    /// totals may exceed it.
    pub fn combine<I>(entries: I) -> Result<Self, ShoppingListError>
    where
        I: IntoIterator<Item = ShoppingListEntry>,
    {
        let mut combined: Vec<ShoppingListEntry> = Vec::new();
        let mut positions: HashMap<ItemKey, usize> = HashMap::new();

        for (index, entry) in entries.into_iter().enumerate() {
            entry.validate(index)?;
            let key = entry.key();
            if let Some(existing) = positions.get(&key).and_then(|&pos| combined.get_mut(pos)) {
                log::debug!("merging duplicate entry {:?} into {key}", entry.name);
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            } else {
                positions.insert(key, combined.len());
                combined.push(entry);
            }
        }

        Ok(Self { entries: combined })
    }

    /// Combined entries in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[ShoppingListEntry] {
        &self.entries
    }

    /// Iterate over the combined entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingListEntry> {
        self.entries.iter()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail with [`ShoppingListError::Empty`] when the list has no items.
    pub fn ensure_not_empty(&self) -> Result<(), ShoppingListError> {
        if self.is_empty() {
            Err(ShoppingListError::Empty)
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    fn quantity_of(&self, key: &ItemKey) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| &entry.key() == key)
            .map(|entry| entry.quantity)
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingListEntry;
    type IntoIter = std::slice::Iter<'a, ShoppingListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, quantity: u32) -> ShoppingListEntry {
        ShoppingListEntry {
            name: name.to_owned(),
            quantity,
        }
    }

    #[rstest]
    #[case("milk", "milk")]
    #[case("  Milk  ", "milk")]
    #[case("Cream Cheese", "cream cheese")]
    fn item_keys_are_trimmed_and_lowercased(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(ItemKey::new(name).as_str(), expected);
    }

    #[rstest]
    fn combine_sums_case_insensitive_duplicates() {
        let list = ShoppingList::combine([
            entry("Eggs", 1),
            entry("milk", 2),
            entry("EGGS", 3),
            entry(" eggs", 4),
        ])
        .expect("valid list");
        assert_eq!(list.entries(), &[entry("Eggs", 8), entry("milk", 2)]);
    }

    #[rstest]
    fn combined_totals_may_exceed_single_entry_bound() {
        let list = ShoppingList::combine([entry("rice", 100), entry("Rice", 100)])
            .expect("valid list");
        assert_eq!(list.quantity_of(&ItemKey::new("rice")), Some(200));
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    fn rejects_out_of_range_quantities(#[case] quantity: u32) {
        let err = ShoppingList::combine([entry("milk", 1), entry("bread", quantity)])
            .expect_err("quantity should be rejected");
        assert_eq!(
            err,
            ShoppingListError::QuantityOutOfRange {
                name: "bread".to_owned(),
                quantity,
            }
        );
    }

    #[rstest]
    fn rejects_blank_names_with_position() {
        let err = ShoppingList::combine([entry("milk", 1), entry("   ", 1)])
            .expect_err("blank name should be rejected");
        assert_eq!(err, ShoppingListError::EmptyName { index: 1 });
    }

    #[rstest]
    fn empty_lists_combine_but_fail_the_non_empty_check() {
        let list = ShoppingList::combine(Vec::new()).expect("empty input is well-formed");
        assert!(list.is_empty());
        assert_eq!(list.ensure_not_empty(), Err(ShoppingListError::Empty));
    }
}
