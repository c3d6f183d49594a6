//! Items offered for placement onto empty cells.

use std::collections::BTreeMap;

use crate::domain::{BoardError, Item};

/// What placing an inventory item does to the inventory
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InventoryPolicy {
    /// Inventory is a catalog; placing copies and keeps the entry
    #[default]
    Reusable,
    /// Placing removes the entry
    Consume,
}

#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
    policy: InventoryPolicy,
}

impl Inventory {
    pub fn new(items: Vec<Item>, policy: InventoryPolicy) -> Self {
        Self { items, policy }
    }

    /// One entry per item type found in `items`, ordered by chain then level
    pub fn catalog_of<'a>(
        items: impl IntoIterator<Item = &'a Item>,
        policy: InventoryPolicy,
    ) -> Self {
        let mut by_type = BTreeMap::new();
        for item in items {
            by_type
                .entry(item.item_type.clone())
                .or_insert_with(|| item.duplicate());
        }
        let mut items: Vec<Item> = by_type.into_values().collect();
        items.sort_by(|a, b| {
            (a.chain_id.as_str(), a.item_level).cmp(&(b.chain_id.as_str(), b.item_level))
        });
        Self { items, policy }
    }

    pub fn policy(&self) -> InventoryPolicy {
        self.policy
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh copy of the entry at `index`, ready to be placed
    pub fn copy_of(&self, index: usize) -> Result<Item, BoardError> {
        self.items
            .get(index)
            .map(Item::duplicate)
            .ok_or(BoardError::UnknownInventoryItem(index))
    }

    /// Record that the entry at `index` was placed
    pub(crate) fn mark_placed(&mut self, index: usize) {
        if self.policy == InventoryPolicy::Consume && index < self.items.len() {
            self.items.remove(index);
        }
    }
}
