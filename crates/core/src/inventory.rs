//! Fixed-capacity, slot-addressed item storage.
//!
//! A slot's index is the item's identity while it is held: items never
//! shift when neighbors are removed. Slots own their names; nothing in
//! here borrows caller text.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// One storage cell: empty, or an owned item name.
type Slot = Option<String>;

/// Fixed-capacity inventory addressed by slot index `0..capacity`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    // Always filled to capacity; emptiness lives inside the slot.
    slots: ArrayVec<Slot, { GameConfig::INVENTORY_CAPACITY }>,
}

impl Inventory {
    /// Create an inventory with every slot empty.
    pub fn new() -> Self {
        let mut slots = ArrayVec::new();
        for _ in 0..GameConfig::INVENTORY_CAPACITY {
            slots.push(None);
        }
        Self { slots }
    }

    /// Total slot count, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// True if `index` addresses a slot.
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Store `name` in the lowest-index empty slot and return that index.
    ///
    /// Fails with [`InventoryError::Full`] when every slot is occupied;
    /// nothing is stored in that case.
    pub fn add_item(&mut self, name: impl Into<String>) -> Result<usize, InventoryError> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(InventoryError::Full {
                capacity: GameConfig::INVENTORY_CAPACITY,
            })?;
        self.slots[index] = Some(name.into());
        Ok(index)
    }

    /// Index of the first slot holding `name`, if any.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_deref() == Some(name))
    }

    /// Clear a slot. Clearing an already-empty slot is not an error.
    pub fn remove_item(&mut self, index: usize) -> Result<(), InventoryError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(InventoryError::IndexOutOfRange {
                index,
                capacity: GameConfig::INVENTORY_CAPACITY,
            })?;
        *slot = None;
        Ok(())
    }

    /// Content of a slot; `None` when the slot is empty.
    pub fn get_item(&self, index: usize) -> Result<Option<&str>, InventoryError> {
        self.slots
            .get(index)
            .map(Option::as_deref)
            .ok_or(InventoryError::IndexOutOfRange {
                index,
                capacity: GameConfig::INVENTORY_CAPACITY,
            })
    }

    /// Occupied slots in ascending index order, as `(index, name)` pairs.
    pub fn list_items(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|name| (index, name)))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when addressing inventory slots.
///
/// Both variants are recoverable: the inventory is left unchanged and the
/// caller decides how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// `add_item` with every slot occupied.
    #[error("inventory is full ({capacity} slots occupied)")]
    Full { capacity: usize },

    /// A slot index outside `0..capacity`.
    #[error("slot index {index} is out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },
}
