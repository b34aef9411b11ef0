/*!
 * Slot Table
 * Fixed-capacity registry with tagged slot occupancy
 */

use super::types::{RegistryError, RegistryResult};

/// Occupancy state of one registry slot
///
/// Absence is a type-level fact, not a sentinel value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<T> {
    #[default]
    Empty,
    Occupied(T),
}

impl<T> Slot<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn as_occupied(&self) -> Option<&T> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(value) => Some(value),
        }
    }
}

/// Fixed-capacity slot collection with first-empty-found reuse
///
/// A passive ledger: the table never consults the allocator, the surrounding
/// application updates it in lock-step with allocate/release calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable<T> {
    slots: Vec<Slot<T>>,
}

impl<T> SlotTable<T> {
    /// Create a table with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || Slot::Empty);
        Self { slots }
    }

    /// First-index linear scan for an empty slot
    ///
    /// `None` means every slot is occupied.
    pub fn find_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }

    /// Overwrite slot `index` with an occupied entry
    ///
    /// The caller located the slot via `find_free_slot`, so occupancy is not
    /// re-checked; in-range `index` is the caller's contract.
    pub fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index < self.slots.len());
        self.slots[index] = Slot::Occupied(value);
    }

    /// Find a free slot and fill it, returning the slot index
    pub fn insert(&mut self, value: T) -> RegistryResult<usize> {
        let index = self.find_free_slot().ok_or(RegistryError::TableFull {
            capacity: self.slots.len(),
        })?;
        self.insert_at(index, value);
        Ok(index)
    }

    /// Reset slot `index` to empty (idempotent)
    pub fn delete_at(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Empty;
        }
    }

    /// Entry at `index`, if the slot is occupied
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Slot::as_occupied)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_occupied().map(|value| (index, value)))
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.find_free_slot().is_none()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
