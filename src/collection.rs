//! Todo Collection
//!
//! Ordered, in-memory list of items with the three mutations the UI uses:
//! add, toggle and remove. All of them are total: blank text and unknown
//! ids leave the collection untouched.

use crate::models::{Item, ItemId};

/// Items in insertion order plus the id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCollection {
    items: Vec<Item>,
    next_id: u32,
}

impl Default for TodoCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoCollection {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new item built from `raw_text`.
    ///
    /// The text is trimmed first; blank input is ignored and yields `None`.
    pub fn add(&mut self, raw_text: &str) -> Option<ItemId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, text.to_string()));
        Some(id)
    }

    /// Flip `completed` on the matching item. Returns `false` if no item matched.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item, keeping the order of the rest
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}
