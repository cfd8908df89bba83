use serde::Serialize;

use super::item::{FilterMode, Item, ItemId};

/// The authoritative, insertion-ordered list plus the active filter.
///
/// Only the functions in `ops::list_ops` mutate `items`; everything that
/// reads the visible subset goes through [`TodoList::project`].
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    pub items: Vec<Item>,
    pub filter: FilterMode,
    /// Next id to hand out. Ids are never reused, even after removal.
    pub(crate) next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        TodoList::default()
    }

    pub fn with_filter(filter: FilterMode) -> Self {
        TodoList {
            filter,
            ..TodoList::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Derive the visible projection for the current filter.
    pub fn project(&self) -> Projection {
        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item))
            .cloned()
            .collect();
        Projection::new(items, self.filter)
    }
}

/// The filtered view handed to a presentation sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub items: Vec<Item>,
    /// Incomplete items within `items`, not across the whole list
    pub remaining: usize,
    #[serde(skip)]
    pub filter: FilterMode,
}

impl Projection {
    pub fn new(items: Vec<Item>, filter: FilterMode) -> Self {
        let remaining = items.iter().filter(|item| !item.completed).count();
        Projection {
            items,
            remaining,
            filter,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_left_label(&self) -> String {
        format!("{} items left", self.remaining)
    }

    /// Id of the item at a visible position
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(|item| item.id)
    }
}
