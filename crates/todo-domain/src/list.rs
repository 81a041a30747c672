use crate::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered to-do items, newest first. The order here is the order shown
/// and the order persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from snapshot entries, dropping blank titles and
    /// repeated ids. Returns the list and how many entries were dropped.
    pub fn from_items(items: Vec<Item>) -> (Self, usize) {
        let total = items.len();
        let mut seen = HashSet::new();
        let items: Vec<Item> = items
            .into_iter()
            .filter(|item| !item.has_blank_title() && seen.insert(item.id.clone()))
            .collect();
        let dropped = total - items.len();
        (Self { items }, dropped)
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

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn prepend(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, title: &str) -> Item {
        Item::new(ItemId::from(id), title)
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = TodoList::new();
        list.prepend(item("1", "Buy milk"));
        list.prepend(item("2", "Walk dog"));
        assert_eq!(list.titles(), vec!["Walk dog", "Buy milk"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = TodoList::new();
        for (id, title) in [("1", "a"), ("2", "b"), ("3", "c"), ("4", "d")] {
            list.prepend(item(id, title));
        }

        let removed = list.remove(&ItemId::from("2")).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(list.titles(), vec!["d", "c", "a"]);
        assert!(list.remove(&ItemId::from("2")).is_none());
    }

    #[test]
    fn test_from_items_drops_blank_and_duplicate_entries() {
        let raw = vec![
            item("1", "keep"),
            Item {
                id: ItemId::from("2"),
                title: "   ".to_string(),
            },
            item("1", "duplicate"),
            item("3", "also keep"),
        ];

        let (list, dropped) = TodoList::from_items(raw);
        assert_eq!(dropped, 2);
        assert_eq!(list.titles(), vec!["keep", "also keep"]);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut list = TodoList::new();
        list.prepend(item("1", "Buy milk"));
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":"1","title":"Buy milk"}]"#);
    }
}
