use crate::serialization::JsonSerializer;
use crate::traits::Serializer;
use todo_core::{TodoError, TodoResult};
use todo_domain::{Item, TodoList};

/// Persisted form of the whole list: a JSON array of `{id, title}`
/// objects in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<Item>,
}

impl ListSnapshot {
    pub fn from_list(list: &TodoList) -> Self {
        Self {
            items: list.items().to_vec(),
        }
    }

    pub fn to_payload(&self) -> TodoResult<String> {
        let bytes = Serializer::<Vec<Item>>::serialize(&JsonSerializer, &self.items)?;
        String::from_utf8(bytes).map_err(|e| TodoError::Serialization(e.to_string()))
    }

    pub fn from_payload(payload: &str) -> TodoResult<Self> {
        let items = Serializer::<Vec<Item>>::deserialize(&JsonSerializer, payload.as_bytes())?;
        Ok(Self { items })
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_domain::ItemId;

    #[test]
    fn test_payload_matches_wire_format() {
        let snapshot = ListSnapshot {
            items: vec![
                Item::new(ItemId::from("2"), "Walk dog"),
                Item::new(ItemId::from("1"), "Buy milk"),
            ],
        };

        assert_eq!(
            snapshot.to_payload().unwrap(),
            r#"[{"id":"2","title":"Walk dog"},{"id":"1","title":"Buy milk"}]"#
        );
    }

    #[test]
    fn test_reads_payload_written_elsewhere() {
        let payload = r#"[
            {"id": "1712345678901", "title": "Call mom"},
            {"id": "1712345678000", "title": "Pay rent", "done": false}
        ]"#;

        let snapshot = ListSnapshot::from_payload(payload).unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.items[0].id, ItemId::from("1712345678901"));
        assert_eq!(snapshot.items[1].title, "Pay rent");
    }

    #[test]
    fn test_rejects_non_array_payload() {
        assert!(ListSnapshot::from_payload(r#"{"id":"1","title":"x"}"#).is_err());
        assert!(ListSnapshot::from_payload("").is_err());
    }
}
