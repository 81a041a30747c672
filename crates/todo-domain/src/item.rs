use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque item identifier. Generated ids are Unix milliseconds rendered
/// as decimal strings, but any string read back from a snapshot is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
}

impl Item {
    /// Build an item, trimming the title. Callers reject blank titles first.
    pub fn new(id: ItemId, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
        }
    }

    pub fn update_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Time-based id source that never hands out the same id twice, even
/// when the clock stalls or steps backwards.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
    // Suffix for ids issued once `last` has reached i64::MAX
    overflow: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ItemId {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> ItemId {
        match self.last.checked_add(1) {
            Some(next) => {
                self.last = now_millis.max(next);
                ItemId(self.last.to_string())
            }
            None => {
                self.overflow += 1;
                ItemId(format!("{}-{}", self.last, self.overflow))
            }
        }
    }

    /// Record an existing id so later ids sort after it.
    pub fn observe(&mut self, id: &ItemId) {
        if let Some(millis) = id.as_millis() {
            self.last = self.last.max(millis);
        }
    }
}
