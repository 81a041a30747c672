use crate::item::ItemId;

/// Which item, if any, the input line is currently editing.
/// Transient: never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(ItemId),
}

impl EditSession {
    pub fn begin(&mut self, id: ItemId) {
        *self = Self::Editing(id);
    }

    /// Return to idle, yielding the id that was being edited.
    pub fn finish(&mut self) -> Option<ItemId> {
        match std::mem::take(self) {
            Self::Editing(id) => Some(id),
            Self::Idle => None,
        }
    }

    pub fn target(&self) -> Option<&ItemId> {
        match self {
            Self::Editing(id) => Some(id),
            Self::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn is_editing_item(&self, id: &ItemId) -> bool {
        self.target() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_replaces_previous_target() {
        let mut session = EditSession::default();
        assert!(!session.is_editing());

        session.begin(ItemId::from("1"));
        session.begin(ItemId::from("2"));
        assert!(session.is_editing_item(&ItemId::from("2")));
        assert!(!session.is_editing_item(&ItemId::from("1")));
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let mut session = EditSession::Editing(ItemId::from("7"));
        assert_eq!(session.finish(), Some(ItemId::from("7")));
        assert_eq!(session, EditSession::Idle);
        assert_eq!(session.finish(), None);
    }
}
