use crate::save_worker::SaveWorker;
use std::sync::Arc;
use todo_core::{InputState, TodoError, TodoResult};
use todo_domain::commands::{AddItem, Command, CommandContext, DeleteItem, UpdateItemTitle};
use todo_domain::{EditSession, IdGenerator, Item, ItemId, TodoList};
use todo_persistence::{KeyValueStore, ListSnapshot};
use tokio::sync::mpsc;

/// Result of loading the persisted snapshot at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// The snapshot was read and the list now holds this many items
    Restored(usize),
    /// Nothing has been persisted under the key yet
    NoSnapshot,
    /// The snapshot could not be read or parsed; the list was left as it was
    Discarded,
}

/// Result of submitting the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(ItemId),
    Updated(ItemId),
    /// Nothing changed and the input was kept
    Rejected,
}

/// Owns the in-memory list, the input line and the edit session, and
/// mirrors the list to the store after every successful mutation.
///
/// # Save Behavior
///
/// Writes are fire-and-forget: each mutation serializes the whole list
/// and queues it for the [`SaveWorker`], which applies writes in the
/// order they were queued. The in-memory list stays authoritative when a
/// write fails; failures are only logged.
///
/// # Example
/// ```ignore
/// let (mut controller, worker) = ListStoreController::new(store, "@todos_key");
/// let saves = worker.spawn();
/// controller.hydrate().await;
/// controller.add_or_update("Buy milk");
/// controller.close_save_channel();
/// saves.await?;
/// ```
pub struct ListStoreController {
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    list: TodoList,
    input: InputState,
    session: EditSession,
    ids: IdGenerator,
    save_tx: Option<mpsc::UnboundedSender<String>>,
}

impl ListStoreController {
    /// Create an empty controller and the worker that will carry its writes.
    /// The caller decides where the worker runs, usually via [`SaveWorker::spawn`].
    pub fn new(store: Arc<dyn KeyValueStore>, storage_key: impl Into<String>) -> (Self, SaveWorker) {
        let storage_key = storage_key.into();
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = SaveWorker::new(Arc::clone(&store), storage_key.clone(), rx);

        let controller = Self {
            store,
            storage_key,
            list: TodoList::new(),
            input: InputState::new(),
            session: EditSession::Idle,
            ids: IdGenerator::new(),
            save_tx: Some(tx),
        };

        (controller, worker)
    }

    /// Replace the list with the persisted snapshot, if there is a usable one.
    /// Read and parse failures are logged, never returned.
    pub async fn hydrate(&mut self) -> Hydration {
        let payload = match self.store.get(&self.storage_key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                tracing::info!("No snapshot under '{}', starting empty", self.storage_key);
                return Hydration::NoSnapshot;
            }
            Err(e) => {
                tracing::error!("Failed to load todos: {}", e);
                return Hydration::Discarded;
            }
        };

        let snapshot = match ListSnapshot::from_payload(&payload) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                let e = TodoError::store_read(&self.storage_key, e);
                tracing::error!("Failed to load todos: {}", e);
                return Hydration::Discarded;
            }
        };

        let (list, dropped) = TodoList::from_items(snapshot.into_items());
        if dropped > 0 {
            tracing::warn!(
                "Dropped {} snapshot entries with blank titles or repeated ids",
                dropped
            );
        }
        for item in list.items() {
            self.ids.observe(&item.id);
        }
        self.list = list;
        self.session = EditSession::Idle;

        tracing::info!("Loaded {} todos", self.list.len());
        Hydration::Restored(self.list.len())
    }

    /// Serialize the current list and queue it for writing. Does not wait.
    pub fn persist(&self) {
        let Some(ref tx) = self.save_tx else {
            tracing::debug!("No save channel available - skipping save");
            return;
        };

        let payload = match ListSnapshot::from_list(&self.list).to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                let e = TodoError::store_write(&self.storage_key, e);
                tracing::error!("Failed to save todos: {}", e);
                return;
            }
        };

        match tx.send(payload) {
            Ok(()) => tracing::debug!("Snapshot queued ({} items)", self.list.len()),
            Err(e) => tracing::error!("Failed to queue save: channel closed: {:?}", e),
        }
    }

    /// Put `text` in the input line and submit it.
    pub fn add_or_update(&mut self, text: &str) -> Submission {
        self.input.set(text);
        self.submit()
    }

    /// Commit the input line: add a new item when idle, or retitle the
    /// item under edit. Blank input is ignored and left in place.
    pub fn submit(&mut self) -> Submission {
        if self.input.is_blank() {
            tracing::debug!("Ignoring blank submission");
            return Submission::Rejected;
        }
        let title = self.input.trimmed().to_string();

        let outcome = match self.session.finish() {
            Some(item_id) => {
                let command = UpdateItemTitle {
                    item_id: item_id.clone(),
                    title,
                };
                match self.execute(&command) {
                    Ok(()) => Submission::Updated(item_id),
                    Err(e) => {
                        tracing::warn!("Edit session for {} ended without a change: {}", item_id, e);
                        Submission::Rejected
                    }
                }
            }
            None => {
                let item_id = self.ids.next_id();
                let command = AddItem {
                    item_id: item_id.clone(),
                    title,
                };
                match self.execute(&command) {
                    Ok(()) => Submission::Added(item_id),
                    Err(e) => {
                        tracing::warn!("Item was not added: {}", e);
                        Submission::Rejected
                    }
                }
            }
        };

        if outcome != Submission::Rejected {
            self.input.clear();
        }
        outcome
    }

    /// Start editing `item_id`, copying its title into the input line.
    /// Returns false when no such item exists.
    pub fn begin_edit(&mut self, item_id: &ItemId) -> bool {
        let Some(item) = self.list.get(item_id) else {
            return false;
        };
        let title = item.title.clone();

        self.session.begin(item_id.clone());
        self.input.set(title);
        true
    }

    /// Remove `item_id`. Deleting the item under edit also ends the edit
    /// session and clears the input line.
    pub fn delete(&mut self, item_id: &ItemId) -> bool {
        let command = DeleteItem {
            item_id: item_id.clone(),
        };
        if let Err(e) = self.execute(&command) {
            tracing::debug!("Nothing deleted: {}", e);
            return false;
        }

        if self.session.is_editing_item(item_id) {
            self.session.finish();
            self.input.clear();
            tracing::debug!("Cancelled edit of deleted item {}", item_id);
        }
        true
    }

    fn execute(&mut self, command: &dyn Command) -> TodoResult<()> {
        tracing::debug!("Executing: {}", command.description());

        let mut context = CommandContext {
            list: &mut self.list,
        };
        command.execute(&mut context)?;

        self.persist();
        Ok(())
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.session
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Close the save channel so the worker drains what is queued and exits.
    /// Mutations after this point are no longer persisted.
    pub fn close_save_channel(&mut self) {
        self.save_tx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_persistence::MemoryStore;

    fn controller() -> (ListStoreController, SaveWorker) {
        ListStoreController::new(Arc::new(MemoryStore::new()), "@todos_key")
    }

    #[test]
    fn test_add_prepends_and_clears_input() {
        let (mut controller, _worker) = controller();

        let first = controller.add_or_update("  Buy milk ");
        let second = controller.add_or_update("Walk dog");

        assert!(matches!(first, Submission::Added(_)));
        assert!(matches!(second, Submission::Added(_)));
        assert_eq!(controller.list().titles(), vec!["Walk dog", "Buy milk"]);
        assert!(controller.input().is_empty());
        assert_ne!(controller.items()[0].id, controller.items()[1].id);
    }

    #[test]
    fn test_blank_submission_is_a_noop() {
        let (mut controller, _worker) = controller();

        assert_eq!(controller.add_or_update("   "), Submission::Rejected);
        assert!(controller.list().is_empty());
        assert_eq!(controller.input().as_str(), "   ");
    }

    #[test]
    fn test_begin_edit_copies_title_into_input() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");
        controller.input_mut().set("half-typed draft");
        let id = controller.items()[0].id.clone();

        assert!(controller.begin_edit(&id));
        assert_eq!(controller.input().as_str(), "Buy milk");
        assert!(controller.edit_session().is_editing_item(&id));
    }

    #[test]
    fn test_begin_edit_unknown_item() {
        let (mut controller, _worker) = controller();
        assert!(!controller.begin_edit(&ItemId::from("missing")));
        assert!(!controller.is_editing());
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");
        controller.add_or_update("Walk dog");
        let id = controller.items()[1].id.clone();

        controller.begin_edit(&id);
        let outcome = controller.add_or_update("  Buy oat milk ");

        assert_eq!(outcome, Submission::Updated(id.clone()));
        assert_eq!(controller.list().titles(), vec!["Walk dog", "Buy oat milk"]);
        assert_eq!(controller.items()[1].id, id);
        assert_eq!(*controller.edit_session(), EditSession::Idle);
        assert!(controller.input().is_empty());
    }

    #[test]
    fn test_blank_submission_during_edit_keeps_session() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");
        let id = controller.items()[0].id.clone();
        controller.begin_edit(&id);

        assert_eq!(controller.add_or_update(""), Submission::Rejected);
        assert!(controller.edit_session().is_editing_item(&id));
        assert_eq!(controller.items()[0].title, "Buy milk");
    }

    #[test]
    fn test_delete_missing_item_is_a_noop() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");

        assert!(!controller.delete(&ItemId::from("missing")));
        assert_eq!(controller.list().len(), 1);
    }

    #[test]
    fn test_delete_edited_item_cancels_session() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");
        let id = controller.items()[0].id.clone();
        controller.begin_edit(&id);

        assert!(controller.delete(&id));
        assert!(!controller.is_editing());
        assert!(controller.input().is_empty());

        // Next submission adds rather than editing a ghost
        assert!(matches!(
            controller.add_or_update("Walk dog"),
            Submission::Added(_)
        ));
    }

    #[test]
    fn test_delete_unrelated_item_keeps_session() {
        let (mut controller, _worker) = controller();
        controller.add_or_update("Buy milk");
        controller.add_or_update("Walk dog");
        let edited = controller.items()[0].id.clone();
        let other = controller.items()[1].id.clone();

        controller.begin_edit(&edited);
        assert!(controller.delete(&other));

        assert!(controller.edit_session().is_editing_item(&edited));
        assert_eq!(controller.input().as_str(), "Walk dog");
    }
}
