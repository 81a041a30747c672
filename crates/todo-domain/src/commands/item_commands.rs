use super::{Command, CommandContext};
use crate::{Item, ItemId};
use todo_core::{TodoError, TodoResult};

fn require_title(title: &str) -> TodoResult<()> {
    if title.trim().is_empty() {
        return Err(TodoError::Validation("title must not be blank".to_string()));
    }
    Ok(())
}

/// Create a new item at the front of the list
pub struct AddItem {
    pub item_id: ItemId,
    pub title: String,
}

impl Command for AddItem {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        require_title(&self.title)?;
        if context.list.contains(&self.item_id) {
            return Err(TodoError::Validation(format!(
                "item {} already exists",
                self.item_id
            )));
        }
        context
            .list
            .prepend(Item::new(self.item_id.clone(), &self.title));
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add item: '{}'", self.title.trim())
    }
}

/// Replace an item's title in place, keeping its id and position
pub struct UpdateItemTitle {
    pub item_id: ItemId,
    pub title: String,
}

impl Command for UpdateItemTitle {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        require_title(&self.title)?;
        let item = context
            .list
            .get_mut(&self.item_id)
            .ok_or_else(|| TodoError::NotFound(format!("item {}", self.item_id)))?;
        item.update_title(&self.title);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update item {}: '{}'", self.item_id, self.title.trim())
    }
}

/// Remove an item from the list
pub struct DeleteItem {
    pub item_id: ItemId,
}

impl Command for DeleteItem {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context
            .list
            .remove(&self.item_id)
            .map(|_| ())
            .ok_or_else(|| TodoError::NotFound(format!("item {}", self.item_id)))
    }

    fn description(&self) -> String {
        format!("Delete item {}", self.item_id)
    }
}
