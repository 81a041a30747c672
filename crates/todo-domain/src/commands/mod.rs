use todo_core::TodoResult;

pub mod item_commands;

pub use item_commands::*;

/// Trait for domain commands that mutate the list
pub trait Command: Send + Sync {
    /// Execute this command against the list
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub list: &'a mut crate::TodoList,
}
