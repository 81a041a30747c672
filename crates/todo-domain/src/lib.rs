pub mod commands;
pub mod edit_session;
pub mod item;
pub mod list;

pub use edit_session::EditSession;
pub use item::{IdGenerator, Item, ItemId};
pub use list::TodoList;
