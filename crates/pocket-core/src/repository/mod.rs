//! Repository Layer
//!
//! Key-value storage abstraction, the generic list store and the
//! per-widget repositories built on it.

mod browser;
mod expense_repo;
mod id_counter;
mod list_store;
mod memory;
mod todo_repo;
mod traits;


pub use browser::BrowserStorage;
pub use expense_repo::ExpenseLedger;
pub use id_counter::IdCounter;
pub use list_store::ListStore;
pub use memory::MemoryStorage;
pub use todo_repo::TodoList;
pub use traits::KeyValueStorage;
