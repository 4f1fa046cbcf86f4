//! Todo Repository
//!
//! Todo-specific operations over a `ListStore<TodoItem, _>`.

use log::warn;

use super::list_store::ListStore;
use super::traits::KeyValueStorage;
use crate::config::StorageKeys;
use crate::domain::{TodoItem, TodoPatch};
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct TodoList<S> {
    store: ListStore<TodoItem, S>,
}

impl<S: KeyValueStorage> TodoList<S> {
    /// Open under the standard `todoList` / `maxId` keys.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_keys(storage, StorageKeys::TODO)
    }

    pub fn open_with_keys(storage: S, keys: StorageKeys) -> StoreResult<Self> {
        Ok(Self {
            store: ListStore::open(storage, keys)?,
        })
    }

    /// Add a new, not completed todo from the raw form title.
    pub fn add(&mut self, raw_title: &str) -> StoreResult<TodoItem> {
        let title = TodoItem::title_from_input(raw_title).inspect_err(|e| {
            warn!("[todo] rejected add: {}", e);
        })?;
        self.store
            .insert_with(|id| TodoItem::new(id, title))
            .cloned()
    }

    /// Flip completion, returning the new state.
    pub fn toggle(&mut self, id: u32) -> StoreResult<bool> {
        self.store
            .update(id, |todo| todo.completed = !todo.completed)
            .map(|todo| todo.completed)
    }

    pub fn set_completed(&mut self, id: u32, completed: bool) -> StoreResult<()> {
        self.store
            .update(id, |todo| todo.completed = completed)
            .map(|_| ())
    }

    /// Commit a detail-view edit.
    pub fn edit(&mut self, id: u32, patch: TodoPatch) -> StoreResult<TodoItem> {
        self.store.update(id, |todo| patch.apply(todo)).cloned()
    }

    pub fn remove(&mut self, id: u32) -> StoreResult<TodoItem> {
        self.store.remove(id)
    }

    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.store.get(id)
    }

    /// Insertion order
    pub fn items(&self) -> &[TodoItem] {
        self.store.items()
    }

    /// Display order: most recently added first
    pub fn newest_first(&self) -> impl Iterator<Item = &TodoItem> {
        self.store.items().iter().rev()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.store.items().iter().filter(|t| t.completed).count()
    }

    /// Re-read the persisted list.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.store.load()
    }

    pub fn store(&self) -> &ListStore<TodoItem, S> {
        &self.store
    }
}
