//! List Store
//!
//! The authoritative in-memory list, mirrored to storage as a JSON array.
//! Every mutation saves; a failed save leaves the in-memory list unchanged.

use log::{debug, error, info};

use super::id_counter::IdCounter;
use super::traits::KeyValueStorage;
use crate::config::StorageKeys;
use crate::domain::Record;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct ListStore<T, S> {
    storage: S,
    keys: StorageKeys,
    ids: IdCounter,
    items: Vec<T>,
}

impl<T: Record, S: KeyValueStorage> ListStore<T, S> {
    /// Empty store; nothing is read until `load`.
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            ids: IdCounter::new(keys.counter),
            items: Vec::new(),
        }
    }

    /// Store loaded from whatever is persisted under `keys`.
    pub fn open(storage: S, keys: StorageKeys) -> StoreResult<Self> {
        let mut store = Self::new(storage, keys);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory list with the persisted one.
    /// Nothing persisted leaves the list as it is. Corrupt JSON is an error.
    pub fn load(&mut self) -> StoreResult<()> {
        let key = self.keys.list;
        let json = match self.storage.get_item(key)? {
            Some(json) if !json.trim().is_empty() => json,
            _ => {
                debug!("[store] nothing stored under `{}`", key);
                return Ok(());
            }
        };

        self.items = serde_json::from_str(&json).map_err(|e| {
            error!("[store] `{}` is not a valid record list: {}", key, e);
            StoreError::malformed(key, e)
        })?;
        debug!("[store] loaded {} records from `{}`", self.items.len(), key);
        Ok(())
    }

    /// Write the in-memory list under the list key.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.items).map_err(|e| StoreError::Storage(e.to_string()))?;
        self.storage.set_item(self.keys.list, &json)
    }

    /// Allocate the next id from the persisted counter.
    pub fn next_id(&mut self) -> StoreResult<u32> {
        self.ids.allocate(&self.storage, &self.items)
    }

    /// Append a record and save.
    pub fn add(&mut self, record: T) -> StoreResult<&T> {
        let id = record.id();
        if self.get(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        self.items.push(record);
        if let Err(e) = self.save() {
            self.items.pop();
            return Err(e);
        }
        info!("[store] added {} to `{}`", id, self.keys.list);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Allocate an id, build the record with it, append and save.
    pub fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> StoreResult<&T> {
        let id = self.next_id()?;
        self.add(build(id))
    }

    /// Remove by id and save. Order of the remaining records is kept.
    pub fn remove(&mut self, id: u32) -> StoreResult<T> {
        let pos = self.position(id)?;
        let removed = self.items.remove(pos);
        if let Err(e) = self.save() {
            self.items.insert(pos, removed);
            return Err(e);
        }
        info!("[store] removed {} from `{}`", id, self.keys.list);
        Ok(removed)
    }

    /// Mutate one record in place and save.
    pub fn update<F>(&mut self, id: u32, patch: F) -> StoreResult<&T>
    where
        F: FnOnce(&mut T),
    {
        let pos = self.position(id)?;
        let before = self.items[pos].clone();
        patch(&mut self.items[pos]);
        if let Err(e) = self.save() {
            self.items[pos] = before;
            return Err(e);
        }
        info!("[store] updated {} in `{}`", id, self.keys.list);
        Ok(&self.items[pos])
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Records in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> StorageKeys {
        self.keys
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, id: u32) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))
    }
}
