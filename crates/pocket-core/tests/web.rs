//! Browser Storage Tests
//!
//! Run with `wasm-pack test --headless --firefox crates/pocket-core`.

#![cfg(target_arch = "wasm32")]

use pocket_core::{BrowserStorage, KeyValueStorage, StorageKeys, StoreError, TodoList};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEYS: StorageKeys = StorageKeys {
    list: "testTodoList",
    counter: "testMaxId",
};

fn clear() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(KEYS.list).unwrap();
    storage.remove_item(KEYS.counter).unwrap();
}

#[wasm_bindgen_test]
fn test_round_trip_through_local_storage() {
    clear();
    let mut todos = TodoList::open_with_keys(BrowserStorage, KEYS).unwrap();
    let id = todos.add("Buy milk").unwrap().id;
    todos.toggle(id).unwrap();

    let reopened = TodoList::open_with_keys(BrowserStorage, KEYS).unwrap();
    assert_eq!(reopened.items(), todos.items());
    assert_eq!(BrowserStorage.get_item(KEYS.counter).unwrap().as_deref(), Some("1"));
    clear();
}

#[wasm_bindgen_test]
fn test_corrupt_local_storage_fails_open() {
    clear();
    BrowserStorage.set_item(KEYS.list, "not json").unwrap();
    let err = TodoList::open_with_keys(BrowserStorage, KEYS).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { .. }));
    clear();
}
