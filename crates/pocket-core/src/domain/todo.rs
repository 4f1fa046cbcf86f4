//! Todo Record
//!
//! A titled task with optional detail text and a completion flag.

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::required;
use crate::error::StoreResult;

/// A todo item as persisted under `todoList`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// New, not yet completed item. The title is taken as given.
    pub fn new(id: u32, title: String) -> Self {
        Self {
            id,
            title,
            detail: String::new(),
            completed: false,
        }
    }

    /// Validate a raw title from the add form.
    pub fn title_from_input(raw: &str) -> StoreResult<String> {
        required("title", raw)
    }
}

impl Record for TodoItem {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Edit from the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct TodoPatch {
    pub title: String,
    pub detail: String,
}

impl TodoPatch {
    pub fn parse(title: &str, detail: &str) -> StoreResult<Self> {
        Ok(Self {
            title: required("title", title)?,
            detail: detail.to_string(),
        })
    }

    pub(crate) fn apply(self, item: &mut TodoItem) {
        item.title = self.title;
        item.detail = self.detail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(TodoItem::title_from_input("  Buy milk \n").unwrap(), "Buy milk");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(
            TodoItem::title_from_input("   "),
            Err(StoreError::MissingField("title"))
        );
        assert_eq!(
            TodoPatch::parse("", "some detail"),
            Err(StoreError::MissingField("title"))
        );
    }

    #[test]
    fn test_patch_keeps_detail_verbatim() {
        let mut item = TodoItem::new(1, "Old".into());
        TodoPatch::parse(" New ", "  line one\nline two ").unwrap().apply(&mut item);
        assert_eq!(item.title, "New");
        assert_eq!(item.detail, "  line one\nline two ");
        assert!(!item.completed);
    }

    #[test]
    fn test_legacy_json_without_detail() {
        let item: TodoItem = serde_json::from_str(r#"{"id":3,"title":"x"}"#).unwrap();
        assert_eq!(item, TodoItem::new(3, "x".into()));
    }
}
