use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TodoCategory {
    Study,
    Assignment,
    #[default]
    Personal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub category: TodoCategory,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            category: TodoCategory::default(),
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTodoRequest {
    pub text: String,
}

/// Newest-first list of to-do items.
///
/// Every operation returns whether the list changed so callers can skip
/// persistence for no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Prepends a new item. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<&TodoItem> {
        if text.trim().is_empty() {
            return None;
        }
        self.items.insert(0, TodoItem::new(text));
        self.items.first()
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
