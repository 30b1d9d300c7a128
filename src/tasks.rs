//! Task List
//!
//! Ordered kanban cards with session-unique ids.
//! Ids come from a counter that only grows, so deleting and re-adding never
//! hands out an id that was already used.

use crate::models::{Task, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskList {
    items: Vec<Task>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self { items: Vec::new(), next_id: 1 }
    }
}

impl TaskList {
    /// Build a list from seed contents, assigning `item-1`, `item-2`, ...
    pub fn seeded<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for content in contents {
            list.push(content.into());
        }
        list
    }

    fn push(&mut self, content: String) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.items.push(Task { id, content });
        id
    }

    /// Append a card at the end. Whitespace-only text is ignored.
    pub fn append(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.push(text.to_string()))
    }

    /// Remove every card with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.items.len();
        self.items.retain(|task| task.id != id);
        self.items.len() != before
    }

    /// Move the card at `from` so that it ends up at index `to`.
    /// Out-of-range indices leave the list untouched.
    pub fn move_task(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let task = self.items.remove(from);
        self.items.insert(to, task);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.items.iter().find(|task| task.id == id)
    }
}

/// Submit the pending new-task draft: append it and clear the draft on success.
/// An empty draft is left exactly as it was.
pub fn submit_draft(list: &mut TaskList, draft: &mut String) -> Option<TaskId> {
    let id = list.append(draft)?;
    draft.clear();
    Some(id)
}
