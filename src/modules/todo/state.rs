//! State for the todo container.

use serde::{Deserialize, Serialize};

use crate::store::State;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    /// Parse the wire name used in `todo/setFilter` payloads.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(TodoFilter::All),
            "active" => Some(TodoFilter::Active),
            "completed" => Some(TodoFilter::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Aggregate counts over the list, independent of the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    pub todos: Vec<TodoItem>,
    pub filter: TodoFilter,
    /// Id handed to the next added todo.
    pub next_id: u64,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            filter: TodoFilter::All,
            next_id: 1,
        }
    }
}

impl State for TodoState {}

impl TodoState {
    /// Todos visible under the active filter, in insertion order.
    pub fn filtered(&self) -> Vec<&TodoItem> {
        self.todos
            .iter()
            .filter(|todo| match self.filter {
                TodoFilter::All => true,
                TodoFilter::Active => !todo.completed,
                TodoFilter::Completed => todo.completed,
            })
            .collect()
    }

    pub fn stats(&self) -> TodoStats {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoStats {
            total: self.todos.len(),
            completed,
            active: self.todos.len() - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoState {
        TodoState {
            todos: vec![
                TodoItem { id: 1, text: "one".into(), completed: true },
                TodoItem { id: 2, text: "two".into(), completed: false },
                TodoItem { id: 3, text: "three".into(), completed: false },
            ],
            filter: TodoFilter::All,
            next_id: 4,
        }
    }

    #[test]
    fn filtered_respects_active_filter() {
        let mut state = sample();
        assert_eq!(state.filtered().len(), 3);

        state.filter = TodoFilter::Active;
        let active: Vec<u64> = state.filtered().iter().map(|t| t.id).collect();
        assert_eq!(active, vec![2, 3]);

        state.filter = TodoFilter::Completed;
        let completed: Vec<u64> = state.filtered().iter().map(|t| t.id).collect();
        assert_eq!(completed, vec![1]);
    }

    #[test]
    fn stats_counts_completed_and_active() {
        let stats = sample().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.active, 2);
    }

    #[test]
    fn filter_parse_round_trips() {
        assert_eq!(TodoFilter::parse("all"), Some(TodoFilter::All));
        assert_eq!(TodoFilter::parse("active"), Some(TodoFilter::Active));
        assert_eq!(TodoFilter::parse("completed"), Some(TodoFilter::Completed));
        assert_eq!(TodoFilter::parse("done"), None);
    }
}
