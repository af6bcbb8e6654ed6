//! Reducer for the todo container.

use crate::store::Reducer;

use super::intent::TodoIntent;
use super::state::{TodoItem, TodoState};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let TodoState {
            mut todos,
            filter,
            next_id,
        } = state;

        match intent {
            TodoIntent::AddTodo(text) => {
                todos.push(TodoItem {
                    id: next_id,
                    text,
                    completed: false,
                });
                TodoState {
                    todos,
                    filter,
                    next_id: next_id + 1,
                }
            }
            TodoIntent::ToggleTodo(id) => {
                if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                }
                TodoState { todos, filter, next_id }
            }
            TodoIntent::DeleteTodo(id) => {
                todos.retain(|t| t.id != id);
                TodoState { todos, filter, next_id }
            }
            TodoIntent::EditTodo { id, text } => {
                if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                    todo.text = text;
                }
                TodoState { todos, filter, next_id }
            }
            TodoIntent::SetFilter(new_filter) => TodoState {
                todos,
                filter: new_filter,
                next_id,
            },
            TodoIntent::ClearCompleted => {
                todos.retain(|t| !t.completed);
                TodoState { todos, filter, next_id }
            }
        }
    }
}
