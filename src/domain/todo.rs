use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single todo entry
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Todo {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: Local::now(),
        }
    }
}

/// Ordered todo list. Lives only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample list shown on every start
    pub fn seeded() -> Self {
        let mut list = Self::new();
        list.add("Finish math homework");
        let read = list.add("Read chapter 5");
        list.add("Practice piano for 30 minutes");
        if let Some(id) = read {
            // Seed state only, not a completion event
            if let Some(todo) = list.todos.iter_mut().find(|t| t.id == id) {
                todo.completed = true;
            }
        }
        list
    }

    /// Append a todo. Blank input is ignored.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let todo = Todo::new(text.to_string());
        let id = todo.id;
        self.todos.push(todo);
        Some(id)
    }

    /// Flip completion. Returns true only when the todo went from open to done.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                todo.completed
            }
            None => false,
        }
    }

    /// Delete by id; unknown ids are ignored
    pub fn remove(&mut self, id: Uuid) {
        self.todos.retain(|t| t.id != id);
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_list() {
        let list = TodoList::seeded();
        assert_eq!(list.len(), 3);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.remaining_count(), 2);
        assert_eq!(list.todos()[1].text, "Read chapter 5");
        assert!(list.todos()[1].completed);
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = TodoList::new();
        let id = list.add("  Read  ").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.todos()[0].id, id);
        assert_eq!(list.todos()[0].text, "Read");
        assert!(!list.todos()[0].completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   \t "), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_order_is_insertion() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        let texts: Vec<&str> = list.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_reports_each_completion_edge() {
        let mut list = TodoList::new();
        let id = list.add("Read").unwrap();

        assert!(list.toggle(id));
        assert!(!list.toggle(id));
        assert!(list.toggle(id));
        assert!(list.todos()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = TodoList::seeded();
        assert!(!list.toggle(Uuid::new_v4()));
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = TodoList::new();
        let id = list.add("Read").unwrap();
        list.add("Write");

        list.remove(id);
        assert_eq!(list.len(), 1);
        list.remove(id);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|t| t.text.as_str()), Some("Write"));
    }
}
