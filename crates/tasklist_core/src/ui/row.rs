//! One rendered task row.

use crate::model::task::{Task, TaskId};

/// Visual row: a toggle plus the task title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    task_id: TaskId,
    title: String,
    checked: bool,
}

/// Emitted when a row's toggle is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub task_id: TaskId,
    /// Toggle state after activation.
    pub checked: bool,
}

impl Row {
    /// Builds a row whose toggle reflects `task.is_completed()`.
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            title: task.title().to_string(),
            checked: task.is_completed(),
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Flips the toggle and reports the new state.
    pub fn toggle(&mut self) -> ToggleEvent {
        self.checked = !self.checked;
        ToggleEvent {
            task_id: self.task_id,
            checked: self.checked,
        }
    }

    /// Forces the toggle state without emitting an event.
    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

#[cfg(test)]
mod tests {
    use super::Row;
    use crate::model::task::Task;

    #[test]
    fn row_mirrors_task_state() {
        let mut task = Task::new("Buy milk");
        task.set_completed(true);

        let row = Row::for_task(&task);
        assert_eq!(row.task_id(), task.id());
        assert_eq!(row.title(), "Buy milk");
        assert!(row.is_checked());
    }

    #[test]
    fn toggling_twice_restores_state() {
        let mut row = Row::for_task(&Task::new("A"));

        let first = row.toggle();
        assert!(first.checked);
        let second = row.toggle();
        assert!(!second.checked);
        assert!(!row.is_checked());
        assert_eq!(first.task_id, second.task_id);
    }
}
