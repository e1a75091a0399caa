//! Ordered list container holding rendered rows.

use crate::model::task::Task;
use crate::ui::row::{Row, ToggleEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContainer {
    rows: Vec<Row>,
}

impl ListContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `task` as a new row at the end of the list.
    pub fn render_row(&mut self, task: &Task) {
        self.rows.push(Row::for_task(task));
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Activates the toggle of the row at `index` (0-based).
    ///
    /// Returns `None` when no such row exists.
    pub fn toggle(&mut self, index: usize) -> Option<ToggleEvent> {
        self.rows.get_mut(index).map(Row::toggle)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }
}
