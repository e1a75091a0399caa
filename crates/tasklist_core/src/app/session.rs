//! Mounted task list session.
//!
//! # Responsibility
//! - Load the stored collection and draw one row per task at mount.
//! - Check page anchors once and report each missing one.
//! - Route page events to the input controller or the task store.

use crate::app::controller::{self, IgnoreReason, SubmitOutcome};
use crate::model::task::TaskId;
use crate::repo::kv_store::KeyValueStore;
use crate::repo::task_persistence::TaskPersistence;
use crate::service::task_store::{StoreError, StoreResult, TaskStore};
use crate::ui::page::{Anchor, Page, PageCapabilities};
use log::{info, warn};

/// User interaction delivered by the host surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The form was submitted with the current input text.
    Submit,
    /// The toggle of the row at `row` (0-based) was activated.
    Toggle { row: usize },
}

/// Result of handling one `PageEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    TaskAdded(TaskId),
    SubmitIgnored(IgnoreReason),
    TaskToggled { task_id: TaskId, completed: bool },
    /// The event needs an anchor this page does not have.
    Unavailable(Anchor),
    RowOutOfRange(usize),
}

/// A page bound to a task store.
pub struct TaskListApp<S: KeyValueStore> {
    store: TaskStore<S>,
    page: Page,
    capabilities: PageCapabilities,
}

impl<S: KeyValueStore> TaskListApp<S> {
    /// Loads the stored collection into `page`.
    ///
    /// # Errors
    /// Fails when the stored record cannot be read or decoded; a malformed
    /// record is never replaced by an empty list.
    pub fn mount(kv: S, mut page: Page) -> StoreResult<Self> {
        let store = TaskStore::initialize(TaskPersistence::new(kv))?;
        let capabilities = page.capabilities();

        for anchor in capabilities.missing_anchors() {
            warn!("event=anchor_missing module=app status=warn anchor={anchor}");
        }

        if let Some(list) = page.list_mut() {
            for task in store.tasks() {
                list.render_row(task);
            }
        }

        info!(
            "event=app_mount module=app status=ok tasks={} can_render={} can_submit={}",
            store.len(),
            capabilities.can_render,
            capabilities.can_submit
        );

        Ok(Self {
            store,
            page,
            capabilities,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn capabilities(&self) -> PageCapabilities {
        self.capabilities
    }

    /// Replaces the input text. Returns `false` without an input anchor.
    pub fn type_input(&mut self, text: impl Into<String>) -> bool {
        self.page.type_input(text)
    }

    /// Handles one event to completion.
    ///
    /// # Errors
    /// Propagates store failures (persistence, unknown task id).
    pub fn dispatch(&mut self, event: PageEvent) -> StoreResult<EventOutcome> {
        match event {
            PageEvent::Submit => self.handle_submit(),
            PageEvent::Toggle { row } => self.handle_toggle(row),
        }
    }

    fn handle_submit(&mut self) -> StoreResult<EventOutcome> {
        if !self.capabilities.can_submit {
            return Ok(EventOutcome::Unavailable(Anchor::Form));
        }

        match controller::submit(&mut self.page, &mut self.store)? {
            SubmitOutcome::Added(id) => Ok(EventOutcome::TaskAdded(id)),
            SubmitOutcome::Ignored(reason) => Ok(EventOutcome::SubmitIgnored(reason)),
        }
    }

    fn handle_toggle(&mut self, row: usize) -> StoreResult<EventOutcome> {
        let Some(list) = self.page.list_mut() else {
            return Ok(EventOutcome::Unavailable(Anchor::List));
        };
        let Some(event) = list.toggle(row) else {
            return Ok(EventOutcome::RowOutOfRange(row));
        };

        match self.store.set_completed(event.task_id, event.checked) {
            Ok(()) => Ok(EventOutcome::TaskToggled {
                task_id: event.task_id,
                completed: event.checked,
            }),
            Err(StoreError::NotFound(id)) => {
                // Row has no backing task; undo the visual flip.
                if let Some(row) = list.row_mut(row) {
                    row.set_checked(!event.checked);
                }
                Err(StoreError::NotFound(id))
            }
            Err(err) => Err(err),
        }
    }
}
