//! Form submission handling.
//!
//! A submission either adds exactly one task (append, persist, render,
//! clear input) or is ignored with no side effects.

use crate::model::task::{Task, TaskId};
use crate::repo::kv_store::KeyValueStore;
use crate::service::task_store::{StoreResult, TaskStore};
use crate::ui::page::Page;
use log::debug;

/// Why a submission produced no task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The page has no form or no text input.
    MissingInput,
    /// The input is empty or whitespace only.
    BlankTitle,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::BlankTitle => "blank_title",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(TaskId),
    Ignored(IgnoreReason),
}

/// Returns the title to store for `raw`, or why it is rejected.
///
/// Accepted titles are returned untrimmed.
pub fn validate_title(raw: Option<&str>) -> Result<&str, IgnoreReason> {
    match raw {
        None => Err(IgnoreReason::MissingInput),
        Some(text) if text.trim().is_empty() => Err(IgnoreReason::BlankTitle),
        Some(text) => Ok(text),
    }
}

/// Handles one form submission against `page` and `store`.
///
/// # Errors
/// Propagates the store error when persisting the new task fails. The task
/// is then in memory but no row is drawn and the input keeps its text.
pub fn submit<S: KeyValueStore>(
    page: &mut Page,
    store: &mut TaskStore<S>,
) -> StoreResult<SubmitOutcome> {
    let title = match validate_title(page.input_value()) {
        Ok(title) => title.to_string(),
        Err(reason) => {
            debug!(
                "event=submit_ignored module=app status=ok reason={}",
                reason.as_str()
            );
            return Ok(SubmitOutcome::Ignored(reason));
        }
    };

    let id = store.add(Task::new(title))?;

    if let (Some(list), Some(task)) = (page.list_mut(), store.get(id)) {
        list.render_row(task);
    }
    if let Some(input) = page.form_mut().and_then(|form| form.input_mut()) {
        input.clear();
    }

    Ok(SubmitOutcome::Added(id))
}
