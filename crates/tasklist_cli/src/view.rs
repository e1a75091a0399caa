//! Terminal drawing of the page and event outcomes.

use colored::Colorize;
use tasklist_core::{EventOutcome, IgnoreReason, KeyValueStore, Page, TaskStore};

/// Renders the list container as numbered checkbox lines.
pub fn render_page(page: &Page) -> String {
    let Some(list) = page.list() else {
        return format!("{}\n", "(task list unavailable)".dimmed());
    };
    if list.is_empty() {
        return format!("{}\n", "No tasks yet.".dimmed());
    }

    let mut out = String::new();
    for (index, row) in list.rows().iter().enumerate() {
        let number = format!("{:>3}.", index + 1).dimmed();
        let line = if row.is_checked() {
            format!("{number} [x] {}", row.title().green())
        } else {
            format!("{number} [ ] {}", row.title())
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn describe_outcome<S: KeyValueStore>(outcome: &EventOutcome, store: &TaskStore<S>) -> String {
    match outcome {
        EventOutcome::TaskAdded(id) => {
            let title = store.get(*id).map(|task| task.title()).unwrap_or_default();
            format!("{} {}", "added".green(), title)
        }
        // Blank submissions are silently ignored.
        EventOutcome::SubmitIgnored(IgnoreReason::BlankTitle) => String::new(),
        EventOutcome::SubmitIgnored(IgnoreReason::MissingInput) => {
            "no input field to read from".yellow().to_string()
        }
        EventOutcome::TaskToggled { task_id, completed } => {
            let title = store.get(*task_id).map(|task| task.title()).unwrap_or_default();
            let state = if *completed {
                "done".green()
            } else {
                "open".yellow()
            };
            format!("{state} {title}")
        }
        EventOutcome::Unavailable(anchor) => {
            format!("{} `{anchor}` is not available", "skipped:".yellow())
        }
        EventOutcome::RowOutOfRange(row) => format!("{} no task #{}", "error:".red(), row + 1),
    }
}
