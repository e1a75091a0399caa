//! Host page and its anchor capabilities.
//!
//! # Invariants
//! - Anchor presence is fixed at construction and checked once at mount.

use crate::ui::form::TaskForm;
use crate::ui::list::ListContainer;
use std::fmt::{Display, Formatter};

/// Named anchor a host page is expected to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    List,
    Form,
    Input,
}

impl Anchor {
    /// Stable element id of the anchor.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Form => "new-task-form",
            Self::Input => "new-task-title",
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a mounted page can do, derived from the anchors it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapabilities {
    /// Rows can be drawn (list anchor present).
    pub can_render: bool,
    /// Submissions are accepted (form anchor present).
    pub can_submit: bool,
    /// Submitted text can be read (input anchor present).
    pub has_input: bool,
}

impl PageCapabilities {
    pub fn missing_anchors(&self) -> Vec<Anchor> {
        let mut missing = Vec::new();
        if !self.can_render {
            missing.push(Anchor::List);
        }
        if !self.can_submit {
            missing.push(Anchor::Form);
        } else if !self.has_input {
            missing.push(Anchor::Input);
        }
        missing
    }
}

/// Host surface exposing the task list anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    list: Option<ListContainer>,
    form: Option<TaskForm>,
}

impl Page {
    /// Page with every anchor present.
    pub fn new() -> Self {
        Self {
            list: Some(ListContainer::new()),
            form: Some(TaskForm::new()),
        }
    }

    /// Page without any anchors.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, list: ListContainer) -> Self {
        self.list = Some(list);
        self
    }

    pub fn with_form(mut self, form: TaskForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn capabilities(&self) -> PageCapabilities {
        PageCapabilities {
            can_render: self.list.is_some(),
            can_submit: self.form.is_some(),
            has_input: self.form.as_ref().is_some_and(|form| form.input().is_some()),
        }
    }

    pub fn list(&self) -> Option<&ListContainer> {
        self.list.as_ref()
    }

    pub fn list_mut(&mut self) -> Option<&mut ListContainer> {
        self.list.as_mut()
    }

    pub fn form_mut(&mut self) -> Option<&mut TaskForm> {
        self.form.as_mut()
    }

    /// Current input text, when both form and input exist.
    pub fn input_value(&self) -> Option<&str> {
        self.form
            .as_ref()
            .and_then(TaskForm::input)
            .map(|input| input.value())
    }

    /// Types `text` into the input, replacing its value.
    ///
    /// Returns `false` when the input anchor is missing.
    pub fn type_input(&mut self, text: impl Into<String>) -> bool {
        match self.form.as_mut().and_then(TaskForm::input_mut) {
            Some(input) => {
                input.set_value(text);
                true
            }
            None => false,
        }
    }
}
