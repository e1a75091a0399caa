//! Task entry form with one text input.

/// Single-line text input of the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Submittable form. The input anchor may be absent on a partial page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    input: Option<TextInput>,
}

impl TaskForm {
    /// Form with its text input present.
    pub fn new() -> Self {
        Self {
            input: Some(TextInput::new()),
        }
    }

    /// Form whose text input anchor is missing.
    pub fn without_input() -> Self {
        Self { input: None }
    }

    pub fn input(&self) -> Option<&TextInput> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        self.input.as_mut()
    }
}
