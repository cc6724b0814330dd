//! Study to-do tasks and the line splitter for model-generated lists.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTask {
    pub description: String,
    pub done: bool,
}

impl TodoTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }
}

/// One undone task per non-blank line, trimmed. No de-duplication.
pub fn split_tasks(text: &str) -> Vec<TodoTask> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(TodoTask::new)
        .collect()
}
