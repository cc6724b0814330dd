//! In-memory study session: chat transcript, subjects, to-do lists, and the active quiz.
//!
//! Owned by the UI thread; background requests only hand back finished strings.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Local};

use crate::core::intent::{self, Intent};
use crate::core::normalize::{clean_lines, clean_response};
use crate::core::quiz::{QuizSession, parse_quiz};
use crate::core::subject::{capitalize, extract_subject};
use crate::core::todo::{TodoTask, split_tasks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Assistant => "Assistant",
        }
    }
}

/// One transcript entry. Never edited after it is appended.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

/// What happened when the user sent a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Trimmed message to forward to the model.
    pub prompt: String,
    pub subject: Option<String>,
    pub intent: Option<Intent>,
}

#[derive(Debug, Default)]
pub struct Session {
    transcript: Vec<ChatMessage>,
    subjects: BTreeSet<String>,
    todo_lists: HashMap<String, Vec<TodoTask>>,
    quiz: Option<QuizSession>,
}

/// Key under which a subject's to-do list is stored.
fn todo_key(subject: &str) -> String {
    capitalize(subject.trim())
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Subjects seen so far, sorted.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(String::as_str)
    }

    pub fn push_message(&mut self, sender: Sender, text: impl Into<String>) {
        self.transcript.push(ChatMessage {
            sender,
            text: text.into(),
            sent_at: Local::now(),
        });
    }

    /// Record a user message: append it, remember its subject, and answer a detected
    /// intent with its canned reply. Returns `None` for blank input (nothing changes).
    pub fn send_user_message(&mut self, input: &str) -> Option<SentMessage> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return None;
        }
        self.push_message(Sender::User, prompt);

        let subject = extract_subject(prompt);
        if let Some(ref s) = subject {
            self.subjects.insert(s.clone());
        }

        let intent = intent::detect_intent(prompt);
        if let Some(i) = intent {
            self.push_message(Sender::Assistant, i.canned_reply());
        }
        log::debug!(
            "User message: subject={:?} intent={}",
            subject,
            intent::label(intent)
        );

        Some(SentMessage {
            prompt: prompt.to_string(),
            subject,
            intent,
        })
    }

    /// Append the model's reply, cleaned of markdown.
    pub fn receive_reply(&mut self, raw: &str) {
        self.push_message(Sender::Assistant, clean_response(raw));
    }

    /// Append a bracketed error in place of a reply.
    pub fn receive_chat_error(&mut self, error: &str) {
        self.push_message(Sender::Assistant, format!("[Error contacting AI: {}]", error));
    }

    pub fn todo_list(&self, subject: &str) -> &[TodoTask] {
        self.todo_lists
            .get(&todo_key(subject))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when the subject has no tasks yet and a list should be generated.
    pub fn needs_todo_generation(&self, subject: &str) -> bool {
        self.todo_list(subject).is_empty()
    }

    /// Replace the subject's list with tasks parsed from a model reply.
    pub fn set_generated_todos(&mut self, subject: &str, raw: &str) -> usize {
        let tasks = split_tasks(&clean_lines(raw));
        let count = tasks.len();
        self.todo_lists.insert(todo_key(subject), tasks);
        count
    }

    /// Record a failed generation as an empty list.
    pub fn clear_todos(&mut self, subject: &str) {
        self.todo_lists.insert(todo_key(subject), Vec::new());
    }

    /// Append a user-entered task. Blank entries are ignored.
    pub fn add_todo(&mut self, subject: &str, description: &str) -> bool {
        let description = description.trim();
        if description.is_empty() {
            return false;
        }
        self.todo_lists
            .entry(todo_key(subject))
            .or_default()
            .push(TodoTask::new(description));
        true
    }

    /// Flip the done flag of task `index`; returns the new value.
    pub fn toggle_todo(&mut self, subject: &str, index: usize) -> Option<bool> {
        let task = self.todo_lists.get_mut(&todo_key(subject))?.get_mut(index)?;
        task.done = !task.done;
        Some(task.done)
    }

    pub fn remove_todo(&mut self, subject: &str, index: usize) -> Option<TodoTask> {
        let tasks = self.todo_lists.get_mut(&todo_key(subject))?;
        (index < tasks.len()).then(|| tasks.remove(index))
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    pub fn quiz_mut(&mut self) -> Option<&mut QuizSession> {
        self.quiz.as_mut()
    }

    /// Build and start a quiz from a model transcript. Returns the number of parsed questions.
    pub fn start_quiz(&mut self, subject: &str, raw: &str) -> usize {
        let questions = parse_quiz(&clean_lines(raw));
        let count = questions.len();
        let mut quiz = QuizSession::new(subject, questions);
        quiz.start();
        self.quiz = Some(quiz);
        count
    }

    /// Drop the active quiz (leaving the quiz view or picking another subject).
    pub fn end_quiz(&mut self) {
        self.quiz = None;
    }
}
