//! TUI application state: current view, chat input and scroll, quiz and to-do screens.

use std::time::Instant;

use crate::core::llm::RequestKind;
use crate::core::prompts::prompts;
use crate::core::quiz::Letter;
use crate::core::session::{Sender, Session};

use super::requests::PendingRequest;

/// Top-level screens, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Chat,
    Todo,
    Quiz,
}

impl View {
    pub const ALL: [View; 3] = [View::Chat, View::Todo, View::Quiz];

    pub fn title(self) -> &'static str {
        match self {
            View::Chat => "Chatbot",
            View::Todo => "To-Do List",
            View::Quiz => "AI Quiz",
        }
    }

    pub fn index(self) -> usize {
        match self {
            View::Chat => 0,
            View::Todo => 1,
            View::Quiz => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the quiz screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizView {
    Picker,
    Loading(String),
    /// A quiz is in `Session::quiz`.
    Running,
    Failed(String),
}

/// What the to-do screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoView {
    Picker,
    Loading(String),
    List(String),
    Failed(String),
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

pub struct App {
    pub(crate) session: Session,
    pub(crate) view: View,
    /// Model used for requests and shown in the header.
    pub model_id: String,
    pub(crate) show_timestamps: bool,
    /// Chat input line.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Selected row in the subject picker (quiz and to-do screens).
    pub(crate) subject_index: usize,
    pub(crate) quiz_view: QuizView,
    /// Option highlighted for the current question.
    pub(crate) quiz_selection: Option<Letter>,
    /// Inline prompt under the question (e.g. "Please select an answer.").
    pub(crate) quiz_notice: Option<String>,
    /// When the graded question moves on.
    pub(crate) quiz_advance_at: Option<Instant>,
    pub(crate) todo_view: TodoView,
    /// Selected task row.
    pub(crate) todo_index: usize,
    /// New task being typed; `None` when not adding.
    pub(crate) todo_input: Option<String>,
    /// Requests in flight, each tied to the view that asked for it.
    pub(crate) pending: Vec<PendingRequest>,
}

impl App {
    pub fn new(model_id: String, show_timestamps: bool) -> Self {
        let mut session = Session::new();
        session.push_message(Sender::Assistant, prompts().greeting.as_str());
        Self {
            session,
            view: View::Chat,
            model_id,
            show_timestamps,
            input: String::new(),
            scroll: ScrollPosition::Bottom,
            last_max_scroll: 0,
            subject_index: 0,
            quiz_view: QuizView::Picker,
            quiz_selection: None,
            quiz_notice: None,
            quiz_advance_at: None,
            todo_view: TodoView::Picker,
            todo_index: 0,
            todo_input: None,
            pending: Vec::new(),
        }
    }

    /// Subjects for the pickers, sorted.
    pub(crate) fn subjects(&self) -> Vec<String> {
        self.session.subjects().map(str::to_string).collect()
    }

    pub(crate) fn selected_subject(&self) -> Option<String> {
        self.session
            .subjects()
            .nth(self.subject_index)
            .map(str::to_string)
    }

    pub(crate) fn move_subject_selection(&mut self, down: bool) {
        let count = self.session.subjects().count();
        self.subject_index = step_index(self.subject_index, count, down);
    }

    pub(crate) fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Track a spawned request.
    pub(crate) fn track(&mut self, request: PendingRequest) {
        self.pending.push(request);
    }

    /// Cancel and forget every pending request matching `pred`.
    pub(crate) fn cancel_requests<F>(&mut self, pred: F)
    where
        F: Fn(&RequestKind) -> bool,
    {
        self.pending.retain(|p| {
            if pred(&p.kind) {
                log::debug!("Cancelling request {:?}", p.kind);
                p.cancel_token.cancel();
                false
            } else {
                true
            }
        });
    }

    /// Switch screens. Leaving the quiz or to-do screen discards it and cancels its requests.
    pub(crate) fn switch_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        match self.view {
            View::Quiz => self.reset_quiz_view(),
            View::Todo => self.reset_todo_view(),
            View::Chat => {}
        }
        self.subject_index = 0;
        self.view = view;
    }

    /// Back to the quiz subject picker, dropping the active quiz.
    pub(crate) fn reset_quiz_view(&mut self) {
        self.cancel_requests(|k| matches!(k, RequestKind::Quiz(_)));
        self.session.end_quiz();
        self.quiz_view = QuizView::Picker;
        self.reset_quiz_question();
    }

    /// Clear per-question UI state.
    pub(crate) fn reset_quiz_question(&mut self) {
        self.quiz_selection = None;
        self.quiz_notice = None;
        self.quiz_advance_at = None;
    }

    /// Move past a graded question once its feedback delay has elapsed.
    pub(crate) fn advance_quiz_if_due(&mut self, now: Instant) -> bool {
        match self.quiz_advance_at {
            Some(at) if now >= at => {}
            _ => return false,
        }
        if let Some(quiz) = self.session.quiz_mut() {
            quiz.advance();
        }
        self.reset_quiz_question();
        true
    }

    /// Back to the to-do subject picker.
    pub(crate) fn reset_todo_view(&mut self) {
        self.cancel_requests(|k| matches!(k, RequestKind::Todo(_)));
        self.todo_view = TodoView::Picker;
        self.todo_index = 0;
        self.todo_input = None;
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            let pos = (pos + n).min(self.last_max_scroll);
            self.scroll = if pos == self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(pos)
            };
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}

/// Move a list cursor one step, clamped to `[0, count)`.
pub(crate) fn step_index(index: usize, count: usize, down: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if down {
        (index + 1).min(count - 1)
    } else {
        index.saturating_sub(1)
    }
}
