//! Apply finished request results to the session and the screen that asked for them.

use crate::core::llm::{ChatError, RequestKind};

use super::app::{App, QuizView, ScrollPosition, TodoView};
use super::requests::Poll;

/// Collect finished requests and apply their results. Cancelled ones are dropped unseen.
pub(super) fn drain_finished(app: &mut App) {
    let mut finished = Vec::new();
    app.pending.retain(|request| match request.poll() {
        Poll::Pending => true,
        Poll::Ready(result) => {
            finished.push((request.kind.clone(), result));
            false
        }
        Poll::Gone => false,
    });
    for (kind, result) in finished {
        apply_result(app, kind, result);
    }
}

/// Route one result to the transcript, the quiz screen, or a to-do list.
pub(super) fn apply_result(app: &mut App, kind: RequestKind, result: Result<String, ChatError>) {
    if let Err(ChatError::Cancelled) = result {
        log::debug!("Dropping cancelled request {:?}", kind);
        return;
    }
    match kind {
        RequestKind::Chat(_) => {
            match result {
                Ok(raw) => app.session.receive_reply(&raw),
                Err(e) => app.session.receive_chat_error(&e.to_string()),
            }
            app.scroll = ScrollPosition::Bottom;
        }
        RequestKind::Quiz(subject) => {
            if app.quiz_view != QuizView::Loading(subject.clone()) {
                log::debug!("Ignoring quiz for {} (view moved on)", subject);
                return;
            }
            match result {
                Ok(raw) => {
                    let count = app.session.start_quiz(&subject, &raw);
                    log::info!("Parsed {} quiz question(s) for {}", count, subject);
                    app.reset_quiz_question();
                    app.quiz_view = QuizView::Running;
                }
                Err(e) => {
                    app.quiz_view = QuizView::Failed(format!("[Error generating quiz: {}]", e));
                }
            }
        }
        RequestKind::Todo(subject) => {
            if app.todo_view != TodoView::Loading(subject.clone()) {
                log::debug!("Ignoring to-do list for {} (view moved on)", subject);
                return;
            }
            match result {
                Ok(raw) => {
                    let count = app.session.set_generated_todos(&subject, &raw);
                    log::info!("Generated {} task(s) for {}", count, subject);
                    app.todo_index = 0;
                    app.todo_view = TodoView::List(subject);
                }
                Err(e) => {
                    app.session.clear_todos(&subject);
                    app.todo_view =
                        TodoView::Failed(format!("[Error generating to-do list: {}]", e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::QuizState;
    use crate::core::session::Sender;
    use crate::tui::app::View;
    use crate::tui::requests::PendingRequest;

    const QUIZ: &str = "Question: Largest planet?\nA) Mars\nB) Jupiter\nC) Venus\nD) Earth\nAnswer: B";

    fn app() -> App {
        App::new("test/model".to_string(), false)
    }

    #[test]
    fn chat_reply_is_cleaned_into_transcript() {
        let mut app = app();
        apply_result(&mut app, RequestKind::Chat("hi".into()), Ok("## Hello\n\n**there**".into()));
        let last = app.session.transcript().last().unwrap();
        assert_eq!(last.sender, Sender::Assistant);
        assert_eq!(last.text, "Hello\nthere");
    }

    #[test]
    fn chat_error_is_bracketed() {
        let mut app = app();
        apply_result(
            &mut app,
            RequestKind::Chat("hi".into()),
            Err(ChatError::ApiMessage("quota exceeded".into())),
        );
        assert_eq!(
            app.session.transcript().last().unwrap().text,
            "[Error contacting AI: API error: quota exceeded]"
        );
    }

    #[test]
    fn quiz_result_starts_quiz_when_still_loading() {
        let mut app = app();
        app.switch_view(View::Quiz);
        app.quiz_view = QuizView::Loading("Astronomy".into());
        apply_result(&mut app, RequestKind::Quiz("Astronomy".into()), Ok(QUIZ.into()));
        assert_eq!(app.quiz_view, QuizView::Running);
        assert_eq!(app.session.quiz().unwrap().state(), QuizState::Asking(0));
    }

    #[test]
    fn stale_quiz_result_is_ignored() {
        let mut app = app();
        app.quiz_view = QuizView::Loading("Physics".into());
        apply_result(&mut app, RequestKind::Quiz("Astronomy".into()), Ok(QUIZ.into()));
        assert_eq!(app.quiz_view, QuizView::Loading("Physics".into()));
        assert!(app.session.quiz().is_none());
    }

    #[test]
    fn quiz_error_is_shown() {
        let mut app = app();
        app.quiz_view = QuizView::Loading("Art".into());
        apply_result(&mut app, RequestKind::Quiz("Art".into()), Err(ChatError::EmptyResponse));
        assert_eq!(
            app.quiz_view,
            QuizView::Failed("[Error generating quiz: The model returned an empty response]".into())
        );
    }

    #[test]
    fn todo_result_fills_list_and_opens_it() {
        let mut app = app();
        app.todo_view = TodoView::Loading("History".into());
        apply_result(
            &mut app,
            RequestKind::Todo("History".into()),
            Ok("Read chapter 3\nMake a timeline\n".into()),
        );
        assert_eq!(app.todo_view, TodoView::List("History".into()));
        assert_eq!(app.session.todo_list("History").len(), 2);
    }

    #[test]
    fn stale_todo_result_leaves_list_untouched() {
        let mut app = app();
        app.todo_view = TodoView::Loading("Physics".into());
        apply_result(
            &mut app,
            RequestKind::Todo("History".into()),
            Ok("Read chapter 3".into()),
        );
        assert_eq!(app.todo_view, TodoView::Loading("Physics".into()));
        assert!(app.session.needs_todo_generation("History"));
    }

    #[test]
    fn todo_error_leaves_empty_list() {
        let mut app = app();
        app.todo_view = TodoView::Loading("History".into());
        apply_result(
            &mut app,
            RequestKind::Todo("History".into()),
            Err(ChatError::ApiMessage("down".into())),
        );
        assert!(app.session.todo_list("History").is_empty());
        assert!(matches!(app.todo_view, TodoView::Failed(ref m) if m.starts_with("[Error generating to-do list:")));
    }

    #[test]
    fn cancelled_results_never_apply() {
        let mut app = app();
        let before = app.session.transcript().len();
        apply_result(&mut app, RequestKind::Chat("hi".into()), Err(ChatError::Cancelled));
        assert_eq!(app.session.transcript().len(), before);
    }

    #[test]
    fn drain_applies_ready_and_keeps_nothing_finished() {
        let mut app = app();
        app.track(PendingRequest::ready(RequestKind::Chat("hi".into()), Ok("Hello".into())));
        let cancelled = PendingRequest::ready(RequestKind::Chat("x".into()), Ok("stale".into()));
        cancelled.cancel_token.cancel();
        app.track(cancelled);

        drain_finished(&mut app);
        assert!(app.pending.is_empty());
        let texts: Vec<_> = app.session.transcript().iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"Hello"));
        assert!(!texts.contains(&"stale"));
    }
}
