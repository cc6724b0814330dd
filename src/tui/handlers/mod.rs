//! Keyboard handling: global shortcuts, then the active view's keys.
//!
//! View handlers only mutate `App` and return the request to send, if any;
//! `handle_key` spawns it and tracks it on the app.

mod chat;
mod quiz;
mod todo;

use crossterm::event::{KeyEvent, KeyEventKind};
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::llm::RequestKind;

use super::app::{App, View};
use super::requests;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key handling.
pub(crate) struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event.
pub(crate) fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let app = ctx.app;
    let request = match dispatch_key(key, app) {
        Dispatch::Quit => return HandleResult::Break,
        Dispatch::Request(kind) => kind,
        Dispatch::Handled => return HandleResult::Continue,
    };
    let pending =
        requests::spawn_request(ctx.rt, Arc::clone(ctx.config), app.model_id.clone(), request);
    app.track(pending);
    HandleResult::Continue
}

/// Outcome of routing a key.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Dispatch {
    Handled,
    Request(RequestKind),
    Quit,
}

/// Route a key to a global shortcut or the active view.
pub(crate) fn dispatch_key(key: KeyEvent, app: &mut App) -> Dispatch {
    if key.kind != KeyEventKind::Press {
        return Dispatch::Handled;
    }
    if let Some(shortcut) = Shortcut::match_key(&key) {
        match shortcut {
            Shortcut::Quit => return Dispatch::Quit,
            Shortcut::NextView => app.switch_view(app.view.next()),
            Shortcut::PrevView => app.switch_view(app.view.prev()),
            Shortcut::Goto(view) => app.switch_view(view),
        }
        return Dispatch::Handled;
    }
    let request = match app.view {
        View::Chat => chat::handle(key, app),
        View::Quiz => quiz::handle(key, app),
        View::Todo => todo::handle(key, app),
    };
    match request {
        Some(kind) => Dispatch::Request(kind),
        None => Dispatch::Handled,
    }
}
