//! Terminal interface: chat, to-do, and quiz screens over one study session.

mod app;
mod constants;
mod draw;
mod handlers;
mod requests;
mod results;
mod shortcuts;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::config::Config;

use app::App;
use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

/// Run the TUI loop. Requests run on a dedicated Tokio runtime; the loop stays synchronous.
pub fn run(config: Arc<Config>, model_id: String) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(model_id, config.show_timestamps);
    log::info!("TUI started with model {}", app.model_id);

    loop {
        results::drain_finished(&mut app);
        app.advance_quiz_if_due(Instant::now());

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let result = handlers::handle_key(
                key,
                handlers::HandleKeyContext {
                    app: &mut app,
                    config: &config,
                    rt: &rt,
                },
            );
            if result == HandleResult::Break {
                break;
            }
        }
    }

    app.cancel_requests(|_| true);
    terminal.show_cursor()?;
    log::info!("TUI exited");
    Ok(())
}
