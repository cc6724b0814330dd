//! TUI constants: colors, timing, and logo frames.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Chat title blue (#60A5FA).
pub(super) const CHAT_COLOR: Color = Color::Rgb(96, 165, 250);

/// Quiz title pink (#F472B6).
pub(super) const QUIZ_COLOR: Color = Color::Rgb(244, 114, 182);

/// To-do title green (#34D399).
pub(super) const TODO_COLOR: Color = Color::Rgb(52, 211, 153);

/// Subject heading amber (#FBBF24).
pub(super) const SUBJECT_COLOR: Color = Color::Rgb(251, 191, 36);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Minimalist logo when idle (single character).
pub(super) const LOGO_IDLE: &str = "◆";

/// Spinner frames while requests are in flight (braille pattern, 4 frames).
pub(super) const LOGO_THINKING: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
