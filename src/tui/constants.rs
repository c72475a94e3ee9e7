//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent: soft cyan (#7EC8E3) that pairs well with the green.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Error block color.
pub(super) const ERROR: Color = Color::Rgb(240, 113, 120);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height including borders.
pub(crate) const INPUT_HEIGHT: u16 = 3;

/// Width of the example prompts panel.
pub(crate) const EXAMPLES_PANEL_WIDTH: u16 = 44;

/// Labels above message blocks.
pub(super) const USER_LABEL: &str = "أنت";
pub(super) const ASSISTANT_LABEL: &str = "المساعد";
