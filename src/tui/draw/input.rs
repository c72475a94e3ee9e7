//! Input box and bottom shortcut bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};
use super::super::shortcuts::Shortcut;

const BOTTOM_BAR_SHORTCUTS: &[Shortcut] = &[
    Shortcut::NextReference,
    Shortcut::SearchReference,
    Shortcut::ExamplePrompt,
    Shortcut::NewConversation,
    Shortcut::Cancel,
    Shortcut::Quit,
];

pub(crate) fn draw_input_block(f: &mut Frame, app: &mut App, area: Rect) {
    let border = if app.is_loading {
        Color::DarkGray
    } else {
        ACCENT
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner_width = area.width.saturating_sub(2) as usize;
    // Keep the tail visible when the input is wider than the box.
    let count = app.input.chars().count();
    let visible: String = if count > inner_width.saturating_sub(1) {
        app.input
            .chars()
            .skip(count + 1 - inner_width.max(1))
            .collect()
    } else {
        app.input.clone()
    };
    let cursor_x = area.x + 1 + visible.chars().count() as u16;
    f.render_widget(
        Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::White)),
        area,
    );
    if !app.is_loading {
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

pub(crate) fn draw_bottom_bar(f: &mut Frame, _app: &mut App, area: Rect) {
    let mut spans = Vec::new();
    for (i, shortcut) in BOTTOM_BAR_SHORTCUTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            shortcut.hint(),
            Style::default().fg(ACCENT_SECONDARY),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}
