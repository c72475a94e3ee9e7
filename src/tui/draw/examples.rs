//! Example prompts panel (Ctrl+E cycles through them).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::prompts::EXAMPLE_PROMPTS;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

pub(crate) fn draw_examples(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" أمثلة ", Style::default().fg(ACCENT_SECONDARY)));
    let mut lines = Vec::new();
    for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        let style = if app.selected_example == Some(i) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(*prompt, style)).alignment(Alignment::Right));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
