//! Chat history: labelled message blocks, annotated replies, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};

use crate::core::annotate::annotate;
use crate::core::prompts::LOADING_TEXT;

use super::super::app::{App, ChatMessage};
use super::super::constants::{
    ACCENT, ACCENT_SECONDARY, ASSISTANT_LABEL, ERROR, USER_LABEL,
};
use super::super::text::annotated_lines;

fn label_line(label: &'static str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
}

/// Rows a line takes once wrapped to `width` columns.
fn wrapped_height(line: &Line<'_>, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    line.width().div_ceil(width).max(1)
}

/// Build every history line. The selected reference is highlighted in the latest reply only.
fn history_lines(app: &App) -> Vec<Line<'static>> {
    let latest_reply = app.latest_reply_index();
    let mut lines = Vec::new();
    for (index, message) in app.messages.iter().enumerate() {
        match message {
            ChatMessage::User(content) => {
                lines.push(label_line(USER_LABEL, ACCENT_SECONDARY));
                lines.extend(annotated_lines(
                    &annotate(content),
                    &app.render_config,
                    None,
                ));
            }
            ChatMessage::Assistant(content) => {
                let selected = if latest_reply == Some(index) {
                    app.selected_reference
                } else {
                    None
                };
                lines.push(label_line(ASSISTANT_LABEL, ACCENT));
                lines.extend(annotated_lines(
                    &annotate(content),
                    &app.render_config,
                    selected,
                ));
            }
            ChatMessage::Loading => {
                lines.push(label_line(ASSISTANT_LABEL, ACCENT));
                lines.push(
                    Line::from(Span::styled(
                        LOADING_TEXT,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ))
                    .alignment(Alignment::Right),
                );
            }
            ChatMessage::Error(text) => {
                lines.push(label_line(ASSISTANT_LABEL, ERROR));
                for part in text.split('\n') {
                    lines.push(
                        Line::from(Span::styled(part.to_string(), Style::default().fg(ERROR)))
                            .alignment(Alignment::Right),
                    );
                }
            }
        }
        lines.push(Line::default());
    }
    lines
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];

    let lines = history_lines(app);
    let width = text_area.width as usize;
    let total_lines: usize = lines.iter().map(|l| wrapped_height(l, width)).sum();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = app.scroll_line();

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll_pos).unwrap_or(u16::MAX), 0));
    f.render_widget(paragraph, text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::RenderConfig;

    #[test]
    fn wrapped_height_rounds_up() {
        let line = Line::from("abcdefghij");
        assert_eq!(wrapped_height(&line, 4), 3);
        assert_eq!(wrapped_height(&line, 10), 1);
        assert_eq!(wrapped_height(&Line::default(), 10), 1);
    }

    #[test]
    fn history_shows_loading_and_errors() {
        let mut app = App::new("test".to_string(), RenderConfig::default());
        app.push_user("سؤال");
        let text: Vec<String> = history_lines(&app)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text, [USER_LABEL, "سؤال", "", ASSISTANT_LABEL, LOADING_TEXT, ""]);

        app.messages.pop();
        app.messages.push(ChatMessage::Error("Request cancelled".to_string()));
        let last = history_lines(&app);
        assert_eq!(last[4].spans[0].style.fg, Some(ERROR));
    }
}
