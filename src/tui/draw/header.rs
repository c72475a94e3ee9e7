//! Header: app title, deployment, display settings.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::app as app_info;

use super::super::app::App;
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

/// Max width for the deployment name; longer names are truncated with "…".
const DEPLOYMENT_HEADER_WIDTH: u16 = 28;

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let start = chars.len().saturating_sub(max_len.saturating_sub(1));
    format!("…{}", chars[start..].iter().collect::<String>())
}

/// Display settings summary, e.g. "text-base · font-normal · ■ #0F4C81".
fn settings_spans(app: &App) -> Vec<Span<'static>> {
    let config = &app.render_config;
    let color = config.icon_color;
    vec![
        Span::styled(
            format!("{} · {} · ", config.font_size.class(), config.font_weight.class()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("■ ", Style::default().fg(Color::Rgb(color.r, color.g, color.b))),
        Span::styled(color.to_string(), Style::default().fg(Color::DarkGray)),
    ]
}

pub(crate) fn draw_header(f: &mut Frame, app: &mut App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(DEPLOYMENT_HEADER_WIDTH),
        ])
        .split(area);

    let mut title = vec![Span::styled(
        format!("{} {} ", app_info::NAME, app_info::VERSION),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if app.is_loading {
        title.push(Span::styled("● ", Style::default().fg(ACCENT_SECONDARY)));
    }
    title.extend(settings_spans(app));
    f.render_widget(Paragraph::new(Line::from(title)), header_chunks[0]);

    let deployment = Line::from(Span::styled(
        truncate(&app.deployment, DEPLOYMENT_HEADER_WIDTH as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(deployment).alignment(Alignment::Right),
        header_chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_tail() {
        assert_eq!(truncate("gpt-35-turbo", 28), "gpt-35-turbo");
        assert_eq!(truncate("abcdefgh", 4), "…fgh");
    }
}
