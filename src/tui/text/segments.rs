//! Annotated segments to styled, right-aligned terminal lines.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::annotate::Segment;
use crate::core::settings::RenderConfig;

use super::super::constants::ACCENT;

fn finish_line(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans).alignment(Alignment::Right)
}

/// Build display lines for a message. Plain text keeps its line breaks, document
/// references are underlined (reversed when `selected` matches their index among the
/// message's references), and icons are drawn in the configured color.
pub(crate) fn annotated_lines(
    segments: &[Segment<'_>],
    config: &RenderConfig,
    selected: Option<usize>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if segments.is_empty() {
        return lines;
    }
    let base = if config.font_weight.is_bold() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let icon_color = Color::Rgb(config.icon_color.r, config.icon_color.g, config.icon_color.b);

    let mut current: Vec<Span<'static>> = Vec::new();
    let mut reference_index = 0;
    for segment in segments {
        match segment {
            Segment::PlainText { value } => {
                for (i, part) in value.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(finish_line(std::mem::take(&mut current)));
                    }
                    if !part.is_empty() {
                        current.push(Span::styled(part.to_string(), base));
                    }
                }
            }
            Segment::DocumentReference { name, .. } => {
                let mut style = base.fg(ACCENT).add_modifier(Modifier::UNDERLINED);
                if selected == Some(reference_index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                current.push(Span::styled(name.clone(), style));
                reference_index += 1;
            }
            Segment::IconMarker { icon } => {
                current.push(Span::styled(icon.glyph(), Style::default().fg(icon_color)));
            }
        }
    }
    lines.push(finish_line(current));
    lines
}
