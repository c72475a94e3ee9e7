//! Terminal text output for stdout, styled with ANSI escapes when attached to a terminal.

use crossterm::style::{Color, Stylize};

use crate::core::annotate::{AnnotatedMessage, Segment};

/// Accent for document references (#98FB98), shared with the TUI.
const ACCENT: Color = Color::Rgb {
    r: 152,
    g: 251,
    b: 152,
};

pub const REFERENCE_OPEN: &str = "⟦";
pub const REFERENCE_CLOSE: &str = "⟧";

/// Render the message as text. With `styled == false` no escape codes are emitted.
pub fn render(message: &AnnotatedMessage<'_>, styled: bool) -> String {
    let config = message.config;
    let bold = config.font_weight.is_bold();
    let mut out = String::new();
    for segment in &message.segments {
        match segment {
            Segment::PlainText { value } if styled && bold && !value.is_empty() => {
                out.push_str(&(*value).bold().to_string());
            }
            Segment::PlainText { value } => out.push_str(value),
            Segment::DocumentReference { name, .. } => {
                let text = format!("{REFERENCE_OPEN}{name}{REFERENCE_CLOSE}");
                if styled {
                    out.push_str(&text.with(ACCENT).underlined().bold().to_string());
                } else {
                    out.push_str(&text);
                }
            }
            Segment::IconMarker { icon } => {
                if styled {
                    let c = config.icon_color;
                    let color = Color::Rgb {
                        r: c.r,
                        g: c.g,
                        b: c.b,
                    };
                    out.push_str(&icon.glyph().with(color).to_string());
                } else {
                    out.push_str(icon.glyph());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::RenderConfig;

    #[test]
    fn unstyled_output_marks_references_and_icons() {
        let config = RenderConfig::default();
        let message = AnnotatedMessage::new("{{map-pin}} مقاطعة, رخصة السياقة.", &config);
        assert_eq!(render(&message, false), "📍 مقاطعة, ⟦رخصةالسياقة⟧.");
    }

    #[test]
    fn unstyled_output_drops_unknown_icons() {
        let config = RenderConfig::default();
        let message = AnnotatedMessage::new("a {{star}} b", &config);
        assert_eq!(render(&message, false), "a  b");
    }

    #[test]
    fn styled_output_colors_icons() {
        let config = RenderConfig {
            icon_color: "#102030".parse().unwrap(),
            ..Default::default()
        };
        let message = AnnotatedMessage::new("{{map-pin}}", &config);
        let out = render(&message, true);
        assert!(out.contains("📍"));
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(out.contains("16;32;48"));
        }
    }
}
