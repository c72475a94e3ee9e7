use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier};

use super::annotated_lines;
use crate::core::annotate::annotate;
use crate::core::settings::{FontWeight, RenderConfig};

fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn annotated_lines_empty() {
    let lines = annotated_lines(&annotate(""), &RenderConfig::default(), None);
    assert!(lines.is_empty());
}

#[test]
fn annotated_lines_split_on_newlines() {
    let lines = annotated_lines(&annotate("سطر\n\nآخر"), &RenderConfig::default(), None);
    let texts: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(texts, ["سطر", "", "آخر"]);
    assert!(lines.iter().all(|l| l.alignment == Some(Alignment::Right)));
}

#[test]
fn annotated_lines_style_references() {
    let lines = annotated_lines(
        &annotate("أحضر جواز السفر."),
        &RenderConfig::default(),
        None,
    );
    assert_eq!(lines.len(), 1);
    let reference = lines[0]
        .spans
        .iter()
        .find(|s| s.content == "جوازالسفر")
        .expect("reference span");
    assert!(reference.style.add_modifier.contains(Modifier::UNDERLINED));
    assert!(!reference.style.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn annotated_lines_highlight_selected_reference() {
    let segments = annotate("جواز السفر, عقد الازدياد.");
    let lines = annotated_lines(&segments, &RenderConfig::default(), Some(1));
    let reversed: Vec<&str> = lines[0]
        .spans
        .iter()
        .filter(|s| s.style.add_modifier.contains(Modifier::REVERSED))
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(reversed, ["عقدالازدياد"]);
}

#[test]
fn annotated_lines_color_icons() {
    let config = RenderConfig {
        icon_color: "#102030".parse().unwrap(),
        ..Default::default()
    };
    let lines = annotated_lines(&annotate("{{map-pin}} الرباط"), &config, None);
    assert_eq!(line_text(&lines[0]), "📍 الرباط");
    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Rgb(16, 32, 48)));
}

#[test]
fn annotated_lines_bold_weight() {
    let config = RenderConfig {
        font_weight: FontWeight::Bold,
        ..Default::default()
    };
    let lines = annotated_lines(&annotate("نص"), &config, None);
    assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
}
