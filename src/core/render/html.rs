//! HTML output: an RTL block with document buttons and inline SVG icons.

use crate::core::annotate::{AnnotatedMessage, Icon, Segment};
use crate::core::settings::IconColor;

const ICON_CLASS: &str = "inline-block h-4 w-4 mx-1";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

fn icon_svg(icon: Icon, color: IconColor) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{ICON_CLASS}" data-icon="{}">{}</svg>"#,
        icon.name(),
        icon.svg_body()
    )
}

/// Render the message as a single `<div dir="rtl">` fragment.
pub fn render(message: &AnnotatedMessage<'_>) -> String {
    let config = message.config;
    let mut out = format!(
        r#"<div dir="rtl" class="whitespace-pre-wrap {} {}">"#,
        config.font_size.class(),
        config.font_weight.class()
    );
    for segment in &message.segments {
        match segment {
            Segment::PlainText { value } => out.push_str(&escape_html(value)),
            Segment::DocumentReference { name, .. } => {
                let name = escape_html(name);
                out.push_str(&format!(
                    r#"<button type="button" class="document-reference" data-document="{name}">{name}</button>"#
                ));
            }
            Segment::IconMarker { icon } => out.push_str(&icon_svg(*icon, config.icon_color)),
        }
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{FontSize, FontWeight, RenderConfig};

    #[test]
    fn wraps_in_rtl_div_with_font_classes() {
        let config = RenderConfig {
            font_size: FontSize::Large,
            font_weight: FontWeight::Bold,
            ..Default::default()
        };
        let html = render(&AnnotatedMessage::new("مرحبا", &config));
        assert_eq!(
            html,
            r#"<div dir="rtl" class="whitespace-pre-wrap text-lg font-bold">مرحبا</div>"#
        );
    }

    #[test]
    fn document_reference_becomes_button() {
        let config = RenderConfig::default();
        let html = render(&AnnotatedMessage::new("جواز السفر.", &config));
        assert!(html.contains(
            r#"<button type="button" class="document-reference" data-document="جوازالسفر">جوازالسفر</button>."#
        ));
    }

    #[test]
    fn icon_uses_configured_color() {
        let config = RenderConfig {
            icon_color: "#c1272d".parse().unwrap(),
            ..Default::default()
        };
        let html = render(&AnnotatedMessage::new("{{map-pin}}", &config));
        assert!(html.contains(r##"stroke="#C1272D""##));
        assert!(html.contains(r#"data-icon="map-pin""#));
    }

    #[test]
    fn plain_text_and_names_are_escaped() {
        let config = RenderConfig::default();
        let html = render(&AnnotatedMessage::new("<b> & عقد \"x\"", &config));
        assert!(html.contains("&lt;b&gt; &amp; "));
        assert!(html.contains(r#"data-document="عقد&quot;x&quot;""#));
        assert!(!html.contains("<b>"));
    }
}
