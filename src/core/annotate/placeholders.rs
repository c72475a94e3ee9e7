//! `{{name}}` icon placeholders.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::Segment;

/// Icons a reply may embed with `{{name}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    MapPin,
}

impl Icon {
    pub const ALL: [Icon; 1] = [Icon::MapPin];

    /// Placeholder name, e.g. `map-pin` for `{{map-pin}}`.
    pub fn name(self) -> &'static str {
        match self {
            Icon::MapPin => "map-pin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Single-cell glyph for terminal output.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::MapPin => "📍",
        }
    }

    /// SVG child elements on a 24x24 stroked viewBox.
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
        }
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z0-9_-]+)\}\}").expect("placeholder pattern must compile")
    })
}

/// Split `text` on `{{name}}` placeholders.
///
/// Known names become [`Segment::IconMarker`]; unknown names are consumed and produce no
/// segment. Plain spans around every placeholder are kept, even when empty, so the
/// result always starts and ends with plain text.
pub fn resolve_placeholders(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in placeholder_regex().captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(Segment::PlainText {
            value: &text[last..whole.start()],
        });
        match Icon::from_name(name.as_str()) {
            Some(icon) => segments.push(Segment::IconMarker { icon }),
            None => log::debug!("dropping unknown icon placeholder '{}'", name.as_str()),
        }
        last = whole.end();
    }
    segments.push(Segment::PlainText {
        value: &text[last..],
    });
    segments
}
