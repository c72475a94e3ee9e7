//! Message annotation: split an assistant reply into plain text, document references,
//! and inline icons.
//!
//! Two passes run over the text. [`extract_entities`] finds document-type keywords and
//! their descriptions; [`resolve_placeholders`] then runs over each remaining plain span
//! and turns `{{name}}` placeholders into icons. Document descriptions are never scanned
//! for placeholders, so `{{map-pin}}` inside one stays literal text.

mod entities;
mod placeholders;

pub use entities::{DocumentKind, extract_entities};
pub use placeholders::{Icon, resolve_placeholders};

use serde::Serialize;

use crate::core::settings::RenderConfig;

/// One renderable unit of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment<'a> {
    /// Text drawn verbatim. May be empty between adjacent markers.
    PlainText { value: &'a str },
    /// A government document mention: keyword and description joined without separator.
    DocumentReference { kind: DocumentKind, name: String },
    /// A recognized `{{name}}` placeholder.
    IconMarker {
        #[serde(rename = "name")]
        icon: Icon,
    },
}

/// Run both passes over `text` and flatten the result, preserving left-to-right order.
pub fn annotate(text: &str) -> Vec<Segment<'_>> {
    extract_entities(text)
        .into_iter()
        .flat_map(|segment| match segment {
            Segment::PlainText { value } => resolve_placeholders(value),
            reference => vec![reference],
        })
        .collect()
}

/// Names of the document references in order of appearance.
pub fn document_names<'s>(segments: &'s [Segment<'_>]) -> Vec<&'s str> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::DocumentReference { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

/// Annotated segments together with the display settings they are rendered with.
#[derive(Debug, Serialize)]
pub struct AnnotatedMessage<'a> {
    pub segments: Vec<Segment<'a>>,
    pub config: &'a RenderConfig,
}

impl<'a> AnnotatedMessage<'a> {
    pub fn new(text: &'a str, config: &'a RenderConfig) -> Self {
        Self {
            segments: annotate(text),
            config,
        }
    }
}
