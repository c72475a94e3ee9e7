//! Document reference extraction over a fixed keyword vocabulary.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::Segment;

/// Government document types recognized in replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    License,
    Card,
    Passport,
    Contract,
    Certificate,
}

impl DocumentKind {
    /// Vocabulary in match order.
    pub const ALL: [DocumentKind; 5] = [
        DocumentKind::License,
        DocumentKind::Card,
        DocumentKind::Passport,
        DocumentKind::Contract,
        DocumentKind::Certificate,
    ];

    /// Keyword as it appears in Arabic text.
    pub fn keyword(self) -> &'static str {
        match self {
            DocumentKind::License => "رخصة",
            DocumentKind::Card => "بطاقة",
            DocumentKind::Passport => "جواز",
            DocumentKind::Contract => "عقد",
            DocumentKind::Certificate => "شهادة",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }
}

/// `<keyword><whitespace><description>`; the description runs up to a newline or `. , ! ?`.
/// No word boundary is enforced, so a keyword inside a longer word still matches.
fn document_regex() -> &'static Regex {
    static DOCUMENT_RE: OnceLock<Regex> = OnceLock::new();
    DOCUMENT_RE.get_or_init(|| {
        let keywords: Vec<String> = DocumentKind::ALL
            .iter()
            .map(|kind| regex::escape(kind.keyword()))
            .collect();
        let pattern = format!(r"({})\s([^\n.,!?]*)", keywords.join("|"));
        Regex::new(&pattern).expect("document pattern must compile")
    })
}

/// Split `text` into alternating plain text and document references.
///
/// The result starts and ends with plain text (possibly empty) unless `text` is empty,
/// in which case it is empty. A keyword followed by an empty description is not a
/// reference: its text stays in the surrounding plain span. The whitespace between
/// keyword and description is consumed.
pub fn extract_entities(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }
    let mut last = 0;
    for caps in document_regex().captures_iter(text) {
        let (Some(keyword), Some(description)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if description.is_empty() {
            log::debug!(
                "keyword '{}' at byte {} has no description; keeping it as text",
                keyword.as_str(),
                keyword.start()
            );
            continue;
        }
        let Some(kind) = DocumentKind::from_keyword(keyword.as_str()) else {
            continue;
        };
        segments.push(Segment::PlainText {
            value: &text[last..keyword.start()],
        });
        segments.push(Segment::DocumentReference {
            kind,
            name: format!("{}{}", keyword.as_str(), description.as_str()),
        });
        last = description.end();
    }
    segments.push(Segment::PlainText {
        value: &text[last..],
    });
    segments
}
