//! Output formats for an annotated message outside the TUI.

pub mod ansi;
pub mod html;

use crate::core::annotate::AnnotatedMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Terminal text (styled when stdout is a terminal)
    #[default]
    Text,
    /// Segments and render settings as JSON
    Json,
    /// RTL HTML fragment
    Html,
}

/// Render `message` in `format`. `styled` only affects text output.
pub fn render(
    message: &AnnotatedMessage<'_>,
    format: OutputFormat,
    styled: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(ansi::render(message, styled)),
        OutputFormat::Json => serde_json::to_string_pretty(message),
        OutputFormat::Html => Ok(html::render(message)),
    }
}
