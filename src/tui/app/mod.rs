//! TUI application state: messages, input, scroll, document reference selection.

mod messages;

use crate::core::annotate;
use crate::core::message::Message;
use crate::core::prompts;
use crate::core::settings::RenderConfig;

/// Messages displayed in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatMessage {
    User(String),
    Assistant(String),
    /// Placeholder while a request is in flight.
    Loading,
    /// Chat failure shown in place of a reply.
    Error(String),
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub struct App {
    pub(crate) messages: Vec<ChatMessage>,
    /// Completed user/assistant turns sent as context with the next request.
    pub(crate) history: Vec<Message>,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Display settings threaded into every render.
    pub(crate) render_config: RenderConfig,
    /// Deployment name shown in the header.
    pub(crate) deployment: String,
    /// Index into the document references of the latest reply (Tab to cycle).
    pub(crate) selected_reference: Option<usize>,
    /// Last example prompt inserted with Ctrl+E.
    pub(crate) selected_example: Option<usize>,
    /// True while a chat request is in flight.
    pub(crate) is_loading: bool,
}

impl App {
    pub fn new(deployment: String, render_config: RenderConfig) -> Self {
        Self {
            messages: vec![],
            history: vec![],
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            render_config,
            deployment,
            selected_reference: None,
            selected_example: None,
            is_loading: false,
        }
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }

    /// Index in `messages` of the latest assistant reply.
    pub(crate) fn latest_reply_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| matches!(m, ChatMessage::Assistant(_)))
    }

    /// Document reference names in the latest assistant reply, in order.
    pub(crate) fn document_references(&self) -> Vec<String> {
        let Some(ChatMessage::Assistant(content)) =
            self.latest_reply_index().map(|i| &self.messages[i])
        else {
            return vec![];
        };
        let segments = annotate::annotate(content);
        annotate::document_names(&segments)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn select_next_reference(&mut self) {
        let count = self.document_references().len();
        self.selected_reference = match (count, self.selected_reference) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(i)) => Some((i + 1) % n),
        };
    }

    pub(crate) fn select_prev_reference(&mut self) {
        let count = self.document_references().len();
        self.selected_reference = match (count, self.selected_reference) {
            (0, _) => None,
            (n, None) => Some(n - 1),
            (n, Some(i)) => Some((i + n - 1) % n),
        };
    }

    pub(crate) fn selected_reference_name(&self) -> Option<String> {
        let index = self.selected_reference?;
        self.document_references().into_iter().nth(index)
    }

    /// Activate the selected reference. Returns false when nothing is selected.
    pub(crate) fn search_selected_reference(&mut self) -> bool {
        match self.selected_reference_name() {
            Some(name) => {
                self.on_document_search(&name);
                true
            }
            None => false,
        }
    }

    /// Document search callback: prepare a follow-up question about `name`.
    pub(crate) fn on_document_search(&mut self, name: &str) {
        log::info!("Document search: {}", name);
        self.input = prompts::document_search_prompt(name);
    }

    /// Put the next example prompt into the input.
    pub(crate) fn cycle_example_prompt(&mut self) {
        let count = prompts::EXAMPLE_PROMPTS.len();
        let next = self.selected_example.map_or(0, |i| (i + 1) % count);
        self.selected_example = Some(next);
        self.input = prompts::EXAMPLE_PROMPTS[next].to_string();
    }
}
