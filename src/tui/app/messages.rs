//! Message handling for the chat history.

use crate::core::llm::ChatError;
use crate::core::message::Message;

use super::{App, ChatMessage, ScrollPosition};

impl App {
    /// Record a sent question and show the loading placeholder.
    pub(crate) fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage::User(content.to_string()));
        self.messages.push(ChatMessage::Loading);
        self.is_loading = true;
        self.scroll = ScrollPosition::Bottom;
    }

    fn remove_loading(&mut self) {
        if self.messages.last() == Some(&ChatMessage::Loading) {
            self.messages.pop();
        }
        self.is_loading = false;
    }

    /// Replace the loading placeholder with the reply or an error block.
    ///
    /// Only successful turns enter the API history; a failed question is not resent.
    pub(crate) fn finish_reply(&mut self, prompt: &str, result: Result<String, ChatError>) {
        self.remove_loading();
        match result {
            Ok(reply) => {
                self.history.push(Message::user(prompt));
                self.history.push(Message::assistant(reply.clone()));
                self.messages.push(ChatMessage::Assistant(reply));
                self.selected_reference = None;
            }
            Err(ChatError::Cancelled) => {
                self.messages
                    .push(ChatMessage::Error(ChatError::Cancelled.to_string()));
            }
            Err(e) => {
                log::error!("Chat request failed: {:?}", e);
                self.messages.push(ChatMessage::Error(e.to_string()));
            }
        }
        self.scroll = ScrollPosition::Bottom;
    }

    /// Clear the conversation (Ctrl+N).
    pub(crate) fn new_conversation(&mut self) {
        self.messages.clear();
        self.history.clear();
        self.input.clear();
        self.selected_reference = None;
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
    }
}
