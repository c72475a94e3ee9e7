//! Event handlers for the TUI keyboard input.

mod chat_spawn;
mod input;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::KeyEvent;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::llm;

use super::app::App;
use super::shortcuts::Shortcut;

/// Holds the receiver for a chat request in progress.
pub struct PendingChat {
    /// Question being answered; recorded in history with the reply.
    pub prompt: String,
    pub result_rx: mpsc::Receiver<Result<String, llm::ChatError>>,
    /// Token to cancel the in-flight request.
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key press: shortcuts first, then the text input.
pub fn handle_key(
    key: KeyEvent,
    app: &mut App,
    config: &Arc<Config>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    let Some(shortcut) = Shortcut::match_key(&key) else {
        return input::handle_main_input(key.code, key.modifiers, app, config, pending_chat, rt);
    };
    match shortcut {
        Shortcut::Quit => return HandleResult::Break,
        Shortcut::Cancel => {
            if let Some(chat) = pending_chat.as_ref() {
                chat.cancel_token.cancel();
            }
        }
        Shortcut::NextReference => app.select_next_reference(),
        Shortcut::PrevReference => app.select_prev_reference(),
        Shortcut::SearchReference => {
            if !app.search_selected_reference() {
                log::debug!("Document search requested with no reference selected");
            }
        }
        Shortcut::ExamplePrompt => app.cycle_example_prompt(),
        Shortcut::NewConversation => {
            if pending_chat.is_none() {
                app.new_conversation();
            }
        }
    }
    HandleResult::Continue
}
