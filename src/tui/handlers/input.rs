//! Handler for main input (chat input and scroll).

use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::config::Config;

use super::super::app::App;
use super::super::constants;
use super::PendingChat;
use super::chat_spawn;

/// Handle main input keys (anything that is not a shortcut).
pub(crate) fn handle_main_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    config: &Arc<Config>,
    pending_chat: &mut Option<PendingChat>,
    rt: &Arc<Runtime>,
) -> super::HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Enter, _) => {
            let input = app.input.trim().to_string();
            if !input.is_empty() && pending_chat.is_none() {
                app.input.clear();
                let history = app.history.clone();
                app.push_user(&input);
                *pending_chat = Some(chat_spawn::spawn_chat(
                    rt,
                    Arc::clone(config),
                    input,
                    history,
                ));
            }
        }
        (KeyCode::Backspace, _) => {
            app.input.pop();
        }
        (KeyCode::Up, _) => app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char(c), mods) => {
            // Ignore Alt/Ctrl+key: not text
            if !mods.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
                app.input.push(c);
            }
        }
        _ => {}
    }
    super::HandleResult::Continue
}
