//! TUI (Text User Interface) chat with the document assistant.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::llm::ChatError;
use crate::core::settings::RenderConfig;

use app::App;
use handlers::{HandleResult, PendingChat};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Move a finished chat result into the app. A worker that exits without sending
/// (e.g. panic in the request) is reported as an error so the input unlocks.
fn poll_chat_result(app: &mut App, pending_chat: &mut Option<PendingChat>) {
    let Some(chat) = pending_chat.as_ref() else {
        return;
    };
    let result = match chat.result_rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            log::error!("Chat worker stopped without a result");
            Err(ChatError::Other(
                "chat request stopped without a reply".into(),
            ))
        }
    };
    app.finish_reply(&chat.prompt, result);
    *pending_chat = None;
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async chat calls.
pub fn run(config: Arc<Config>, render_config: RenderConfig) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(config.deployment.clone(), render_config);
    let mut pending_chat: Option<PendingChat> = None;

    loop {
        poll_chat_result(&mut app, &mut pending_chat);

        terminal.draw(|f| draw::draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
        {
            let result = handlers::handle_key(key, &mut app, &config, &mut pending_chat, &rt);
            if result == HandleResult::Break {
                if let Some(chat) = pending_chat.take() {
                    chat.cancel_token.cancel();
                }
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use tokio_util::sync::CancellationToken;

    use super::app::ChatMessage;

    fn pending(prompt: &str) -> (mpsc::Sender<Result<String, ChatError>>, Option<PendingChat>) {
        let (tx, rx) = mpsc::channel();
        let chat = PendingChat {
            prompt: prompt.to_string(),
            result_rx: rx,
            cancel_token: CancellationToken::new(),
        };
        (tx, Some(chat))
    }

    #[test]
    fn poll_without_result_keeps_waiting() {
        let mut app = App::new("test".to_string(), RenderConfig::default());
        app.push_user("سؤال");
        let (_tx, mut pending_chat) = pending("سؤال");
        poll_chat_result(&mut app, &mut pending_chat);
        assert!(pending_chat.is_some());
        assert_eq!(app.messages.last(), Some(&ChatMessage::Loading));
    }

    #[test]
    fn poll_delivers_reply() {
        let mut app = App::new("test".to_string(), RenderConfig::default());
        app.push_user("سؤال");
        let (tx, mut pending_chat) = pending("سؤال");
        tx.send(Ok("جواب".to_string())).unwrap();
        poll_chat_result(&mut app, &mut pending_chat);
        assert!(pending_chat.is_none());
        assert_eq!(
            app.messages.last(),
            Some(&ChatMessage::Assistant("جواب".to_string()))
        );
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn poll_after_worker_dropped_sender_shows_error() {
        let mut app = App::new("test".to_string(), RenderConfig::default());
        app.push_user("سؤال");
        let (tx, mut pending_chat) = pending("سؤال");
        drop(tx);
        poll_chat_result(&mut app, &mut pending_chat);
        assert!(pending_chat.is_none());
        assert!(!app.is_loading);
        assert!(matches!(app.messages.last(), Some(ChatMessage::Error(_))));
        assert!(app.history.is_empty());
    }
}
